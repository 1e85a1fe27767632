//! Market trends: a bounded random walk per rarity tier, plus valuation
//! of titles against the current multipliers.

use crate::constants::*;
use crate::rarity::Rarity;
use crate::title::Title;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Live valuation state for one rarity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrend {
    pub rarity: Rarity,
    pub multiplier: f64,
    pub direction: TrendDirection,
}

/// Fresh trend table: every tier starts flat at 1.0.
pub fn new_trends() -> Vec<MarketTrend> {
    Rarity::all()
        .iter()
        .map(|r| MarketTrend {
            rarity: *r,
            multiplier: 1.0,
            direction: TrendDirection::Stable,
        })
        .collect()
}

/// Advances every tier's walk by one step: a uniform delta in
/// [-0.2, 0.2], hard-clamped to [0.5, 2.5]. Tiers move independently;
/// there is no cross-tier correlation and no mean reversion beyond the
/// clamp. Invoked on a fixed 30-second wall-clock period.
pub fn tick_market(trends: &mut [MarketTrend], rng: &mut impl Rng) {
    for trend in trends.iter_mut() {
        let delta = rng.gen_range(-MARKET_DELTA_SPREAD..MARKET_DELTA_SPREAD);
        let new_multiplier =
            (trend.multiplier + delta).clamp(MARKET_MULTIPLIER_MIN, MARKET_MULTIPLIER_MAX);
        trend.direction = if new_multiplier > trend.multiplier {
            TrendDirection::Up
        } else if new_multiplier < trend.multiplier {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };
        trend.multiplier = new_multiplier;
    }
}

/// Current multiplier for a tier; missing entries value flat.
pub fn multiplier_for(rarity: Rarity, trends: &[MarketTrend]) -> f64 {
    trends
        .iter()
        .find(|t| t.rarity == rarity)
        .map_or(1.0, |t| t.multiplier)
}

/// Spendable sale value: the title's intrinsic value scaled by its tier's
/// current market multiplier, floored to whole currency.
pub fn market_value(title: &Title, trends: &[MarketTrend]) -> u64 {
    (title.value * multiplier_for(title.rarity, trends)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_trends_cover_every_tier() {
        let trends = new_trends();
        assert_eq!(trends.len(), Rarity::all().len());
        for trend in &trends {
            assert_eq!(trend.multiplier, 1.0);
            assert_eq!(trend.direction, TrendDirection::Stable);
        }
    }

    #[test]
    fn test_tick_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(41);
        let mut trends = new_trends();
        for _ in 0..10_000 {
            tick_market(&mut trends, &mut rng);
            for trend in &trends {
                assert!(trend.multiplier >= MARKET_MULTIPLIER_MIN);
                assert!(trend.multiplier <= MARKET_MULTIPLIER_MAX);
            }
        }
    }

    #[test]
    fn test_tick_clamps_out_of_range_input() {
        // Even a corrupted multiplier re-enters the band after one tick.
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut trends = new_trends();
        trends[0].multiplier = 9.0;
        trends[1].multiplier = -3.0;
        tick_market(&mut trends, &mut rng);
        assert_eq!(trends[0].multiplier, MARKET_MULTIPLIER_MAX);
        assert_eq!(trends[1].multiplier, MARKET_MULTIPLIER_MIN);
    }

    #[test]
    fn test_direction_tracks_movement() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let mut trends = new_trends();
        for _ in 0..100 {
            let before: Vec<f64> = trends.iter().map(|t| t.multiplier).collect();
            tick_market(&mut trends, &mut rng);
            for (old, trend) in before.iter().zip(&trends) {
                match trend.direction {
                    TrendDirection::Up => assert!(trend.multiplier > *old),
                    TrendDirection::Down => assert!(trend.multiplier < *old),
                    TrendDirection::Stable => assert_eq!(trend.multiplier, *old),
                }
            }
        }
    }

    #[test]
    fn test_market_value_floors() {
        use crate::title::Word;
        let title = Title {
            id: "t".to_string(),
            words: [
                Word { text: "The".into(), rarity: Rarity::Common, column: 0 },
                Word { text: "of the".into(), rarity: Rarity::Common, column: 1 },
                Word { text: "Path".into(), rarity: Rarity::Common, column: 2 },
            ],
            rarity: Rarity::Common,
            is_purity: true,
            is_synergy: false,
            value: 333.0,
            history: None,
            seed: "s".into(),
            timestamp: 0,
            world: 1,
            mutation: None,
        };
        let mut trends = new_trends();
        trends[0].multiplier = 1.5;
        assert_eq!(market_value(&title, &trends), 499);
    }

    #[test]
    fn test_missing_trend_defaults_to_flat() {
        let title_value = 250.0;
        let title = {
            use crate::title::Word;
            Title {
                id: "t".to_string(),
                words: [
                    Word { text: "a".into(), rarity: Rarity::Rare, column: 0 },
                    Word { text: "b".into(), rarity: Rarity::Rare, column: 1 },
                    Word { text: "c".into(), rarity: Rarity::Rare, column: 2 },
                ],
                rarity: Rarity::Rare,
                is_purity: true,
                is_synergy: false,
                value: title_value,
                history: None,
                seed: "s".into(),
                timestamp: 0,
                world: 1,
                mutation: None,
            }
        };
        assert_eq!(market_value(&title, &[]), 250);
    }
}
