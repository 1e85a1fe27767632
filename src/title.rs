use crate::mutation::Mutation;
use crate::rarity::Rarity;
use serde::{Deserialize, Serialize};

/// One drawn word of a three-word title. Immutable once drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub rarity: Rarity,
    pub column: usize,
}

/// A forged three-word title. Created only by the title forge or the
/// fusion altar; immutable after creation except for the asynchronous
/// lore backfill into `history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: String,
    pub words: [Word; 3],
    /// Highest-ordinal rarity among the three words.
    pub rarity: Rarity,
    /// All three word rarities identical.
    pub is_purity: bool,
    /// First/last words satisfy a lore pairing.
    pub is_synergy: bool,
    pub value: f64,
    pub history: Option<String>,
    pub seed: String,
    pub timestamp: i64,
    pub world: u32,
    pub mutation: Option<Mutation>,
}

impl Title {
    /// The full display text, e.g. "Phoenix of the Burning Sun".
    pub fn full_text(&self) -> String {
        format!(
            "{} {} {}",
            self.words[0].text, self.words[1].text, self.words[2].text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, rarity: Rarity, column: usize) -> Word {
        Word {
            text: text.to_string(),
            rarity,
            column,
        }
    }

    #[test]
    fn test_full_text_joins_columns_in_order() {
        let title = Title {
            id: "t1".to_string(),
            words: [
                word("Phoenix", Rarity::Mythic, 0),
                word("of the Burning", Rarity::Mythic, 1),
                word("Sun", Rarity::Mythic, 2),
            ],
            rarity: Rarity::Mythic,
            is_purity: true,
            is_synergy: true,
            value: 375_000.0,
            history: None,
            seed: "abc".to_string(),
            timestamp: 0,
            world: 1,
            mutation: None,
        };
        assert_eq!(title.full_text(), "Phoenix of the Burning Sun");
    }
}
