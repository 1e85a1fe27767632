//! Chaos fusion: sacrifices a handful of titles to the lore service in
//! exchange for a single externally-named Chaos title.

use crate::constants::*;
use crate::game_logic::GameError;
use crate::lore::LoreClient;
use crate::player::PlayerState;
use crate::rarity::Rarity;
use crate::title::{Title, Word};
use chrono::Utc;
use uuid::Uuid;

/// Fuses between two and five owned titles into one Chaos title named by
/// the lore service. All-or-nothing: the service is consulted before
/// anything burns, so a failed or malformed response leaves the
/// inventory exactly as it was.
pub fn fuse(
    player: &mut PlayerState,
    ids: &[String],
    client: &dyn LoreClient,
) -> Result<Title, GameError> {
    if ids.len() < FUSION_MIN_TITLES || ids.len() > FUSION_MAX_TITLES {
        return Err(GameError::InvalidSelection);
    }
    let mut inputs = Vec::with_capacity(ids.len());
    for id in ids {
        match player.title(id) {
            Some(title) if !inputs.iter().any(|(seen, _, _)| seen == id) => {
                inputs.push((id.clone(), title.full_text(), title.world));
            }
            _ => return Err(GameError::InvalidSelection),
        }
    }

    let texts: Vec<String> = inputs.iter().map(|(_, text, _)| text.clone()).collect();
    let fusion = client
        .chaos_fusion(&texts)
        .map_err(|e| GameError::ExternalService(e.to_string()))?;

    // Point of no return: the service answered, so the inputs burn.
    for (id, _, _) in &inputs {
        player.remove_title(id);
    }

    let world = inputs.first().map_or(FUSION_DEFAULT_WORLD, |(_, _, w)| *w);
    let [first, middle, last] = fusion.words;
    let word = |text: String, column: usize| Word {
        text,
        rarity: Rarity::Chaos,
        column,
    };
    let words = [word(first, 0), word(middle, 1), word(last, 2)];

    let title = Title {
        id: Uuid::new_v4().to_string(),
        words,
        rarity: Rarity::Chaos,
        is_purity: true,
        is_synergy: true,
        value: FUSION_TITLE_VALUE,
        history: Some(fusion.history),
        seed: format!("fusion-{}", inputs.len()),
        timestamp: Utc::now().timestamp(),
        world,
        mutation: None,
    };
    player.inventory.insert(0, title.clone());
    Ok(title)
}
