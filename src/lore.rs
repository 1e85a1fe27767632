//! Lore generation via an external text service.
//!
//! High-rarity titles get a short history backfilled after the forge
//! reveal, and chaos fusion asks the service to name the fused title.
//! All network calls run off the main thread; results come back over a
//! channel and are applied between input polls.

use crate::player::PlayerState;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Endpoint for the hosted text model.
const LORE_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Fallback history used when the service is unreachable.
pub const DEFAULT_HISTORY: &str = "A title whispered in the halls of eternity.";

/// The named result of a chaos fusion: three title words plus a history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaosFusion {
    pub words: [String; 3],
    pub history: String,
}

/// Text-generation backend. The production impl talks HTTP; tests swap
/// in a canned one.
pub trait LoreClient {
    /// A one-sentence origin story for a title.
    fn title_history(&self, title_text: &str) -> Result<String, Box<dyn Error>>;

    /// Words and history for a title fused out of the given inputs.
    fn chaos_fusion(&self, inputs: &[String]) -> Result<ChaosFusion, Box<dyn Error>>;
}

/// An asynchronous lore result, drained by the main loop.
#[derive(Debug, Clone)]
pub enum LoreEvent {
    History { title_id: String, history: String },
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

/// Lore client backed by the hosted Gemini endpoint.
pub struct HttpLoreClient {
    api_key: String,
}

impl HttpLoreClient {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Reads the key from `TITLEFORGE_LORE_KEY`; absent key means lore
    /// stays on the built-in fallback text.
    pub fn from_env() -> Option<Self> {
        std::env::var("TITLEFORGE_LORE_KEY").ok().map(Self::new)
    }

    fn generate(&self, prompt: String) -> Result<String, Box<dyn Error>> {
        let url = format!("{}?key={}", LORE_API_URL, self.api_key);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response: GenerateResponse = ureq::post(&url)
            .set("Content-Type", "application/json")
            .send_json(&request)?
            .into_json()?;

        let text = response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or("empty lore response")?;
        Ok(text)
    }
}

impl LoreClient for HttpLoreClient {
    fn title_history(&self, title_text: &str) -> Result<String, Box<dyn Error>> {
        let prompt = format!(
            "Write a single ominous sentence of lore for a legendary title \
             called \"{}\". Reply with the sentence only.",
            title_text
        );
        self.generate(prompt)
    }

    fn chaos_fusion(&self, inputs: &[String]) -> Result<ChaosFusion, Box<dyn Error>> {
        let prompt = format!(
            "These legendary titles are being fused into one chaos title: {}. \
             Reply with exactly two lines. Line 1: three evocative words \
             separated by | characters. Line 2: one sentence of lore for the \
             fused title.",
            inputs.join("; ")
        );
        let text = self.generate(prompt)?;
        parse_fusion_reply(&text).ok_or_else(|| "malformed fusion response".into())
    }
}

/// Parses the two-line fusion reply. Returns None when the shape is off;
/// the fusion then aborts without consuming anything.
fn parse_fusion_reply(text: &str) -> Option<ChaosFusion> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let name_line = lines.next()?;
    let history = lines.next()?.trim().to_string();

    let words: Vec<String> = name_line
        .split('|')
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    if words.len() != 3 {
        return None;
    }
    Some(ChaosFusion {
        words: [words[0].clone(), words[1].clone(), words[2].clone()],
        history,
    })
}

/// Fires a background history request for one title. The worker sends
/// its result over `tx`; a dead service falls back to the default text
/// so every eligible title ends up with some history.
pub fn request_history(
    client: Arc<dyn LoreClient + Send + Sync>,
    title_id: String,
    title_text: String,
    tx: Sender<LoreEvent>,
) {
    std::thread::spawn(move || {
        let history = client
            .title_history(&title_text)
            .unwrap_or_else(|_| DEFAULT_HISTORY.to_string());
        // Receiver gone means the game is shutting down.
        let _ = tx.send(LoreEvent::History { title_id, history });
    });
}

/// Writes a fetched history onto its title. The title may have been
/// sold or sacrificed while the request was in flight; that is fine and
/// the result is simply dropped.
pub fn apply_history(player: &mut PlayerState, title_id: &str, history: String) {
    if let Some(title) = player.title_mut(title_id) {
        title.history = Some(history);
    }
}
