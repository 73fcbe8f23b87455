use serde::{Deserialize, Serialize};

/// Snapshot of a completed board, the only value sent to the result store.
///
/// Serializes to the store's POST body: `{player_name, score, tries, matches}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub player_name: String,
    pub score: u32,
    #[serde(rename = "tries")]
    pub attempt_count: u32,
    #[serde(rename = "matches")]
    pub matched_count: u32,
}
