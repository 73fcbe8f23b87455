use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardState {
    Hidden,
    Revealed,
    /// Terminal: a matched card never flips back.
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Position on the board, stable for the whole game.
    pub id: usize,
    /// Pair key; exactly two cards on a board share it.
    pub symbol_id: String,
    /// Image reference derived from `symbol_id`.
    pub face: String,
    pub state: CardState,
}

impl Card {
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}
