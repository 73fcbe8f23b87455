//! Board engine for the card-matching memory game.
//!
//! The engine is synchronous and timer-free. A host owns the current
//! [`Board`] value, feeds it through [`Board::reveal`] and
//! [`Board::resolve_pending_mismatch`], and derives a [`GameResult`] with
//! [`Board::finish`] once the board is complete.

pub mod board;
pub mod card;
pub mod catalogue;
pub mod error;
pub mod game_result;

pub use board::{Board, GameStatus, DEFAULT_PAIR_COUNT, MATCH_REWARD};
pub use card::{Card, CardState};
pub use catalogue::SymbolCatalogue;
pub use error::GameError;
pub use game_result::GameResult;
