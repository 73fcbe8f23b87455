//! Board state machine: flip, compare, flip back.
//!
//! Per card: `hidden -> revealed -> matched` (terminal), or
//! `revealed -> hidden` once a mismatch is resolved by the host.
//! Per board: `inProgress -> complete` (terminal) when every pair is matched.
//!
//! Transitions consume the board and return the next value. Invalid input
//! (stale clicks, clicks on a locked or finished board) returns the board
//! unchanged rather than an error.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardState};
use crate::catalogue::SymbolCatalogue;
use crate::error::GameError;
use crate::game_result::GameResult;

/// Points awarded per matched pair.
pub const MATCH_REWARD: u32 = 10;

/// Pairs on the standard 4x4 board.
pub const DEFAULT_PAIR_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    InProgress,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    cards: Vec<Card>,
    /// Revealed but unresolved card ids, at most two.
    pending_reveal: Vec<usize>,
    pair_count: usize,
    matched_count: u32,
    attempt_count: u32,
    score: u32,
    status: GameStatus,
}

impl Board {
    /// Deal a fresh board of `2 * pair_count` hidden cards.
    ///
    /// `pair_count` symbols are drawn from the catalogue, each placed twice,
    /// and the deck is shuffled before positions are assigned.
    pub fn new_game<R: Rng + ?Sized>(
        pair_count: usize,
        catalogue: &SymbolCatalogue,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if pair_count == 0 {
            return Err(GameError::Configuration(
                "pair count must be at least 1".into(),
            ));
        }
        if pair_count > catalogue.len() {
            return Err(GameError::Configuration(format!(
                "pair count {} exceeds catalogue size {}",
                pair_count,
                catalogue.len()
            )));
        }

        let chosen: Vec<&String> = catalogue
            .symbols()
            .choose_multiple(rng, pair_count)
            .collect();
        let mut deck: Vec<&String> = chosen.iter().flat_map(|s| [*s, *s]).collect();
        deck.shuffle(rng);

        let cards = deck
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol_id: symbol.clone(),
                face: catalogue.face_for(symbol),
                state: CardState::Hidden,
            })
            .collect();

        Ok(Self {
            cards,
            pending_reveal: Vec::with_capacity(2),
            pair_count,
            matched_count: 0,
            attempt_count: 0,
            score: 0,
            status: GameStatus::InProgress,
        })
    }

    /// [`Board::new_game`] shuffled with the thread-local RNG.
    pub fn new_game_random(
        pair_count: usize,
        catalogue: &SymbolCatalogue,
    ) -> Result<Self, GameError> {
        Self::new_game(pair_count, catalogue, &mut rand::thread_rng())
    }

    /// Flip the card at `card_id`.
    ///
    /// No-op when the game is complete, the id is out of range, the card is
    /// already revealed or matched, or two cards are still pending. The
    /// second reveal of a pair is resolved immediately: a match locks both
    /// cards in, a mismatch leaves both revealed until
    /// [`Board::resolve_pending_mismatch`] is called.
    #[must_use]
    pub fn reveal(mut self, card_id: usize) -> Self {
        if self.status == GameStatus::Complete {
            return self;
        }
        match self.cards.get(card_id) {
            Some(card) if card.state == CardState::Hidden => {}
            _ => return self,
        }
        if self.pending_reveal.len() >= 2 {
            return self;
        }

        self.cards[card_id].state = CardState::Revealed;
        self.pending_reveal.push(card_id);

        if self.pending_reveal.len() == 2 {
            self.resolve_pair();
        }
        self
    }

    /// Flip both cards of a resolved mismatch back to hidden.
    ///
    /// No-op unless a mismatched pair is pending. The host decides how long
    /// the pair stays visible before calling this.
    #[must_use]
    pub fn resolve_pending_mismatch(mut self) -> Self {
        if self.pending_reveal.len() != 2 {
            return self;
        }
        for &id in &self.pending_reveal {
            self.cards[id].state = CardState::Hidden;
        }
        self.pending_reveal.clear();
        self
    }

    /// Snapshot a completed board for submission.
    pub fn finish(&self, player_name: &str) -> Result<GameResult, GameError> {
        if !self.is_complete() {
            return Err(GameError::NotComplete);
        }
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(GameError::Validation("Player name cannot be empty".into()));
        }

        Ok(GameResult {
            player_name: player_name.to_string(),
            score: self.score,
            attempt_count: self.attempt_count,
            matched_count: self.matched_count,
        })
    }

    fn resolve_pair(&mut self) {
        let (first, second) = (self.pending_reveal[0], self.pending_reveal[1]);
        self.attempt_count += 1;

        if self.cards[first].symbol_id != self.cards[second].symbol_id {
            return;
        }

        self.cards[first].state = CardState::Matched;
        self.cards[second].state = CardState::Matched;
        self.pending_reveal.clear();
        self.matched_count += 1;
        self.score += MATCH_REWARD;

        if self.matched_count as usize == self.pair_count {
            self.status = GameStatus::Complete;
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, card_id: usize) -> Option<&Card> {
        self.cards.get(card_id)
    }

    pub fn pending(&self) -> &[usize] {
        &self.pending_reveal
    }

    /// True while a mismatched pair is waiting to be flipped back.
    pub fn has_pending_mismatch(&self) -> bool {
        self.pending_reveal.len() == 2
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn matched_count(&self) -> u32 {
        self.matched_count
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == GameStatus::Complete
    }
}
