//! Plain-text rendering of boards and result tables.

use memory_core::{Board, CardState};

use crate::client::StoredResult;

const CELL_WIDTH: usize = 7;

/// Columns for a board of `card_count` cards: the smallest square that fits.
pub fn columns(card_count: usize) -> usize {
    let mut cols = 1;
    while cols * cols < card_count {
        cols += 1;
    }
    cols
}

/// Hidden cards show their index, revealed cards their symbol, matched
/// cards their symbol in brackets.
pub fn render_board(board: &Board) -> String {
    let cols = columns(board.cards().len());
    let mut out = String::new();

    for row in board.cards().chunks(cols) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| {
                let label = match card.state {
                    CardState::Hidden => card.id.to_string(),
                    CardState::Revealed => card.symbol_id.clone(),
                    CardState::Matched => format!("[{}]", card.symbol_id),
                };
                format!("{label:^CELL_WIDTH$}")
            })
            .collect();
        out.push_str(cells.join("|").trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "Score: {}  Tries: {}  Pairs: {}/{}",
        board.score(),
        board.attempt_count(),
        board.matched_count(),
        board.pair_count()
    ));
    out
}

/// Parse a card index typed by the player.
pub fn parse_pick(input: &str, card_count: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&id| id < card_count)
}

pub fn render_results(title: &str, rows: &[StoredResult]) -> String {
    let mut out = format!("{title}\n");
    if rows.is_empty() {
        out.push_str("  (no results yet)\n");
        return out;
    }
    out.push_str(&format!(
        "{:>4}  {:<20} {:>6} {:>6} {:>8}\n",
        "#", "Player", "Score", "Tries", "Matches"
    ));
    for (rank, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<20} {:>6} {:>6} {:>8}\n",
            rank + 1,
            row.player_name,
            row.score,
            row.tries,
            row.matches
        ));
    }
    out
}
