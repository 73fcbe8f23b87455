//! End-to-end: play a board to completion with the engine and submit the
//! result through the CLI's HTTP client.

mod common;

use memory_cli::client::ResultsClient;
use memory_cli::error::ClientError;
use memory_core::{Board, GameResult, SymbolCatalogue, MATCH_REWARD};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Solve the board, making one deliberate mismatch first.
fn play_to_completion(pairs: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new_game(pairs, &SymbolCatalogue::default(), &mut rng).unwrap();

    let first = board.cards()[0].clone();
    if let Some(other) = board.cards().iter().find(|c| c.symbol_id != first.symbol_id) {
        let other = other.id;
        board = board.reveal(first.id).reveal(other);
        assert!(board.has_pending_mismatch());
        board = board.resolve_pending_mismatch();
    }

    for id in 0..board.cards().len() {
        let symbol = board.cards()[id].symbol_id.clone();
        let partner = board
            .cards()
            .iter()
            .find(|c| c.id != id && c.symbol_id == symbol)
            .map(|c| c.id)
            .unwrap();
        board = board.reveal(id).reveal(partner);
    }
    board
}

#[tokio::test]
async fn finished_game_lands_on_leaderboard() {
    let base = common::spawn_server().await;
    let client = ResultsClient::new(&base).unwrap();

    let board = play_to_completion(8, 42);
    assert!(board.is_complete());
    assert_eq!(board.score(), 8 * MATCH_REWARD);
    assert_eq!(board.attempt_count(), 9);

    let result = board.finish("ana").unwrap();
    let stored = client.submit(&result).await.unwrap();
    assert_eq!(stored.player_name, "ana");
    assert_eq!(stored.score, 80);
    assert_eq!(stored.tries, 9);
    assert_eq!(stored.matches, 8);

    let recent = client.recent(Some(1)).await.unwrap();
    assert_eq!(recent, vec![stored.clone()]);

    let short = play_to_completion(2, 7).finish("bo").unwrap();
    client.submit(&short).await.unwrap();

    let leaderboard = client.leaderboard(None).await.unwrap();
    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0], stored);
    assert_eq!(leaderboard[1].player_name, "bo");
}

#[tokio::test]
async fn rejected_submission_is_an_error() {
    let base = common::spawn_server().await;
    let client = ResultsClient::new(&base).unwrap();

    let blank = GameResult {
        player_name: String::new(),
        score: 10,
        attempt_count: 1,
        matched_count: 1,
    };
    match client.submit(&blank).await {
        Err(ClientError::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Player name cannot be empty");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let wrong_base = ResultsClient::new(&format!("{base}/missing")).unwrap();
    let result = play_to_completion(1, 1).finish("ana").unwrap();
    assert!(matches!(
        wrong_base.submit(&result).await,
        Err(ClientError::Rejected { status: 404, .. })
    ));

    assert!(client.recent(None).await.unwrap().is_empty());
}
