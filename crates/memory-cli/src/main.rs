//! Play the memory game in a terminal.
//!
//! Usage: memory-cli [play | leaderboard | recent]

use std::io::Write;

use anyhow::Context;
use memory_cli::client::ResultsClient;
use memory_cli::config::CliConfig;
use memory_cli::render;
use memory_core::{Board, GameError, GameResult, SymbolCatalogue};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = CliConfig::from_env();
    let client = ResultsClient::new(&config.server_url)?;

    match std::env::args().nth(1).as_deref() {
        None | Some("play") => play(&config, &client).await,
        Some("leaderboard") => {
            let rows = client.leaderboard(None).await?;
            print!("{}", render::render_results("Leaderboard", &rows));
            Ok(())
        }
        Some("recent") => {
            let rows = client.recent(None).await?;
            print!("{}", render::render_results("Recent games", &rows));
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown command '{other}' (expected play, leaderboard or recent)"),
    }
}

fn prompt(text: &str) -> anyhow::Result<()> {
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(())
}

async fn play(config: &CliConfig, client: &ResultsClient) -> anyhow::Result<()> {
    let catalogue = SymbolCatalogue::default();
    let mut board = Board::new_game_random(config.pair_count, &catalogue)
        .context("Could not start a game")?;
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let last = board.cards().len() - 1;

    while !board.is_complete() {
        println!("\n{}", render::render_board(&board));
        prompt(&format!("Pick a card (0-{last}) or q to quit: "))?;

        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        if line.trim().eq_ignore_ascii_case("q") {
            println!("Bye.");
            return Ok(());
        }
        let Some(card_id) = render::parse_pick(&line, board.cards().len()) else {
            println!("Not a card: {}", line.trim());
            continue;
        };

        board = board.reveal(card_id);
        if board.has_pending_mismatch() {
            println!("\n{}", render::render_board(&board));
            println!("No match.");
            tokio::time::sleep(config.flip_back_delay).await;
            board = board.resolve_pending_mismatch();
        }
    }

    println!("\n{}", render::render_board(&board));
    println!(
        "All pairs found! Score {} in {} tries.",
        board.score(),
        board.attempt_count()
    );

    let Some(result) = ask_result(&board, &mut input).await? else {
        return Ok(());
    };
    submit_with_retry(client, &result, &mut input).await
}

async fn ask_result(board: &Board, input: &mut Input) -> anyhow::Result<Option<GameResult>> {
    loop {
        prompt("Your name: ")?;
        let Some(line) = input.next_line().await? else {
            return Ok(None);
        };
        match board.finish(&line) {
            Ok(result) => return Ok(Some(result)),
            Err(GameError::Validation(msg)) => println!("{msg}"),
            Err(e) => return Err(e.into()),
        }
    }
}

async fn submit_with_retry(
    client: &ResultsClient,
    result: &GameResult,
    input: &mut Input,
) -> anyhow::Result<()> {
    loop {
        match client.submit(result).await {
            Ok(stored) => {
                println!("Saved as result #{}.", stored.id);
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Failed to submit result: {e}");
                println!("Could not save your result: {e}");
            }
        }

        prompt("Retry? [y/N]: ")?;
        match input.next_line().await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
            _ => return Ok(()),
        }
    }
}
