use sqlx::PgPool;

use crate::db::store::{NewResult, StoredResult};
use crate::error::AppError;

const RESULT_COLUMNS: &str = "id, player_name, score, tries, matches, created_at";

pub async fn insert_result(pool: &PgPool, new: &NewResult) -> Result<StoredResult, AppError> {
    let query = format!(
        r#"INSERT INTO game_results (player_name, score, tries, matches)
           VALUES ($1, $2, $3, $4)
           RETURNING {RESULT_COLUMNS}"#
    );
    let row = sqlx::query_as::<_, StoredResult>(&query)
        .bind(&new.player_name)
        .bind(new.score)
        .bind(new.tries)
        .bind(new.matches)
        .fetch_one(pool)
        .await
        .map_err(AppError::Sqlx)?;

    Ok(row)
}

/// Most recent first.
pub async fn get_recent_results(pool: &PgPool, limit: i64) -> Result<Vec<StoredResult>, AppError> {
    let query = format!(
        "SELECT {RESULT_COLUMNS} FROM game_results ORDER BY created_at DESC, id DESC LIMIT $1"
    );
    let rows = sqlx::query_as::<_, StoredResult>(&query)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(AppError::Sqlx)?;

    Ok(rows)
}

/// Highest score first; fewer tries wins a tie, then the earlier entry.
pub async fn get_leaderboard(pool: &PgPool, limit: i64) -> Result<Vec<StoredResult>, AppError> {
    let query = format!(
        "SELECT {RESULT_COLUMNS} FROM game_results ORDER BY score DESC, tries ASC, id ASC LIMIT $1"
    );
    let rows = sqlx::query_as::<_, StoredResult>(&query)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(AppError::Sqlx)?;

    Ok(rows)
}
