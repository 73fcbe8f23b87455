use axum::{extract::rejection::QueryRejection, extract::Query, Extension, Json};

use crate::config::Config;
use crate::db::{ResultStore, StoredResult};
use crate::error::AppError;
use crate::routes::{limit_query, LimitQuery};

/// GET /api/leaderboard
/// Top results by score, fewer tries first among equal scores.
pub async fn get_leaderboard(
    Extension(store): Extension<ResultStore>,
    Extension(config): Extension<Config>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<StoredResult>>, AppError> {
    let top_n = limit_query(query)?.resolve(config.leaderboard_size);
    let rows = store.leaderboard(top_n).await?;
    Ok(Json(rows))
}
