pub mod health;
pub mod leaderboard;
pub mod results;

use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;

use crate::error::AppError;

/// Upper bound for any `?limit=` override.
pub const MAX_LIMIT: i64 = 100;

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

impl LimitQuery {
    /// Requested limit clamped to `1..=MAX_LIMIT`, or `default`.
    pub fn resolve(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).clamp(1, MAX_LIMIT)
    }
}

/// Unwrap a `?limit=` extraction, turning a malformed value into a JSON 400.
pub fn limit_query(
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<LimitQuery, AppError> {
    let Query(q) = query.map_err(|e| {
        tracing::debug!("Rejected query string: {e}");
        AppError::BadRequest("limit must be a whole number".into())
    })?;
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_resolve() {
        assert_eq!(LimitQuery { limit: None }.resolve(50), 50);
        assert_eq!(LimitQuery { limit: Some(5) }.resolve(50), 5);
        assert_eq!(LimitQuery { limit: Some(0) }.resolve(50), 1);
        assert_eq!(LimitQuery { limit: Some(1_000) }.resolve(50), MAX_LIMIT);
    }
}
