use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::Query,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::db::{NewResult, ResultStore, StoredResult};
use crate::error::AppError;
use crate::routes::{limit_query, LimitQuery};

const MISSING_FIELDS: &str = "Missing required fields";
const MAX_NAME_LEN: usize = 50;

#[derive(Deserialize)]
pub struct CreateResultRequest {
    pub player_name: Option<String>,
    pub score: Option<i64>,
    pub tries: Option<i64>,
    pub matches: Option<i64>,
}

impl CreateResultRequest {
    fn validate(self) -> Result<NewResult, AppError> {
        let (Some(player_name), Some(score), Some(tries), Some(matches)) =
            (self.player_name, self.score, self.tries, self.matches)
        else {
            return Err(AppError::BadRequest(MISSING_FIELDS.into()));
        };

        let player_name = player_name.trim().to_string();
        if player_name.is_empty() {
            return Err(AppError::BadRequest("Player name cannot be empty".into()));
        }
        if player_name.chars().count() > MAX_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Player name must be at most {MAX_NAME_LEN} characters"
            )));
        }

        Ok(NewResult {
            player_name,
            score: non_negative("score", score)?,
            tries: non_negative("tries", tries)?,
            matches: non_negative("matches", matches)?,
        })
    }
}

fn non_negative(field: &str, value: i64) -> Result<i32, AppError> {
    if value < 0 {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    i32::try_from(value).map_err(|_| AppError::BadRequest(format!("{field} is too large")))
}

/// GET /api/results
/// Most recent results first.
pub async fn list_results(
    Extension(store): Extension<ResultStore>,
    Extension(config): Extension<Config>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<StoredResult>>, AppError> {
    let limit = limit_query(query)?.resolve(config.results_limit);
    let rows = store.list_recent(limit).await?;
    Ok(Json(rows))
}

/// POST /api/results
/// Body: `{player_name, score, tries, matches}`.
pub async fn create_result(
    Extension(store): Extension<ResultStore>,
    payload: Result<Json<CreateResultRequest>, JsonRejection>,
) -> Result<Json<JsonValue>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected result body: {e}");
        AppError::BadRequest(MISSING_FIELDS.into())
    })?;
    let new = req.validate()?;

    let stored = store.insert(&new).await?;

    Ok(Json(serde_json::json!({
        "message": "Result saved",
        "result": stored,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, score: Option<i64>) -> CreateResultRequest {
        CreateResultRequest {
            player_name: name.map(String::from),
            score,
            tries: Some(6),
            matches: Some(8),
        }
    }

    #[test]
    fn test_validate_accepts_complete_body() {
        let new = request(Some("  ana "), Some(80)).validate().unwrap();
        assert_eq!(
            new,
            NewResult {
                player_name: "ana".into(),
                score: 80,
                tries: 6,
                matches: 8,
            }
        );
    }

    #[test]
    fn test_validate_accepts_zero_values() {
        assert!(request(Some("ana"), Some(0)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let err = request(Some("ana"), None).validate().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
        let err = request(None, Some(10)).validate().unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            request(Some("   "), Some(10)).validate(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            request(Some("ana"), Some(-10)).validate(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            request(Some("ana"), Some(i64::MAX)).validate(),
            Err(AppError::BadRequest(_))
        ));
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            request(Some(&long), Some(10)).validate(),
            Err(AppError::BadRequest(_))
        ));
    }
}
