use axum::{Extension, Json};
use serde_json::{json, Value as JsonValue};

use crate::db::ResultStore;

/// GET /health
pub async fn health_check(Extension(store): Extension<ResultStore>) -> Json<JsonValue> {
    Json(json!({ "status": "ok", "store": store.kind() }))
}
