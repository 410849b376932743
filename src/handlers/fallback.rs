//! Fallback for paths the route table does not know.

use crate::response::error_body;
use axum::{http::StatusCode, http::Uri, Json};

pub async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    tracing::debug!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Json(error_body("not_found", format!("no page at {}", uri.path()), None)),
    )
}
