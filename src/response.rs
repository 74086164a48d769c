//! Response helpers. Rows go out as a bare JSON array; errors as `{"error": "..."}`.

use axum::{http::StatusCode, Json};
use serde_json::Value;

pub fn rows_ok(rows: Vec<Value>) -> (StatusCode, Json<Vec<Value>>) {
    (StatusCode::OK, Json(rows))
}

pub fn error_body(message: &str) -> Value {
    serde_json::json!({ "error": message })
}
