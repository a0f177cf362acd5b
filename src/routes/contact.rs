use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use bytes::Bytes;
use serde_json::{json, Value};

use crate::error::ContactError;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

pub async fn index() -> &'static str {
    "ping your portfolio API is running"
}

pub async fn status() -> Json<Value> {
    Json(json!({ "message": "Contact API is working" }))
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ContactError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let raw = parser::parse_body(content_type, &body).map_err(ContactError::Validation)?;

    pipeline::run(&state, raw).await?;

    Ok(Json(json!({ "message": "Message sent successfully!" })))
}
