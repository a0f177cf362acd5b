use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const GENERIC_SERVER_ERROR: &str = "Server error, try again later.";

#[derive(Debug)]
pub enum ContactError {
    /// The caller sent an unusable payload. Nothing was stored or sent.
    Validation(String),
    /// The store rejected or could not complete the insert. No email was sent.
    Persistence(sqlx::Error),
    /// The record is stored but the relay did not accept the notification.
    Notification(String),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::Validation(msg) => write!(f, "Validation Error: {msg}"),
            ContactError::Persistence(err) => write!(f, "Persistence Error: {err}"),
            ContactError::Notification(msg) => write!(f, "Notification Error: {msg}"),
        }
    }
}

impl std::error::Error for ContactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContactError::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ContactError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ContactError::Persistence(err) => {
                tracing::error!("Contact submission not stored: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_SERVER_ERROR.to_string(),
                )
            }
            ContactError::Notification(msg) => {
                // Reported as a plain 500 even though the row is already saved.
                tracing::error!("Contact submission stored but notification failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_SERVER_ERROR.to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ContactError {
    fn from(err: sqlx::Error) -> Self {
        ContactError::Persistence(err)
    }
}
