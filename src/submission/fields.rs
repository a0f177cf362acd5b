use serde_json::Value;

use crate::error::REQUIRED_FIELDS_MESSAGE;
use crate::models::NewSubmission;

/// Extract the three contact fields. Anything else in the payload
/// (including a client `createdAt`) is ignored.
pub fn validate(raw: &Value) -> Result<NewSubmission, String> {
    let field = |key: &str| raw.get(key).and_then(field_text);

    match (field("name"), field("email"), field("message")) {
        (Some(name), Some(email), Some(message)) => Ok(NewSubmission {
            name,
            email,
            message,
        }),
        _ => Err(REQUIRED_FIELDS_MESSAGE.to_string()),
    }
}

/// Text stored for one field value. Empty strings, zero, `false`, `null`
/// and nested objects or arrays count as missing.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
