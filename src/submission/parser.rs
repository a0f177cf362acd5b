use serde_json::{Map, Value};

/// Parse a contact request body.
///
/// Only bodies declared as `application/json` are read. A missing or other
/// content type, or an empty body, yields an empty object so that field
/// validation reports what is missing.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected contact body: {e}");
        "Invalid JSON body".to_string()
    })
}
