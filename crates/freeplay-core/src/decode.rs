//! Response body decoding
//!
//! The catalog answers with a JSON array of games. Anything else that still
//! parses as JSON (an error object, `null`, a bare string) is reported as
//! [`FetchError::UnexpectedShape`] rather than being shown as an empty result.

use serde_json::Value;

use crate::error::FetchError;
use crate::game::Game;

/// Decode a parsed JSON body into the game list
pub fn decode_games(body: Value) -> Result<Vec<Game>, FetchError> {
    match body {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .map_err(|e| FetchError::Decode(format!("game #{}: {}", index, e)))
            })
            .collect(),
        other => {
            let kind = value_kind(&other);
            let message = other
                .get("status_message")
                .or_else(|| other.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string);
            tracing::warn!(kind, ?message, "catalog response is not an array");
            Err(FetchError::UnexpectedShape { kind, message })
        }
    }
}

/// Decode a raw body. Used by clients that receive text rather than JSON values.
pub fn decode_games_text(body: &str) -> Result<Vec<Game>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    decode_games(value)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
