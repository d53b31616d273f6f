//! Error types shared by the frontend and the CLI

use thiserror::Error;

/// Why a catalog request did not produce a game list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got a response (DNS, CORS, connection reset, ...)
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    /// Body was not JSON, or an array element was not a game record
    #[error("Failed to parse catalog response: {0}")]
    Decode(String),

    /// Valid JSON that is not an array of games
    #[error("Unexpected catalog response ({kind}){}", detail_suffix(.message))]
    UnexpectedShape {
        kind: &'static str,
        message: Option<String>,
    },
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default()
}

/// Unknown value for one of the filter selects
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} '{value}' (expected one of: {expected})")]
pub struct ParseFilterError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}
