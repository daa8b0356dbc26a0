use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid stream frame: {0}")]
    Parse(#[from] ParseError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

/// Why an inbound stream frame could not be turned into a `StreamFrame`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not JSON, not an object, or a recognised field has the wrong type
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// A JSON object carrying none of `error`, `response` or `end`
    #[error("payload has no recognised fields")]
    Unrecognized,
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
