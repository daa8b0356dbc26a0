//! Wire formats shared with the chat backend.
//!
//! Inbound: JSON text frames on the stream socket, `{error?, response?, end?}`.
//! Outbound: the `POST /api/chat` body, `{prompt, model}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;

/// One validated frame from the response stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamFrame {
    /// Backend-reported failure; rendered as its own assistant message
    Error(String),
    /// A piece of assistant text. `complete` marks the end of the turn.
    Fragment { text: String, complete: bool },
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    end: Option<bool>,
}

impl StreamFrame {
    /// Parse a raw text payload.
    ///
    /// `error` wins over `response` when both are present. An empty `error`
    /// string is treated as absent. A frame carrying only `end` is a
    /// completion signal with no text.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ParseError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ParseError::Malformed("expected a JSON object".to_string()));
        }

        let frame: RawFrame =
            serde_json::from_value(value).map_err(|e| ParseError::Malformed(e.to_string()))?;

        match frame {
            RawFrame { error: Some(text), .. } if !text.is_empty() => Ok(StreamFrame::Error(text)),
            RawFrame { response: None, end: None, .. } => Err(ParseError::Unrecognized),
            RawFrame { response, end, .. } => Ok(StreamFrame::Fragment {
                text: response.unwrap_or_default(),
                complete: end.unwrap_or(false),
            }),
        }
    }
}

/// Body of the prompt submission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    pub model: String,
}
