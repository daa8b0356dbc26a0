use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Speaker of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// Opaque message identifier. Freshly generated, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Model that produced an assistant message; never set on user messages
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    /// True while fragments are still being appended
    #[serde(default)]
    pub streaming: bool,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: text.into(),
            timestamp: Utc::now(),
            model: None,
            streaming: false,
        }
    }

    /// An assistant message that is still receiving fragments.
    pub fn assistant_streaming(text: impl Into<String>, model: Option<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: text.into(),
            timestamp: Utc::now(),
            model,
            streaming: true,
        }
    }

    /// A finished assistant message (greetings, error notices).
    pub fn assistant(text: impl Into<String>, model: Option<String>) -> Self {
        Self {
            streaming: false,
            ..Self::assistant_streaming(text, model)
        }
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}
