use serde::{Deserialize, Serialize};

/// Lifecycle of the stream connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Open,
    Errored,
}

impl ConnectionState {
    pub fn label(&self) -> &str {
        match self {
            ConnectionState::Disconnected => "Disconnected",
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Open => "Connected",
            ConnectionState::Errored => "Connection error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Events emitted by the chat core.
/// The UI drains these each frame; the message store is read directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// Something the user should see as a toast
    Notification { level: NoticeLevel, message: String },

    /// The stream connection moved to a new state
    ConnectionChanged { state: ConnectionState },
}

impl ChatEvent {
    pub fn error(message: impl Into<String>) -> Self {
        ChatEvent::Notification {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        ChatEvent::Notification {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}
