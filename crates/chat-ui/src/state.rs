//! UI-level state that drives rendering.
//! Messages are read straight from the chat store; this holds what the
//! store does not: the input field, toasts and the last connection state,
//! updated each frame by draining the EventBus.

use chat_types::event::{ChatEvent, ConnectionState, NoticeLevel};

/// How long a toast stays on screen, in seconds
pub const TOAST_SECONDS: f64 = 4.0;

/// State visible to UI panels
pub struct UiState {
    /// Input field content
    pub input_text: String,
    /// Notifications currently on screen, oldest first
    pub toasts: Vec<Toast>,
    /// Last reported stream connection state
    pub connection: ConnectionState,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: NoticeLevel,
    pub text: String,
    /// egui time (seconds) after which the toast disappears
    pub expires_at: f64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            toasts: Vec::new(),
            connection: ConnectionState::Disconnected,
        }
    }

    /// Process events from the EventBus. `now` is the egui clock in seconds.
    pub fn process_events(&mut self, events: Vec<ChatEvent>, now: f64) {
        for event in events {
            match event {
                ChatEvent::Notification { level, message } => {
                    self.toasts.push(Toast {
                        level,
                        text: message,
                        expires_at: now + TOAST_SECONDS,
                    });
                }
                ChatEvent::ConnectionChanged { state } => {
                    self.connection = state;
                }
            }
        }
    }

    /// Drop expired toasts. Returns true if any remain.
    pub fn prune_toasts(&mut self, now: f64) -> bool {
        self.toasts.retain(|t| t.expires_at > now);
        !self.toasts.is_empty()
    }

    /// Take the input for sending. Blank input is left in place and not
    /// sent; anything else is sent exactly as typed.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.input_text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.input_text))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
