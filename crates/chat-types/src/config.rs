use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MODEL;

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Stream endpoint the connection manager keeps open
    pub stream_url: String,
    /// Prompt submission endpoint
    pub api_url: String,
    /// Fixed delay between a close and the next connect attempt
    pub reconnect_delay_ms: u64,
    /// Model selected at startup
    pub default_model: String,
    /// Assistant message shown before the first turn, if any
    pub greeting: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stream_url: DEFAULT_STREAM_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            reconnect_delay_ms: DEFAULT_RECONNECT_DELAY_MS,
            default_model: DEFAULT_MODEL.to_string(),
            greeting: Some(DEFAULT_GREETING.to_string()),
        }
    }
}

pub const DEFAULT_STREAM_URL: &str = "ws://localhost:3000";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/chat";
pub const DEFAULT_RECONNECT_DELAY_MS: u64 = 5_000;

const DEFAULT_GREETING: &str = "Hello! I am Sunyata AI, your companion for insightful conversations. How can I assist you today?";
