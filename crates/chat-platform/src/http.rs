//! Prompt submission over browser `fetch()` via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;

use chat_core::ports::ChatApiPort;
use chat_types::{ChatError, Result, wire::PromptRequest};

/// Posts prompts to the chat backend. The response body is not read;
/// replies arrive on the stream.
pub struct HttpChatApi {
    url: String,
}

impl HttpChatApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ChatApiPort for HttpChatApi {
    async fn submit_prompt(&self, req: &PromptRequest) -> Result<()> {
        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(req)
            .map_err(|e| ChatError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        // Delivered is all that matters here; the backend reports failures
        // on the stream.
        if !response.ok() {
            log::warn!(
                "Chat request to {} returned HTTP {}",
                self.url,
                response.status()
            );
        }
        Ok(())
    }
}
