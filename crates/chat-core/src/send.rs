//! Send path — records the user's turn and submits the prompt.
//!
//! The user message is added before any I/O so it shows up immediately.
//! The assistant reply never comes back on this channel; it streams in
//! through the connection manager.

use std::rc::Rc;

use chat_types::{message::Role, wire::PromptRequest, Result};

use crate::event_bus::EventBus;
use crate::ports::ChatApiPort;
use crate::store::ChatStore;

pub const SEND_FAILED_NOTICE: &str = "Failed to send message";
pub const SEND_FAILED_PLACEHOLDER: &str = "Error sending message";

#[derive(Clone)]
pub struct MessageSender {
    api: Rc<dyn ChatApiPort>,
    store: ChatStore,
    events: EventBus,
}

impl MessageSender {
    pub fn new(api: Rc<dyn ChatApiPort>, store: ChatStore, events: EventBus) -> Self {
        Self { api, store, events }
    }

    /// Send one user turn.
    ///
    /// On delivery failure the user is notified and the trailing assistant
    /// slot, if there is one, is replaced with a placeholder. The error is
    /// still returned so the caller can log it.
    pub async fn send_message(&self, content: &str) -> Result<()> {
        self.store.add_message(Role::User, content);

        let req = PromptRequest {
            prompt: content.to_string(),
            model: self.store.selected_model(),
        };

        if let Err(e) = self.api.submit_prompt(&req).await {
            log::error!("Request error: {}", e);
            self.events.error(SEND_FAILED_NOTICE);
            self.store.replace_last(SEND_FAILED_PLACEHOLDER);
            return Err(e);
        }
        Ok(())
    }
}
