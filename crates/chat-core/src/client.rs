//! Chat client — composes the store, the event bus, the connection manager
//! and the sender around injected platform ports.
//!
//! Built once by the composition root and torn down with `shutdown()`.

use std::rc::Rc;

use chat_types::{config::ClientConfig, event::ConnectionState, Result};

use crate::connection::ConnectionManager;
use crate::event_bus::EventBus;
use crate::ports::{ChatApiPort, SchedulerPort, TransportPort};
use crate::send::MessageSender;
use crate::store::{ChatSession, ChatStore};

#[derive(Clone)]
pub struct ChatClient {
    store: ChatStore,
    events: EventBus,
    connection: ConnectionManager,
    sender: MessageSender,
}

impl ChatClient {
    pub fn new(
        config: &ClientConfig,
        transport: Rc<dyn TransportPort>,
        api: Rc<dyn ChatApiPort>,
        scheduler: Rc<dyn SchedulerPort>,
    ) -> Self {
        let session = match &config.greeting {
            Some(greeting) => ChatSession::with_greeting(&config.default_model, greeting),
            None => ChatSession::new(&config.default_model),
        };
        let store = ChatStore::new(session);
        let events = EventBus::new();
        let connection =
            ConnectionManager::new(config, transport, scheduler, store.clone(), events.clone());
        let sender = MessageSender::new(api, store.clone(), events.clone());

        Self {
            store,
            events,
            connection,
            sender,
        }
    }

    pub fn store(&self) -> &ChatStore {
        &self.store
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }

    pub fn connect(&self) {
        self.connection.connect();
    }

    pub async fn send_message(&self, content: &str) -> Result<()> {
        self.sender.send_message(content).await
    }

    pub fn set_selected_model(&self, id: &str) {
        log::info!("Selected model: {}", id);
        self.store.set_selected_model(id);
    }

    pub fn shutdown(&self) {
        self.connection.shutdown();
    }
}
