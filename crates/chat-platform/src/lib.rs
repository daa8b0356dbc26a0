//! Browser adapters for the chat core ports.

pub mod websocket;
pub mod http;
pub mod scheduler;

pub use websocket::WebSocketTransport;
pub use http::HttpChatApi;
pub use scheduler::TimeoutScheduler;
