//! Port traits — the boundary between the chat core and the browser.
//!
//! Defined here in `chat-core` (pure Rust); implemented in `chat-platform`.
//! The core only ever talks to these traits, which is also what lets the
//! connection manager be driven by hand in tests.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chat_types::{Result, wire::PromptRequest};

// ─── Stream Transport Port ───────────────────────────────────

/// Lifecycle and data events reported by a transport connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Opened,
    /// One text payload, in arrival order
    Frame(String),
    Error(String),
    /// Terminal. Fired after a normal close and after an error.
    Closed,
}

/// Callback the transport invokes for every event of one connection.
#[derive(Clone)]
pub struct TransportSink {
    deliver: Rc<dyn Fn(TransportEvent)>,
}

impl TransportSink {
    pub fn new(deliver: impl Fn(TransportEvent) + 'static) -> Self {
        Self {
            deliver: Rc::new(deliver),
        }
    }

    pub fn send(&self, event: TransportEvent) {
        (self.deliver)(event)
    }
}

/// A live transport connection
pub trait TransportHandle {
    /// Ask the connection to close. No events need follow.
    fn close(&self);
}

pub trait TransportPort {
    /// Start opening a connection to `url`. Events arrive through `sink`,
    /// never synchronously from inside this call.
    fn open(&self, url: &str, sink: TransportSink) -> Result<Box<dyn TransportHandle>>;
}

// ─── Request Channel Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatApiPort {
    /// Deliver a prompt to the backend. Only delivery failure is an error;
    /// the reply arrives on the stream.
    async fn submit_prompt(&self, req: &PromptRequest) -> Result<()>;
}

// ─── Scheduler Port ──────────────────────────────────────────

/// Handle to a delayed task. Cancelling stops a task that has not run yet.
#[derive(Debug, Clone, Default)]
pub struct ScheduledTask {
    cancelled: Rc<Cell<bool>>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

pub trait SchedulerPort {
    /// Run `task` once after `delay` unless the returned handle is cancelled.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask;
}
