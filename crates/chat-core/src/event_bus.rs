//! Event bus between the chat core and the UI.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! The connection manager and the sender emit notifications here; the UI
//! drains them on each frame and turns them into toasts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::event::ChatEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<ChatEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: ChatEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Queue an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.emit(ChatEvent::error(message));
    }

    /// Queue a warning toast.
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(ChatEvent::warning(message));
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<ChatEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
