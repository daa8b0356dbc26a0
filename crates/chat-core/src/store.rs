//! Message store — ordered chat history plus the single open assistant turn.
//!
//! `ChatSession` is the plain state with its transition functions.
//! `ChatStore` is the shared handle the connection manager, the sender and
//! the UI hold. The app is single-threaded, so the handle is `Rc<RefCell<_>>`
//! and every mutation runs inside one borrow.

use std::cell::RefCell;
use std::rc::Rc;

use chat_types::message::{Message, MessageId, Role};

/// Chat history and model selection
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    selected_model: String,
    /// Index of the streaming assistant message, always the last one
    open_turn: Option<usize>,
    revision: u64,
}

impl ChatSession {
    pub fn new(selected_model: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            selected_model: selected_model.into(),
            open_turn: None,
            revision: 0,
        }
    }

    /// Session seeded with a finished assistant greeting.
    pub fn with_greeting(selected_model: impl Into<String>, greeting: impl Into<String>) -> Self {
        let mut session = Self::new(selected_model);
        session.messages.push(Message::assistant(greeting, None));
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    /// The streaming assistant message, if a turn is open.
    pub fn open_turn(&self) -> Option<&Message> {
        self.open_turn.map(|idx| &self.messages[idx])
    }

    pub fn is_typing(&self) -> bool {
        self.open_turn.is_some()
    }

    /// Bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new message. An assistant message opens a new turn tagged
    /// with the selected model; any turn still open is sealed first.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) -> MessageId {
        self.seal_open_turn();
        let message = match role {
            Role::User => Message::user(content),
            Role::Assistant => {
                Message::assistant_streaming(content, Some(self.selected_model.clone()))
            }
        };
        let id = message.id.clone();
        self.messages.push(message);
        if role == Role::Assistant {
            self.open_turn = Some(self.messages.len() - 1);
        }
        self.touch();
        id
    }

    /// Append a finished assistant message without touching the content of
    /// an open turn. Used for backend-reported errors.
    pub fn add_notice(&mut self, content: impl Into<String>) -> MessageId {
        self.seal_open_turn();
        let message = Message::assistant(content, Some(self.selected_model.clone()));
        let id = message.id.clone();
        self.messages.push(message);
        self.touch();
        id
    }

    /// Append a fragment to the open turn, or start a new assistant message
    /// when no turn is open. An empty completing fragment with no open turn
    /// is a bare end-of-turn signal and creates nothing.
    pub fn append_to_last(&mut self, fragment: &str, complete: bool) {
        match self.open_turn {
            Some(idx) => {
                let message = &mut self.messages[idx];
                message.content.push_str(fragment);
                if complete {
                    message.streaming = false;
                    self.open_turn = None;
                }
            }
            None if fragment.is_empty() && complete => {}
            None => {
                let mut message =
                    Message::assistant_streaming(fragment, Some(self.selected_model.clone()));
                message.streaming = !complete;
                self.messages.push(message);
                if !complete {
                    self.open_turn = Some(self.messages.len() - 1);
                }
            }
        }
        self.touch();
    }

    /// Overwrite the last message if it is an assistant message and seal it.
    pub fn replace_last(&mut self, content: impl Into<String>) {
        let Some(last) = self.messages.last_mut() else {
            return;
        };
        if !last.is_assistant() {
            return;
        }
        last.content = content.into();
        last.streaming = false;
        self.open_turn = None;
        self.touch();
    }

    /// Affects only messages created afterwards.
    pub fn set_selected_model(&mut self, id: impl Into<String>) {
        self.selected_model = id.into();
        self.touch();
    }

    fn seal_open_turn(&mut self) {
        if let Some(idx) = self.open_turn.take() {
            self.messages[idx].streaming = false;
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Shared store handle — clone-cheap via Rc.
#[derive(Clone)]
pub struct ChatStore {
    inner: Rc<RefCell<ChatSession>>,
}

impl ChatStore {
    pub fn new(session: ChatSession) -> Self {
        Self {
            inner: Rc::new(RefCell::new(session)),
        }
    }

    /// Read the session. The closure must not call back into the store.
    pub fn read<R>(&self, f: impl FnOnce(&ChatSession) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.inner.borrow().messages.clone()
    }

    pub fn selected_model(&self) -> String {
        self.inner.borrow().selected_model.clone()
    }

    pub fn is_typing(&self) -> bool {
        self.inner.borrow().is_typing()
    }

    pub fn revision(&self) -> u64 {
        self.inner.borrow().revision
    }

    pub fn add_message(&self, role: Role, content: impl Into<String>) -> MessageId {
        self.inner.borrow_mut().add_message(role, content)
    }

    pub fn add_notice(&self, content: impl Into<String>) -> MessageId {
        self.inner.borrow_mut().add_notice(content)
    }

    pub fn append_to_last(&self, fragment: &str, complete: bool) {
        self.inner.borrow_mut().append_to_last(fragment, complete)
    }

    pub fn replace_last(&self, content: impl Into<String>) {
        self.inner.borrow_mut().replace_last(content)
    }

    pub fn set_selected_model(&self, id: impl Into<String>) {
        self.inner.borrow_mut().set_selected_model(id)
    }
}
