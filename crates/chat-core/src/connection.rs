//! Connection manager — owns the stream transport and reconciles frames
//! into the message store.
//!
//! State machine:
//! `Disconnected → Connecting → Open → (Errored) → Disconnected → …`
//!
//! Every close schedules exactly one reconnect after a fixed delay. Retries
//! are unbounded and never back off. Each `connect()` starts a new
//! generation; events from an older generation are dropped, so at most one
//! transport is ever live.
//!
//! Inbound frames go through a FIFO queue and a single drain loop. The loop
//! never suspends, and a frame delivered while it runs is picked up by the
//! same loop instead of starting a second one.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Duration;

use chat_types::{
    config::ClientConfig,
    event::{ChatEvent, ConnectionState},
    wire::StreamFrame,
};

use crate::event_bus::EventBus;
use crate::ports::*;
use crate::store::ChatStore;

pub const CONNECTION_ERROR_NOTICE: &str = "Connection error occurred";

/// Shared connection manager — clone-cheap via Rc.
#[derive(Clone)]
pub struct ConnectionManager {
    inner: Rc<Inner>,
}

struct Inner {
    url: String,
    reconnect_delay: Duration,
    transport: Rc<dyn TransportPort>,
    scheduler: Rc<dyn SchedulerPort>,
    store: ChatStore,
    events: EventBus,
    state: Cell<ConnectionState>,
    generation: Cell<u64>,
    handle: RefCell<Option<Box<dyn TransportHandle>>>,
    reconnect: RefCell<Option<ScheduledTask>>,
    queue: RefCell<VecDeque<String>>,
    draining: Cell<bool>,
    shut_down: Cell<bool>,
}

impl ConnectionManager {
    pub fn new(
        config: &ClientConfig,
        transport: Rc<dyn TransportPort>,
        scheduler: Rc<dyn SchedulerPort>,
        store: ChatStore,
        events: EventBus,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                url: config.stream_url.clone(),
                reconnect_delay: Duration::from_millis(config.reconnect_delay_ms),
                transport,
                scheduler,
                store,
                events,
                state: Cell::new(ConnectionState::Disconnected),
                generation: Cell::new(0),
                handle: RefCell::new(None),
                reconnect: RefCell::new(None),
                queue: RefCell::new(VecDeque::new()),
                draining: Cell::new(false),
                shut_down: Cell::new(false),
            }),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.state.get()
    }

    pub fn has_transport(&self) -> bool {
        self.inner.handle.borrow().is_some()
    }

    pub fn reconnect_pending(&self) -> bool {
        self.inner.reconnect.borrow().is_some()
    }

    /// Frames received but not yet applied to the store.
    pub fn pending_frames(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    /// Open the stream unless it is already open or opening.
    /// Safe to call from any number of independent triggers.
    pub fn connect(&self) {
        let inner = &self.inner;
        if inner.shut_down.get() {
            log::debug!("connect() after shutdown ignored");
            return;
        }
        if matches!(
            inner.state.get(),
            ConnectionState::Open | ConnectionState::Connecting
        ) {
            log::debug!("Stream already connected or connecting");
            return;
        }

        inner.cancel_reconnect();
        let generation = inner.generation.get() + 1;
        inner.generation.set(generation);
        inner.set_state(ConnectionState::Connecting);

        let weak = Rc::downgrade(&self.inner);
        let sink = TransportSink::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                ConnectionManager { inner }.handle_event(generation, event);
            }
        });

        log::info!("Connecting to {} (attempt #{})", inner.url, generation);
        match inner.transport.open(&inner.url, sink) {
            Ok(handle) => {
                *inner.handle.borrow_mut() = Some(handle);
            }
            Err(e) => {
                self.on_error(&e.to_string());
                self.on_closed();
            }
        }
    }

    /// Close the transport, cancel any pending reconnect and stop accepting
    /// events. Later `connect()` calls are ignored.
    pub fn shutdown(&self) {
        let inner = &self.inner;
        inner.shut_down.set(true);
        inner.cancel_reconnect();
        inner.generation.set(inner.generation.get() + 1);
        let handle = inner.handle.borrow_mut().take();
        if let Some(handle) = handle {
            handle.close();
        }
        inner.queue.borrow_mut().clear();
        inner.set_state(ConnectionState::Disconnected);
        log::info!("Connection manager shut down");
    }

    fn handle_event(&self, generation: u64, event: TransportEvent) {
        if self.inner.shut_down.get() || generation != self.inner.generation.get() {
            log::debug!("Dropping event from stale connection #{}: {:?}", generation, event);
            return;
        }
        match event {
            TransportEvent::Opened => self.on_open(),
            TransportEvent::Frame(raw) => self.on_frame(raw),
            TransportEvent::Error(message) => self.on_error(&message),
            TransportEvent::Closed => self.on_closed(),
        }
    }

    fn on_open(&self) {
        log::info!("Connected to {}", self.inner.url);
        self.inner.set_state(ConnectionState::Open);
        self.drain();
    }

    fn on_frame(&self, raw: String) {
        self.inner.queue.borrow_mut().push_back(raw);
        self.drain();
    }

    fn on_error(&self, message: &str) {
        log::error!("Stream transport error: {}", message);
        self.inner.set_state(ConnectionState::Errored);
        self.inner.events.error(CONNECTION_ERROR_NOTICE);
        // Discarded, not closed: the transport still reports its own close.
        let _ = self.inner.handle.borrow_mut().take();
    }

    fn on_closed(&self) {
        log::info!("Stream connection closed");
        let _ = self.inner.handle.borrow_mut().take();
        self.inner.set_state(ConnectionState::Disconnected);
        self.schedule_reconnect();
    }

    fn schedule_reconnect(&self) {
        let inner = &self.inner;
        if inner.shut_down.get() || inner.reconnect.borrow().is_some() {
            return;
        }
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let task = inner.scheduler.schedule(
            inner.reconnect_delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let _ = inner.reconnect.borrow_mut().take();
                    ConnectionManager { inner }.connect();
                }
            }),
        );
        log::info!("Reconnecting in {}ms", inner.reconnect_delay.as_millis());
        *inner.reconnect.borrow_mut() = Some(task);
    }

    /// Apply queued frames oldest-first until the queue is empty.
    /// Returns immediately if a drain loop is already running.
    fn drain(&self) {
        let inner = &self.inner;
        if inner.draining.replace(true) {
            return;
        }
        loop {
            let next = inner.queue.borrow_mut().pop_front();
            let Some(raw) = next else { break };
            match StreamFrame::parse(&raw) {
                Ok(frame) => self.apply_frame(frame),
                Err(e) => {
                    log::warn!("Dropping invalid stream frame ({}): {}", e, raw);
                    inner
                        .events
                        .warning(format!("Ignored invalid server message: {}", e));
                }
            }
        }
        inner.draining.set(false);
    }

    /// Reconcile one frame into the store.
    pub fn apply_frame(&self, frame: StreamFrame) {
        let inner = &self.inner;
        match frame {
            StreamFrame::Error(text) => {
                log::warn!("Backend reported error: {}", text);
                inner.events.error(text.clone());
                inner.store.add_notice(text);
            }
            StreamFrame::Fragment { text, complete } => {
                inner.store.append_to_last(&text, complete);
            }
        }
    }
}

impl Inner {
    fn set_state(&self, state: ConnectionState) {
        if self.state.replace(state) != state {
            self.events.emit(ChatEvent::ConnectionChanged { state });
        }
    }

    fn cancel_reconnect(&self) {
        if let Some(task) = self.reconnect.borrow_mut().take() {
            task.cancel();
        }
    }
}
