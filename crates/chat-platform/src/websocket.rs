//! Stream transport over the browser `WebSocket` API.
//!
//! Each `open()` creates one socket and wires its four callbacks to the
//! connection manager's sink. The callbacks stay alive until the socket's
//! close event has been delivered, even if the manager already discarded
//! the handle after an error, because the close is what drives reconnects.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::prelude::*;
use web_sys::{BinaryType, CloseEvent, Event, MessageEvent, WebSocket};

use chat_core::ports::{TransportEvent, TransportHandle, TransportPort, TransportSink};
use chat_types::{ChatError, Result};

/// Opens `WebSocket` connections for the connection manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebSocketTransport;

impl WebSocketTransport {
    pub fn new() -> Self {
        Self
    }
}

struct SocketCallbacks {
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

type CallbackSlot = Rc<RefCell<Option<SocketCallbacks>>>;

impl TransportPort for WebSocketTransport {
    fn open(&self, url: &str, sink: TransportSink) -> Result<Box<dyn TransportHandle>> {
        let ws = WebSocket::new(url)
            .map_err(|e| ChatError::Transport(format!("Failed to open {}: {:?}", url, e)))?;
        ws.set_binary_type(BinaryType::Arraybuffer);

        let slot: CallbackSlot = Rc::new(RefCell::new(None));

        let open_sink = sink.clone();
        let on_open = Closure::wrap(Box::new(move |_event: Event| {
            open_sink.send(TransportEvent::Opened);
        }) as Box<dyn FnMut(Event)>);

        let message_sink = sink.clone();
        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            match frame_text(&event.data()) {
                Some(text) => message_sink.send(TransportEvent::Frame(text)),
                None => log::warn!("Ignoring stream frame that is neither text nor bytes"),
            }
        }) as Box<dyn FnMut(MessageEvent)>);

        let error_sink = sink.clone();
        let on_error = Closure::wrap(Box::new(move |_event: Event| {
            error_sink.send(TransportEvent::Error("WebSocket error".to_string()));
        }) as Box<dyn FnMut(Event)>);

        let close_slot = slot.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            log::debug!(
                "WebSocket closed (code {}, reason {:?})",
                event.code(),
                event.reason()
            );
            sink.send(TransportEvent::Closed);
            // Drop the callbacks only after this one has returned.
            let released = close_slot.borrow_mut().take();
            wasm_bindgen_futures::spawn_local(async move {
                drop(released);
            });
        }) as Box<dyn FnMut(CloseEvent)>);

        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        *slot.borrow_mut() = Some(SocketCallbacks {
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        });

        Ok(Box::new(SocketHandle { ws }))
    }
}

struct SocketHandle {
    ws: WebSocket,
}

impl TransportHandle for SocketHandle {
    fn close(&self) {
        if let Err(e) = self.ws.close() {
            log::warn!("WebSocket close failed: {:?}", e);
        }
    }
}

/// Text payload of a message event. Binary frames are decoded lossily, so
/// invalid UTF-8 still reaches frame parsing and is reported there.
pub fn frame_text(data: &JsValue) -> Option<String> {
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    let buffer = data.dyn_ref::<ArrayBuffer>()?;
    let bytes = Uint8Array::new(buffer).to_vec();
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
