//! Main egui application — composes the panels around the chat client.

use std::rc::Rc;
use std::time::Duration;

use egui::{self, CentralPanel, TopBottomPanel};

use chat_core::client::ChatClient;
use chat_platform::{HttpChatApi, TimeoutScheduler, WebSocketTransport};
use chat_types::config::ClientConfig;
use chat_ui::panels::{chat, header, toasts};
use chat_ui::state::UiState;
use chat_ui::theme;

/// Repaint cadence while idle, so socket traffic shows up without input.
const IDLE_REPAINT: Duration = Duration::from_millis(100);

pub struct ChatApp {
    ui_state: UiState,
    client: ChatClient,
    first_frame: bool,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ClientConfig::default();

        let client = ChatClient::new(
            &config,
            Rc::new(WebSocketTransport::new()),
            Rc::new(HttpChatApi::new(config.api_url.clone())),
            Rc::new(TimeoutScheduler::new()),
        );
        client.connect();

        Self {
            ui_state: UiState::new(),
            client,
            first_frame: true,
        }
    }

    /// Submit a prompt in the background. Failures have already been
    /// surfaced through the store and the event bus.
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let client = self.client.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = client.send_message(&text).await {
                log::error!("Send failed: {}", e);
            }
            ctx.request_repaint();
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        let now = ctx.input(|i| i.time);

        let events = self.client.events().drain();
        if !events.is_empty() {
            self.ui_state.process_events(events, now);
            ctx.request_repaint();
        }
        self.ui_state.prune_toasts(now);

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let selected = self.client.store().selected_model();
            if let Some(model) = header::header_bar(ui, &self.ui_state, &selected) {
                self.client.set_selected_model(&model);
            }
        });

        // ── Conversation ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(text) = chat::chat_panel(ui, &mut self.ui_state, self.client.store()) {
                self.dispatch_message(text, ctx);
            }
        });

        toasts::toasts_overlay(ctx, &self.ui_state);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        self.client.shutdown();
    }
}
