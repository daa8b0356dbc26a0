//! Chat panel — displays conversation messages and input field.

use egui::{self, Color32, RichText, ScrollArea, Vec2};

use chat_core::store::ChatStore;
use chat_types::message::{Message, Role};
use chat_types::thinking::{split_thinking, Thinking};

use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns Some(message) when user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, store: &ChatStore) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                let available_height = ui.available_height() - 48.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        store.read(|session| {
                            for message in session.messages() {
                                render_message(ui, message);
                                ui.add_space(4.0);
                            }
                        });
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Message Sunyata AI...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        submitted = state.take_submission();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", TEXT_SECONDARY, USER_BUBBLE),
        Role::Assistant => ("Sunyata AI", ACCENT, BG_SECONDARY),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).color(label_color).strong().small());
                if let Some(model) = message.model.as_deref().filter(|m| !m.is_empty()) {
                    ui.label(RichText::new(model).color(TEXT_SECONDARY).small().background_color(BG_SURFACE));
                }
            });

            let split = split_thinking(&message.content);
            render_thinking(ui, message, split.thinking);

            if !split.answer.is_empty() || message.streaming {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&split.answer).color(TEXT_PRIMARY));
                    if message.streaming {
                        ui.label(RichText::new("▌").color(ACCENT).strong());
                    }
                });
            }
        });
}

/// Label shown above a reasoning trace.
pub const THINKING_LABEL: &str = "Sunyata is thinking";

/// Title and trace text for the thinking section, if the message has one.
pub fn thinking_header(thinking: Thinking<'_>) -> Option<(&'static str, &str)> {
    match thinking {
        Thinking::None => None,
        Thinking::InProgress(trace) | Thinking::Complete(trace) => Some((THINKING_LABEL, trace)),
    }
}

fn render_thinking(ui: &mut egui::Ui, message: &Message, thinking: Thinking<'_>) {
    let Some((title, trace)) = thinking_header(thinking) else {
        return;
    };

    egui::CollapsingHeader::new(RichText::new(title).color(TEXT_SECONDARY).small())
        .id_salt(message.id.as_str())
        .default_open(true)
        .show(ui, |ui| {
            ui.label(
                RichText::new(trace.trim())
                    .italics()
                    .color(Color32::from_gray(170)),
            );
        });
}
