//! Toast overlay for notifications.

use egui::{self, Align2, Id, Order, RichText};

use chat_types::event::NoticeLevel;

use crate::state::UiState;
use crate::theme::*;

pub fn toasts_overlay(ctx: &egui::Context, state: &UiState) {
    if state.toasts.is_empty() {
        return;
    }

    egui::Area::new(Id::new("toasts"))
        .anchor(Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
        .order(Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in &state.toasts {
                let color = match toast.level {
                    NoticeLevel::Warning => WARNING,
                    NoticeLevel::Error => ERROR,
                };
                egui::Frame::default()
                    .fill(BG_SECONDARY)
                    .stroke(egui::Stroke::new(1.0, color))
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(PANEL_PADDING)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.text).color(color));
                    });
                ui.add_space(4.0);
            }
        });
}
