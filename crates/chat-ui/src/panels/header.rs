//! Top bar — title, model picker and connection status.

use egui::{self, Align, Layout, RichText};

use chat_types::event::ConnectionState;
use chat_types::model::{available_models, display_name_for};

use crate::state::UiState;
use crate::theme::*;

/// Render the header. Returns Some(model id) when the user picks a
/// different model.
pub fn header_bar(ui: &mut egui::Ui, state: &UiState, selected_model: &str) -> Option<String> {
    let mut selected = selected_model.to_string();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Sunyata AI").strong().color(ACCENT).size(16.0));
        ui.separator();

        egui::ComboBox::from_id_salt("model_selector")
            .selected_text(display_name_for(selected_model))
            .show_ui(ui, |ui| {
                for model in available_models() {
                    ui.selectable_value(&mut selected, model.id.to_string(), model.display_name);
                }
            });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let color = match state.connection {
                ConnectionState::Open => SUCCESS,
                ConnectionState::Connecting => WARNING,
                ConnectionState::Disconnected | ConnectionState::Errored => ERROR,
            };
            ui.label(RichText::new(state.connection.label()).color(color).small());
        });
    });

    (selected != selected_model).then_some(selected)
}
