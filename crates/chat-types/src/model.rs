use serde::Serialize;

/// An entry in the model picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub display_name: &'static str,
}

pub const DEFAULT_MODEL: &str = "tinyllama";

const AVAILABLE_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "tinyllama",
        display_name: "Sunyata 7B",
    },
    ModelInfo {
        id: "deepseek-r1",
        display_name: "Deepseek R1",
    },
];

/// Static model catalog. Not fetched from the backend.
pub fn available_models() -> &'static [ModelInfo] {
    AVAILABLE_MODELS
}

/// Human-readable name for a model id, falling back to the id itself.
pub fn display_name_for(id: &str) -> &str {
    AVAILABLE_MODELS
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.display_name)
        .unwrap_or(id)
}
