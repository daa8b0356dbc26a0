pub mod header;
pub mod chat;
pub mod toasts;
