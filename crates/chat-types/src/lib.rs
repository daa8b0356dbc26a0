pub mod message;
pub mod wire;
pub mod model;
pub mod thinking;
pub mod event;
pub mod config;
pub mod error;


pub use error::{ChatError, ParseError};
pub type Result<T> = std::result::Result<T, ChatError>;
