pub mod store;
pub mod event_bus;
pub mod ports;
pub mod connection;
pub mod send;
pub mod client;
