//! Gateway wire protocol - envelope, event registry, client messages

mod client;
mod event_types;
mod messages;

pub use client::ClientMessage;
pub use event_types::GatewayEventType;
pub use messages::GatewayMessage;
