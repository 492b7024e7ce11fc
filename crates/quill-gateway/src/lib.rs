//! # quill-gateway
//!
//! Wire protocol for the gateway connection: the message envelope, the
//! event registry, client-to-server messages, and typed event payloads.
//! This crate decodes and encodes; it never touches a socket.

pub mod error;
pub mod events;
pub mod protocol;

// Re-export commonly used types at crate root
pub use error::ProtocolError;
pub use events::{GatewayEvent, ReadyPayload};
pub use protocol::{ClientMessage, GatewayEventType, GatewayMessage};
