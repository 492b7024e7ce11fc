//! Gateway protocol errors

use thiserror::Error;

/// Errors produced while decoding gateway traffic
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The `t` field names no known event
    #[error("unknown gateway event type: {0}")]
    UnknownEventType(String),

    /// A field the event requires is absent from the envelope
    #[error("event is missing required field: {0}")]
    MissingData(&'static str),

    /// The `d` payload does not match the event's shape
    #[error("invalid event payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
