//! Gateway message format
//!
//! Defines the envelope for all messages arriving over the gateway
//! connection.

use super::GatewayEventType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-to-client gateway envelope
///
/// Every message carries an event name in `t`; `s` and `d` are only present
/// for events that need them (HEARTBEAT_ACK carries `s`, most others carry
/// `d`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayMessage {
    /// Event name
    pub t: String,

    /// Sequence number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,

    /// Event data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<Value>,
}

impl GatewayMessage {
    /// Create an envelope with a data payload
    #[must_use]
    pub fn with_data(event_type: GatewayEventType, data: Value) -> Self {
        Self {
            t: event_type.as_str().to_string(),
            s: None,
            d: Some(data),
        }
    }

    /// Resolve the `t` field against the known event registry
    #[must_use]
    pub fn event_type(&self) -> Option<GatewayEventType> {
        GatewayEventType::from_str(&self.t)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl std::fmt::Display for GatewayMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GatewayMessage(t={}", self.t)?;
        if let Some(s) = self.s {
            write!(f, ", s={s}")?;
        }
        write!(f, ")")
    }
}
