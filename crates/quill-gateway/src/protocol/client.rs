//! Client-to-server gateway messages
//!
//! The client side of the protocol is tiny: authenticate, keep the
//! connection alive, and subscribe to member-list ranges. Messages are
//! tagged with a lowercase `t` field.

use serde::{Deserialize, Serialize};

/// Messages the client sends over the gateway connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Authenticate the connection with a bearer token
    Identify { token: String },

    /// Keep-alive carrying the last seen sequence number
    Heartbeat { s: u64 },

    /// Subscribe to a range of a channel's member list
    Members {
        channel_id: String,
        /// Inclusive `[min, max]` index range
        range: (u32, u32),
    },
}

impl ClientMessage {
    /// Identify message for the given token
    #[must_use]
    pub fn identify(token: impl Into<String>) -> Self {
        Self::Identify {
            token: token.into(),
        }
    }

    /// Heartbeat for the given sequence number
    #[must_use]
    pub fn heartbeat(s: u64) -> Self {
        Self::Heartbeat { s }
    }

    /// Member-list subscription for `channel_id`
    #[must_use]
    pub fn members(channel_id: impl Into<String>, min: u32, max: u32) -> Self {
        Self::Members {
            channel_id: channel_id.into(),
            range: (min, max),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
