//! Guild entity - a named collection of channels on some instance

use serde::{Deserialize, Serialize};

use super::GuildTextChannel;

/// Guild as delivered by the gateway
///
/// `channels` is only populated in payloads that carry the full guild
/// (READY, GUILD_CREATE); other events omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub mention: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub channels: Vec<GuildTextChannel>,
}

impl Guild {
    /// Create a guild
    #[must_use]
    pub fn new(mention: impl Into<String>, name: Option<String>) -> Self {
        Self {
            mention: mention.into(),
            name,
            channels: Vec::new(),
        }
    }
}
