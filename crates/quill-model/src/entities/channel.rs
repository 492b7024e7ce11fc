//! Channel entities - guild text channels and private DM channels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Publicly addressable guild text channel
///
/// Channels are federated: `id` is only unique within the instance named by
/// `domain`. The `id@domain` pair is the globally unique address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildTextChannel {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub guild_id: String,
}

impl GuildTextChannel {
    /// Create a channel from its four wire fields
    ///
    /// No validation happens here; empty fields are the caller's problem.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        domain: impl Into<String>,
        guild_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            guild_id: guild_id.into(),
        }
    }

    /// Globally unique address of this channel: `id@domain`
    ///
    /// Always derived from the current field values, never cached. Plain
    /// concatenation - neither part is escaped, even if it contains `@`.
    #[must_use]
    pub fn complete_id(&self) -> String {
        format!("{}@{}", self.id, self.domain)
    }
}

impl fmt::Display for GuildTextChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GuildTextChannel(id={}, name={}, domain={}, guild_id={})",
            self.id, self.name, self.domain, self.guild_id
        )
    }
}

/// Private DM channel between users
///
/// `owner` and `recipients` carry user mentions, not local ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmChannel {
    pub mention: String,
    pub name: String,
    pub owner: String,
    pub recipients: Vec<String>,
}

impl DmChannel {
    /// Create a DM channel
    #[must_use]
    pub fn new(
        mention: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        recipients: Vec<String>,
    ) -> Self {
        Self {
            mention: mention.into(),
            name: name.into(),
            owner: owner.into(),
            recipients,
        }
    }
}
