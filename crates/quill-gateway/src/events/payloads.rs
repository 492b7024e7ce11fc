//! Event payload definitions
//!
//! One struct per event, shaped exactly like the `d` object the server
//! sends.

use quill_model::{DmChannel, Guild, GuildTextChannel, Message, Relationship};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// === Connection Events ===

/// READY event payload
///
/// Full state dump sent once after identify: every guild (with channels),
/// every DM channel, every relationship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyPayload {
    pub guilds: Vec<Guild>,
    pub channels: Vec<DmChannel>,
    pub relationships: Vec<Relationship>,
}

// === Message Events ===

/// MESSAGE_CREATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCreatePayload {
    pub message: Message,
}

/// MESSAGE_DELETE event payload
///
/// Carries addresses only, not the message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDeletePayload {
    pub channel: String,
    pub message: String,
}

// === Relationship Events ===

/// RELATIONSHIP_CREATE and RELATIONSHIP_UPDATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipPayload {
    pub relationship: Relationship,
}

/// RELATIONSHIP_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipDeletePayload {
    /// Mention of the user the relationship was with
    pub user: String,
}

// === Guild Events ===

/// GUILD_CREATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildCreatePayload {
    pub guild: Guild,
}

/// GUILD_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildDeletePayload {
    /// Mention of the deleted guild
    pub guild: String,
}

// === Channel Events ===

/// Either kind of channel, as it appears in CHANNEL_CREATE
///
/// The wire does not tag the kind; a guild channel is recognized by its
/// `domain`/`guild_id` fields, a DM channel by `owner`/`recipients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelPayload {
    Guild(GuildTextChannel),
    Dm(DmChannel),
}

impl ChannelPayload {
    /// Check if this is a guild text channel
    #[inline]
    #[must_use]
    pub fn is_guild_channel(&self) -> bool {
        matches!(self, Self::Guild(_))
    }

    /// Check if this is a private DM channel
    #[inline]
    #[must_use]
    pub fn is_dm_channel(&self) -> bool {
        matches!(self, Self::Dm(_))
    }
}

/// CHANNEL_CREATE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelCreatePayload {
    pub channel: ChannelPayload,
}

/// CHANNEL_UPDATE event payload
///
/// Only guild channels are updated through the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelUpdatePayload {
    pub channel: GuildTextChannel,
}

/// CHANNEL_DELETE event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelDeletePayload {
    pub channel: String,
    pub guild: String,
}

// === Member Events ===

/// MEMBERS_CHUNK event payload
///
/// Member items stay raw JSON; the client renders them without modeling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembersChunkPayload {
    pub items: Vec<Value>,
}
