//! Gateway event types
//!
//! Defines all event names the server puts in the `t` field of a gateway
//! message.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEventType {
    // Connection events
    /// Initial state dump after a successful identify
    Ready,
    /// Heartbeat acknowledged; echoes the sequence number
    HeartbeatAck,

    // Message events
    /// New message
    MessageCreate,
    /// Message deleted
    MessageDelete,

    // Relationship events
    /// Relationship created (incoming or outgoing request)
    RelationshipCreate,
    /// Relationship state changed
    RelationshipUpdate,
    /// Relationship removed
    RelationshipDelete,

    // Guild events
    /// Guild joined or created
    GuildCreate,
    /// Left guild or guild deleted
    GuildDelete,

    // Channel events
    /// Channel created (guild or DM)
    ChannelCreate,
    /// Channel updated
    ChannelUpdate,
    /// Channel deleted
    ChannelDelete,

    // Member and role events
    /// Slice of a channel's member list
    MembersChunk,
    /// Invite created
    InviteCreate,
    /// User joined a guild
    MemberJoin,
    /// User left a guild
    MemberLeave,
    /// Role created
    RoleCreate,
    /// User added to a role
    RoleMemberAdd,
    /// User removed from a role
    RoleMemberLeave,
}

impl GatewayEventType {
    /// Get the string representation of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::HeartbeatAck => "HEARTBEAT_ACK",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::MessageDelete => "MESSAGE_DELETE",
            Self::RelationshipCreate => "RELATIONSHIP_CREATE",
            Self::RelationshipUpdate => "RELATIONSHIP_UPDATE",
            Self::RelationshipDelete => "RELATIONSHIP_DELETE",
            Self::GuildCreate => "GUILD_CREATE",
            Self::GuildDelete => "GUILD_DELETE",
            Self::ChannelCreate => "CHANNEL_CREATE",
            Self::ChannelUpdate => "CHANNEL_UPDATE",
            Self::ChannelDelete => "CHANNEL_DELETE",
            Self::MembersChunk => "MEMBERS_CHUNK",
            Self::InviteCreate => "INVITE_CREATE",
            Self::MemberJoin => "MEMBER_JOIN",
            Self::MemberLeave => "MEMBER_LEAVE",
            Self::RoleCreate => "ROLE_CREATE",
            Self::RoleMemberAdd => "ROLE_MEMBER_ADD",
            Self::RoleMemberLeave => "ROLE_MEMBER_LEAVE",
        }
    }

    /// Parse an event type from its wire string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "READY" => Some(Self::Ready),
            "HEARTBEAT_ACK" => Some(Self::HeartbeatAck),
            "MESSAGE_CREATE" => Some(Self::MessageCreate),
            "MESSAGE_DELETE" => Some(Self::MessageDelete),
            "RELATIONSHIP_CREATE" => Some(Self::RelationshipCreate),
            "RELATIONSHIP_UPDATE" => Some(Self::RelationshipUpdate),
            "RELATIONSHIP_DELETE" => Some(Self::RelationshipDelete),
            "GUILD_CREATE" => Some(Self::GuildCreate),
            "GUILD_DELETE" => Some(Self::GuildDelete),
            "CHANNEL_CREATE" => Some(Self::ChannelCreate),
            "CHANNEL_UPDATE" => Some(Self::ChannelUpdate),
            "CHANNEL_DELETE" => Some(Self::ChannelDelete),
            "MEMBERS_CHUNK" => Some(Self::MembersChunk),
            "INVITE_CREATE" => Some(Self::InviteCreate),
            "MEMBER_JOIN" => Some(Self::MemberJoin),
            "MEMBER_LEAVE" => Some(Self::MemberLeave),
            "ROLE_CREATE" => Some(Self::RoleCreate),
            "ROLE_MEMBER_ADD" => Some(Self::RoleMemberAdd),
            "ROLE_MEMBER_LEAVE" => Some(Self::RoleMemberLeave),
            _ => None,
        }
    }
}

impl fmt::Display for GatewayEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
