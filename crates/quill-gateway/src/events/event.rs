//! Typed gateway events
//!
//! Turns a raw [`GatewayMessage`] envelope into a typed event, failing
//! loudly on unknown event names and malformed payloads.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ProtocolError;
use crate::events::{
    ChannelCreatePayload, ChannelDeletePayload, ChannelUpdatePayload, GuildCreatePayload,
    GuildDeletePayload, MembersChunkPayload, MessageCreatePayload, MessageDeletePayload,
    ReadyPayload, RelationshipDeletePayload, RelationshipPayload,
};
use crate::protocol::{GatewayEventType, GatewayMessage};

/// A decoded gateway event
///
/// Registry members the client does not model further (invites, member and
/// role bookkeeping) decode to [`GatewayEvent::Unhandled`] with their raw
/// data preserved.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    Ready(ReadyPayload),
    HeartbeatAck { s: u64 },
    MessageCreate(MessageCreatePayload),
    MessageDelete(MessageDeletePayload),
    RelationshipCreate(RelationshipPayload),
    RelationshipUpdate(RelationshipPayload),
    RelationshipDelete(RelationshipDeletePayload),
    GuildCreate(GuildCreatePayload),
    GuildDelete(GuildDeletePayload),
    ChannelCreate(ChannelCreatePayload),
    ChannelUpdate(ChannelUpdatePayload),
    ChannelDelete(ChannelDeletePayload),
    MembersChunk(MembersChunkPayload),
    Unhandled {
        event_type: GatewayEventType,
        data: Option<Value>,
    },
}

impl GatewayEvent {
    /// Decode a typed event out of an envelope
    ///
    /// An unrecognized `t` is an error, not a silent skip; so is a missing
    /// or malformed `d` for events that require one.
    pub fn decode(message: &GatewayMessage) -> Result<Self, ProtocolError> {
        let event_type = message
            .event_type()
            .ok_or_else(|| ProtocolError::UnknownEventType(message.t.clone()))?;

        match event_type {
            GatewayEventType::Ready => Ok(Self::Ready(data(message)?)),
            GatewayEventType::HeartbeatAck => {
                let s = message.s.ok_or(ProtocolError::MissingData("s"))?;
                Ok(Self::HeartbeatAck { s })
            }
            GatewayEventType::MessageCreate => Ok(Self::MessageCreate(data(message)?)),
            GatewayEventType::MessageDelete => Ok(Self::MessageDelete(data(message)?)),
            GatewayEventType::RelationshipCreate => Ok(Self::RelationshipCreate(data(message)?)),
            GatewayEventType::RelationshipUpdate => Ok(Self::RelationshipUpdate(data(message)?)),
            GatewayEventType::RelationshipDelete => Ok(Self::RelationshipDelete(data(message)?)),
            GatewayEventType::GuildCreate => Ok(Self::GuildCreate(data(message)?)),
            GatewayEventType::GuildDelete => Ok(Self::GuildDelete(data(message)?)),
            GatewayEventType::ChannelCreate => Ok(Self::ChannelCreate(data(message)?)),
            GatewayEventType::ChannelUpdate => Ok(Self::ChannelUpdate(data(message)?)),
            GatewayEventType::ChannelDelete => Ok(Self::ChannelDelete(data(message)?)),
            GatewayEventType::MembersChunk => Ok(Self::MembersChunk(data(message)?)),
            GatewayEventType::InviteCreate
            | GatewayEventType::MemberJoin
            | GatewayEventType::MemberLeave
            | GatewayEventType::RoleCreate
            | GatewayEventType::RoleMemberAdd
            | GatewayEventType::RoleMemberLeave => {
                debug!(event = %event_type, "no payload model for event");
                Ok(Self::Unhandled {
                    event_type,
                    data: message.d.clone(),
                })
            }
        }
    }

    /// The registry entry this event decoded from
    #[must_use]
    pub fn event_type(&self) -> GatewayEventType {
        match self {
            Self::Ready(_) => GatewayEventType::Ready,
            Self::HeartbeatAck { .. } => GatewayEventType::HeartbeatAck,
            Self::MessageCreate(_) => GatewayEventType::MessageCreate,
            Self::MessageDelete(_) => GatewayEventType::MessageDelete,
            Self::RelationshipCreate(_) => GatewayEventType::RelationshipCreate,
            Self::RelationshipUpdate(_) => GatewayEventType::RelationshipUpdate,
            Self::RelationshipDelete(_) => GatewayEventType::RelationshipDelete,
            Self::GuildCreate(_) => GatewayEventType::GuildCreate,
            Self::GuildDelete(_) => GatewayEventType::GuildDelete,
            Self::ChannelCreate(_) => GatewayEventType::ChannelCreate,
            Self::ChannelUpdate(_) => GatewayEventType::ChannelUpdate,
            Self::ChannelDelete(_) => GatewayEventType::ChannelDelete,
            Self::MembersChunk(_) => GatewayEventType::MembersChunk,
            Self::Unhandled { event_type, .. } => *event_type,
        }
    }
}

/// Deserialize the `d` payload of an envelope
fn data<T: DeserializeOwned>(message: &GatewayMessage) -> Result<T, ProtocolError> {
    let d = message.d.as_ref().ok_or(ProtocolError::MissingData("d"))?;
    Ok(serde_json::from_value(d.clone())?)
}
