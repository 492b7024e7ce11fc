//! Typed gateway events and their payloads

mod event;
mod payloads;

pub use event::GatewayEvent;
pub use payloads::{
    ChannelCreatePayload, ChannelDeletePayload, ChannelPayload, ChannelUpdatePayload,
    GuildCreatePayload, GuildDeletePayload, MembersChunkPayload, MessageCreatePayload,
    MessageDeletePayload, ReadyPayload, RelationshipDeletePayload, RelationshipPayload,
};
