//! # quill-model
//!
//! Wire-facing data model for the federated chat API: the entities the
//! service exchanges with clients plus the REST request/response bodies.
//! This crate has zero dependencies on transport, storage, or UI.

pub mod dto;
pub mod entities;

// Re-export commonly used types at crate root
pub use entities::{
    Attachment, DmChannel, Guild, GuildTextChannel, Message, Relationship, RelationshipStatus,
    UnknownRelationshipStatus, User,
};
