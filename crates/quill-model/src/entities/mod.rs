//! Wire-facing entities - the shapes the service exchanges with clients

mod channel;
mod guild;
mod message;
mod relationship;
mod user;

pub use channel::{DmChannel, GuildTextChannel};
pub use guild::Guild;
pub use message::{Attachment, Message};
pub use relationship::{Relationship, RelationshipStatus, UnknownRelationshipStatus};
pub use user::User;
