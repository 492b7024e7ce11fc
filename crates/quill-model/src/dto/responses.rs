//! Response bodies for the REST API
//!
//! All response DTOs implement `Deserialize`; the client never produces
//! these shapes itself.

use serde::Deserialize;

use crate::entities::User;

/// Reply to both login and registration
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests
    pub token: String,
    pub user: User,
}

/// Per-file reply to attachment creation
///
/// The client PUTs the raw bytes to `url`, then references the file by
/// `hash` when creating the message.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentUploadTicket {
    pub id: String,
    pub hash: String,
    pub url: String,
}

/// The slice of `/.well-known/nodeinfo/2.0` the client consumes
#[derive(Debug, Clone, Deserialize)]
pub struct NodeInfo {
    #[serde(rename = "openRegistrations")]
    pub open_registrations: bool,
}
