//! Request bodies for the REST API
//!
//! All request DTOs implement `Serialize` for JSON output and `Validate`
//! where a field has a meaningful bound.

use serde::Serialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Registration request
///
/// `invite` is only sent when the instance has closed registrations.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite: Option<String>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Create message request
///
/// A message needs text, attachments, or both; the server rejects a body
/// with neither.
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<AttachmentRef>,
}

impl CreateMessageRequest {
    /// Plain text message
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            files: Vec::new(),
        }
    }

    /// Message with previously uploaded attachments and an optional caption
    #[must_use]
    pub fn with_files(content: Option<String>, files: Vec<AttachmentRef>) -> Self {
        Self { content, files }
    }
}

/// Reference to an already-uploaded attachment
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentRef {
    pub name: String,
    pub hash: String,
}

// ============================================================================
// Guild / Channel Requests
// ============================================================================

/// Create guild request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateGuildRequest {
    #[validate(length(min = 1, max = 100, message = "Guild name must be 1-100 characters"))]
    pub name: String,
}

/// Create channel request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,
}

/// Rename channel request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RenameChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Attachment Requests
// ============================================================================

/// One file the client intends to upload
///
/// `id` is a client-chosen correlation key (the file's MD5 hex digest works
/// well); the server echoes it back in the upload ticket.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentDescriptor {
    pub id: String,
    pub name: String,
    pub md5: String,
    pub mime: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Body of the attachment-creation call: one descriptor per file
pub type CreateAttachmentsRequest = Vec<AttachmentDescriptor>;
