//! Message entity - a chat message and its attachments

use serde::{Deserialize, Serialize};

/// A single chat message as it crosses the wire
///
/// `content` may legitimately be absent (attachment-only messages). `files`
/// is always present in a well-formed payload; an empty list means "no
/// attachments". A payload without `files` does not decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub published: String,
    pub updated: String,
    pub author_id: String,
    pub channel_id: String,
    pub files: Vec<Attachment>,
}

impl Message {
    /// Check if the message carries a text body
    ///
    /// Presence alone is the signal: an empty string still counts as text.
    #[inline]
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.content.is_some()
    }

    /// Check if the message carries at least one attachment
    #[inline]
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.files.is_empty()
    }

    /// Check if the message pings the given user
    ///
    /// Mentions have no official wire form yet; the de facto convention is a
    /// leading `user: ` prefix.
    #[must_use]
    pub fn is_ping(&self, user: &str) -> bool {
        self.content
            .as_deref()
            .is_some_and(|text| text.starts_with(&format!("{user}: ")))
    }
}

/// File attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub hash: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Attachment {
    /// Check if the attachment is an image
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
