//! Wire-shaped JSON fixtures
//!
//! Each builder returns the JSON a real server would send, so tests
//! exercise the exact field names and nesting of the wire format.

use serde_json::{json, Value};

/// A guild text channel object
#[must_use]
pub fn guild_channel_json(id: &str, name: &str, domain: &str, guild_id: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "domain": domain,
        "guild_id": guild_id,
    })
}

/// A private DM channel object
#[must_use]
pub fn dm_channel_json(mention: &str, name: &str, owner: &str, recipients: &[&str]) -> Value {
    json!({
        "mention": mention,
        "name": name,
        "owner": owner,
        "recipients": recipients,
    })
}

/// A message object, with or without a text body
#[must_use]
pub fn message_json(id: &str, content: Option<&str>, files: Value) -> Value {
    let mut message = json!({
        "id": id,
        "published": "2025-05-01T10:00:00Z",
        "updated": "2025-05-01T10:00:00Z",
        "author_id": "alex@alpha.org",
        "channel_id": "42@alpha.org",
        "files": files,
    });
    if let Some(text) = content {
        message["content"] = json!(text);
    }
    message
}

/// An attachment object
#[must_use]
pub fn attachment_json(name: &str, content_type: &str) -> Value {
    json!({
        "id": "f1",
        "name": name,
        "hash": "d41d8cd98f00b204",
        "type": content_type,
        "size": 2048,
        "width": 640,
        "height": 480,
    })
}

/// A relationship object with the given wire status integer
#[must_use]
pub fn relationship_json(mention: &str, status: i64) -> Value {
    json!({
        "user": {
            "mention": mention,
            "name": mention.split('@').next().unwrap_or(mention),
            "displayName": "Someone",
        },
        "type": status,
    })
}

/// A full READY dump: one guild with two channels, one DM channel, and one
/// relationship per status
#[must_use]
pub fn ready_envelope() -> String {
    json!({
        "t": "READY",
        "d": {
            "guilds": [{
                "mention": "g1@alpha.org",
                "name": "rust talk",
                "channels": [
                    guild_channel_json("42", "general", "alpha.org", "g1"),
                    guild_channel_json("43", "random", "alpha.org", "g1"),
                ],
            }],
            "channels": [
                dm_channel_json("9@alpha.org", "alex & peter", "alex@alpha.org", &["peter@beta.org"]),
            ],
            "relationships": [
                relationship_json("peter@beta.org", 0),
                relationship_json("maria@gamma.org", 1),
                relationship_json("troll@delta.org", 2),
            ],
        },
    })
    .to_string()
}

/// A MESSAGE_CREATE envelope
#[must_use]
pub fn message_create_envelope(content: Option<&str>, files: Value) -> String {
    json!({
        "t": "MESSAGE_CREATE",
        "d": { "message": message_json("m1", content, files) },
    })
    .to_string()
}

/// A CHANNEL_CREATE envelope wrapping the given channel object
#[must_use]
pub fn channel_create_envelope(channel: Value) -> String {
    json!({
        "t": "CHANNEL_CREATE",
        "d": { "channel": channel },
    })
    .to_string()
}
