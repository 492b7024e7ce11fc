//! Wire-format integration tests
//!
//! Drive the full decode path: raw JSON -> gateway envelope -> typed event
//! -> entities, the way a client processes real traffic.
//!
//! Run with: cargo test -p integration-tests --test wire_tests

use integration_tests::{
    attachment_json, channel_create_envelope, dm_channel_json, guild_channel_json,
    message_create_envelope, ready_envelope, relationship_json,
};
use quill_gateway::{GatewayEvent, GatewayEventType, GatewayMessage, ProtocolError};
use quill_model::RelationshipStatus;
use serde_json::json;

// ============================================================================
// READY
// ============================================================================

#[test]
fn test_ready_decodes_into_typed_state() {
    let msg = GatewayMessage::from_json(&ready_envelope()).unwrap();
    let GatewayEvent::Ready(ready) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected READY");
    };

    assert_eq!(ready.guilds.len(), 1);
    let guild = &ready.guilds[0];
    assert_eq!(guild.name.as_deref(), Some("rust talk"));
    assert_eq!(guild.channels.len(), 2);
    assert_eq!(guild.channels[0].complete_id(), "42@alpha.org");

    assert_eq!(ready.channels.len(), 1);
    assert_eq!(ready.channels[0].owner, "alex@alpha.org");

    let statuses: Vec<_> = ready.relationships.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            RelationshipStatus::Pending,
            RelationshipStatus::Accepted,
            RelationshipStatus::Blocked,
        ]
    );
}

#[test]
fn test_ready_with_bad_relationship_status_fails_whole_decode() {
    // one stray status integer poisons the entire READY, by design
    let raw = json!({
        "t": "READY",
        "d": {
            "guilds": [],
            "channels": [],
            "relationships": [relationship_json("peter@beta.org", 3)],
        },
    })
    .to_string();

    let msg = GatewayMessage::from_json(&raw).unwrap();
    let err = GatewayEvent::decode(&msg).unwrap_err();
    assert!(matches!(err, ProtocolError::InvalidPayload(_)));
    assert!(err.to_string().contains('3'));
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_text_message_lifecycle() {
    let raw = message_create_envelope(Some("maria: lunch?"), json!([]));
    let msg = GatewayMessage::from_json(&raw).unwrap();
    let GatewayEvent::MessageCreate(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected MESSAGE_CREATE");
    };

    assert!(payload.message.has_text());
    assert!(!payload.message.has_attachments());
    assert!(payload.message.is_ping("maria"));
    assert!(!payload.message.is_ping("alex"));
}

#[test]
fn test_attachment_only_message() {
    let raw = message_create_envelope(None, json!([attachment_json("cat.png", "image/png")]));
    let msg = GatewayMessage::from_json(&raw).unwrap();
    let GatewayEvent::MessageCreate(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected MESSAGE_CREATE");
    };

    assert!(!payload.message.has_text());
    assert!(payload.message.has_attachments());
    assert!(payload.message.files[0].is_image());
}

#[test]
fn test_message_without_files_is_rejected() {
    let raw = json!({
        "t": "MESSAGE_CREATE",
        "d": {
            "message": {
                "id": "m1",
                "content": "hi",
                "published": "p",
                "updated": "u",
                "author_id": "a",
                "channel_id": "c",
            },
        },
    })
    .to_string();

    let msg = GatewayMessage::from_json(&raw).unwrap();
    assert!(matches!(
        GatewayEvent::decode(&msg),
        Err(ProtocolError::InvalidPayload(_))
    ));
}

// ============================================================================
// Channels
// ============================================================================

#[test]
fn test_channel_create_dispatches_on_shape() {
    let guild = channel_create_envelope(guild_channel_json("50", "media", "alpha.org", "g1"));
    let msg = GatewayMessage::from_json(&guild).unwrap();
    let GatewayEvent::ChannelCreate(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected CHANNEL_CREATE");
    };
    assert!(payload.channel.is_guild_channel());

    let dm = channel_create_envelope(dm_channel_json(
        "9@alpha.org",
        "dm",
        "alex@alpha.org",
        &["peter@beta.org"],
    ));
    let msg = GatewayMessage::from_json(&dm).unwrap();
    let GatewayEvent::ChannelCreate(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected CHANNEL_CREATE");
    };
    assert!(payload.channel.is_dm_channel());
}

// ============================================================================
// Relationship lifecycle across events
// ============================================================================

#[test]
fn test_relationship_update_roundtrip() {
    let raw = json!({
        "t": "RELATIONSHIP_UPDATE",
        "d": { "relationship": relationship_json("peter@beta.org", 1) },
    })
    .to_string();

    let msg = GatewayMessage::from_json(&raw).unwrap();
    let GatewayEvent::RelationshipUpdate(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected RELATIONSHIP_UPDATE");
    };
    assert_eq!(payload.relationship.status, RelationshipStatus::Accepted);

    // re-encoding puts the integer back, never the name
    let encoded = serde_json::to_value(&payload.relationship).unwrap();
    assert_eq!(encoded["type"], 1);
}

#[test]
fn test_relationship_delete_carries_mention_only() {
    let raw = json!({
        "t": "RELATIONSHIP_DELETE",
        "d": { "user": "troll@delta.org" },
    })
    .to_string();

    let msg = GatewayMessage::from_json(&raw).unwrap();
    let GatewayEvent::RelationshipDelete(payload) = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected RELATIONSHIP_DELETE");
    };
    assert_eq!(payload.user, "troll@delta.org");
}

// ============================================================================
// Unknown traffic
// ============================================================================

#[test]
fn test_unknown_event_type_is_an_error() {
    let msg = GatewayMessage::from_json(r#"{"t": "TOTALLY_NEW", "d": {}}"#).unwrap();
    let err = GatewayEvent::decode(&msg).unwrap_err();
    assert!(matches!(err, ProtocolError::UnknownEventType(t) if t == "TOTALLY_NEW"));
}

#[test]
fn test_unmodeled_event_passes_through_with_data() {
    let msg =
        GatewayMessage::from_json(r#"{"t": "MEMBER_JOIN", "d": {"user": "new@alpha.org"}}"#)
            .unwrap();
    let GatewayEvent::Unhandled { event_type, data } = GatewayEvent::decode(&msg).unwrap() else {
        panic!("expected unhandled event");
    };
    assert_eq!(event_type, GatewayEventType::MemberJoin);
    assert_eq!(data.unwrap()["user"], "new@alpha.org");
}
