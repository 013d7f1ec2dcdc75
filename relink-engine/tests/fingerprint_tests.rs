mod common;

use chrono::Duration;
use common::*;
use relink_engine::fingerprint::content_fingerprint;
use relink_model::Node;
use relink_types::{NodeId, TypeId};

fn sample() -> Node {
    let mut node = Node::new(NodeId::new(), None, "banner", TypeId::new(), en());
    node.created_at = created();
    node.set_field("title", "Welcome");
    node.set_field("text", "Hello world");
    node
}

#[test]
fn digest_is_lowercase_hex() {
    let digest = content_fingerprint(&sample());
    assert_eq!(digest.len(), 32);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(digest, digest.to_lowercase());
}

#[test]
fn identical_content_with_different_identity_matches() {
    let node = sample();
    let mut twin = node.clone();
    twin.id = NodeId::new();
    twin.parent_id = Some(NodeId::new());

    assert_eq!(content_fingerprint(&node), content_fingerprint(&twin));
}

// ── sensitivity ──────────────────────────────────────────────────

#[test]
fn name_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.name = "banner2".to_string();
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn type_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.type_id = TypeId::new();
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn version_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.version = 2;
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn sort_order_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.sort_order = 100;
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn creation_time_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.created_at = created() + Duration::seconds(1);
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn sub_second_creation_time_is_ignored() {
    let node = sample();
    let mut other = node.clone();
    other.created_at = created() + Duration::milliseconds(400);
    assert_eq!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn field_value_changes_the_digest() {
    let node = sample();
    let mut other = node.clone();
    other.set_field("title", "Welcome!");
    assert_ne!(content_fingerprint(&node), content_fingerprint(&other));
}

#[test]
fn system_fields_are_ignored() {
    let node = sample();
    let mut other = node.clone();
    other.set_field("__layout", "{\"devices\":[]}");
    other.set_field("__workflow state", "draft");
    assert_eq!(content_fingerprint(&node), content_fingerprint(&other));
}
