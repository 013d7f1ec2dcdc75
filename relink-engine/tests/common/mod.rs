//! Shared fixtures for engine tests.
//!
//! Nodes get a fixed creation timestamp so identical content produces
//! identical fingerprints across the original and copy subtrees.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use relink_model::{MemoryRepository, Node, Repository};
use relink_types::{Locale, NodeId, TypeId};

pub fn en() -> Locale {
    Locale::new("en")
}

pub fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Inserts a node with the fixture timestamp, version 1 and sort order 0.
pub fn add_node(
    repo: &MemoryRepository,
    parent: Option<NodeId>,
    name: &str,
    ty: TypeId,
) -> NodeId {
    add_node_in(repo, parent, name, ty, &en())
}

/// Same as [`add_node`] for an explicit locale.
pub fn add_node_in(
    repo: &MemoryRepository,
    parent: Option<NodeId>,
    name: &str,
    ty: TypeId,
    locale: &Locale,
) -> NodeId {
    let id = NodeId::new();
    insert_node(repo, id, parent, name, ty, locale);
    id
}

/// Inserts a node under a caller-chosen id (for multi-locale fixtures).
pub fn insert_node(
    repo: &MemoryRepository,
    id: NodeId,
    parent: Option<NodeId>,
    name: &str,
    ty: TypeId,
    locale: &Locale,
) {
    let mut node = Node::new(id, parent, name, ty, locale.clone());
    node.created_at = created();
    repo.insert(node);
}

/// Sets one raw field value on an existing node.
pub fn set_field(repo: &MemoryRepository, id: NodeId, locale: &Locale, field: &str, value: &str) {
    repo.write_field(id, locale, field, value)
        .expect("fixture node exists");
}

/// Fetches a node that is known to exist.
pub fn get(repo: &MemoryRepository, id: NodeId, locale: &Locale) -> Node {
    repo.node(id, locale).expect("fixture node exists")
}

/// A single-device layout whose renderings reference the given
/// datasources, one rendering each.
pub fn layout_with_datasources(datasources: &[&str]) -> String {
    let renderings: Vec<serde_json::Value> = datasources
        .iter()
        .enumerate()
        .map(|(i, ds)| serde_json::json!({ "id": format!("r{i}"), "datasource": ds }))
        .collect();
    serde_json::json!({
        "devices": [{ "id": "default", "renderings": renderings }]
    })
    .to_string()
}

/// A layout with one rendering whose datasource is `datasource` and whose
/// rule set assigns `rule_datasource` via a `SetDataSource` action.
pub fn layout_with_rule(datasource: &str, rule_datasource: &str) -> String {
    let rules = serde_json::json!({
        "rules": [{ "actions": [{ "action": "SetDataSource", "dataSource": rule_datasource }] }]
    })
    .to_string();
    serde_json::json!({
        "devices": [{
            "id": "default",
            "renderings": [{ "id": "r0", "datasource": datasource, "rules": rules }]
        }]
    })
    .to_string()
}
