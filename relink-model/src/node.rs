//! The node model.
//!
//! A [`Node`] is the engine's view of one repository entry in one locale.
//! Nodes never own their children: the repository owns the node arena and
//! parent/child links are id references resolved through
//! [`crate::Repository`].

use chrono::{DateTime, Utc};
use relink_types::{Locale, NodeId, TypeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved prefix for system fields (layout, statistics, workflow state).
///
/// System fields never participate in content fingerprints.
pub const SYSTEM_FIELD_PREFIX: &str = "__";

/// Which of the two layout-definition fields an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// The shared layout, common to every version of a node.
    Shared,
    /// The final layout, layered per version on top of the shared one.
    Final,
}

impl LayoutKind {
    /// The system field holding this layout's serialized definition.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            LayoutKind::Shared => "__layout",
            LayoutKind::Final => "__final layout",
        }
    }
}

/// One repository entry in one locale.
///
/// `path` is deliberately absent: it is derived from the parent chain by
/// the repository and is unique within one locale+version snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub parent_id: Option<NodeId>,
    pub name: String,
    pub type_id: TypeId,
    pub locale: Locale,
    /// Current version number in this locale; `0` when the locale holds no
    /// versions.
    pub version: u32,
    pub created_at: DateTime<Utc>,
    pub sort_order: i64,
    /// Field name → raw field value, in ascending name order.
    pub fields: BTreeMap<String, String>,
}

impl Node {
    /// Creates a node with no fields, version 1 and sort order 0.
    #[must_use]
    pub fn new(
        id: NodeId,
        parent_id: Option<NodeId>,
        name: impl Into<String>,
        type_id: TypeId,
        locale: Locale,
    ) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            type_id,
            locale,
            version: 1,
            created_at: Utc::now(),
            sort_order: 0,
            fields: BTreeMap::new(),
        }
    }

    /// Returns a raw field value by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Sets a raw field value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Fields participating in the content fingerprint: every field whose
    /// name does not start with [`SYSTEM_FIELD_PREFIX`], in ascending name
    /// order.
    pub fn content_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter(|(name, _)| !name.starts_with(SYSTEM_FIELD_PREFIX))
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
