//! In-memory reference repository.
//!
//! Backs the engine's tests and gives embedders a working [`Repository`]
//! without a storage backend. Nodes live in a per-locale arena keyed by
//! id; children are indexed by parent id and ordered by
//! `(sort_order, name)`; the type hierarchy is a base-type table. Lookups
//! are linear scans — fine for a reference implementation, not a
//! persistence layer.

use crate::error::{RepoError, RepoResult};
use crate::node::Node;
use crate::repository::Repository;
use relink_types::{Locale, NodeId, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    locales: Vec<Locale>,
    nodes: HashMap<(NodeId, Locale), Node>,
    type_bases: HashMap<TypeId, Vec<TypeId>>,
}

/// An in-memory [`Repository`].
#[derive(Default)]
pub struct MemoryRepository {
    inner: RwLock<Inner>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a locale. Idempotent; [`MemoryRepository::insert`] also
    /// registers the node's locale.
    pub fn add_locale(&self, locale: impl Into<Locale>) {
        let locale = locale.into();
        let mut inner = self.write();
        if !inner.locales.contains(&locale) {
            inner.locales.push(locale);
        }
    }

    /// Registers a type with no base types.
    pub fn add_type(&self, ty: TypeId) {
        self.write().type_bases.entry(ty).or_default();
    }

    /// Registers a type deriving from the given base types.
    pub fn add_type_with_bases(&self, ty: TypeId, bases: &[TypeId]) {
        self.write().type_bases.insert(ty, bases.to_vec());
    }

    /// Inserts (or replaces) a node in its locale.
    pub fn insert(&self, node: Node) {
        let mut inner = self.write();
        if !inner.locales.contains(&node.locale) {
            inner.locales.push(node.locale.clone());
        }
        inner.nodes.insert((node.id, node.locale.clone()), node);
    }

    /// Removes a node from one locale. No-op when absent.
    pub fn remove(&self, id: NodeId, locale: &Locale) {
        self.write().nodes.remove(&(id, locale.clone()));
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Inner {
    /// Path from the parent chain: `/root/child/...`. `None` on a broken
    /// or cyclic chain.
    fn derive_path(&self, id: NodeId, locale: &Locale) -> Option<String> {
        let mut segments = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            if !visited.insert(node_id) {
                return None;
            }
            let node = self.nodes.get(&(node_id, locale.clone()))?;
            segments.push(node.name.clone());
            current = node.parent_id;
        }

        segments.reverse();
        Some(format!("/{}", segments.join("/")))
    }
}

impl Repository for MemoryRepository {
    fn node(&self, id: NodeId, locale: &Locale) -> Option<Node> {
        self.read().nodes.get(&(id, locale.clone())).cloned()
    }

    fn node_at_path(&self, path: &str, locale: &Locale) -> Option<Node> {
        let inner = self.read();
        inner
            .nodes
            .iter()
            .filter(|((_, node_locale), _)| node_locale == locale)
            .find(|((id, _), _)| inner.derive_path(*id, locale).as_deref() == Some(path))
            .map(|(_, node)| node.clone())
    }

    fn path(&self, id: NodeId, locale: &Locale) -> Option<String> {
        self.read().derive_path(id, locale)
    }

    fn children(&self, id: NodeId, locale: &Locale) -> Vec<Node> {
        let inner = self.read();
        let mut children: Vec<Node> = inner
            .nodes
            .iter()
            .filter(|((_, node_locale), node)| {
                node_locale == locale && node.parent_id == Some(id)
            })
            .map(|(_, node)| node.clone())
            .collect();
        children.sort_by(|a, b| {
            a.sort_order
                .cmp(&b.sort_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        children
    }

    fn locales(&self) -> Vec<Locale> {
        self.read().locales.clone()
    }

    fn versions(&self, id: NodeId, locale: &Locale) -> Vec<u32> {
        // Versions are modeled as a dense 1..=n range; `version == 0`
        // means the locale holds no content.
        match self.read().nodes.get(&(id, locale.clone())) {
            Some(node) => (1..=node.version).collect(),
            None => Vec::new(),
        }
    }

    fn type_derives_from(&self, ty: TypeId, base: TypeId) -> bool {
        if ty == base {
            return true;
        }
        let inner = self.read();
        let mut visited = HashSet::new();
        let mut queue = vec![ty];
        while let Some(current) = queue.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current == base {
                return true;
            }
            if let Some(bases) = inner.type_bases.get(&current) {
                queue.extend(bases.iter().copied());
            }
        }
        false
    }

    fn read_field(&self, id: NodeId, locale: &Locale, field: &str) -> Option<String> {
        self.read()
            .nodes
            .get(&(id, locale.clone()))
            .and_then(|node| node.field(field).map(str::to_string))
    }

    fn write_field(
        &self,
        id: NodeId,
        locale: &Locale,
        field: &str,
        value: &str,
    ) -> RepoResult<()> {
        let mut inner = self.write();
        match inner.nodes.get_mut(&(id, locale.clone())) {
            Some(node) => {
                node.set_field(field, value);
                Ok(())
            }
            None => Err(RepoError::NotFound(format!("{id} ({locale})"))),
        }
    }
}
