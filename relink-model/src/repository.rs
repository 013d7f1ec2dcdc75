//! The repository collaborator.
//!
//! The engine owns no nodes: every read and the single field write go
//! through this trait. All methods are synchronous; implementations that
//! are shared between threads provide their own interior synchronization
//! so `&self` suffices (see [`crate::MemoryRepository`]).

use crate::error::RepoResult;
use crate::node::Node;
use relink_types::{Locale, NodeId, TypeId};
use std::collections::BTreeMap;
use tracing::warn;

/// Synchronous access to the host content repository.
pub trait Repository {
    /// Looks up a node by id in one locale.
    fn node(&self, id: NodeId, locale: &Locale) -> Option<Node>;

    /// Looks up a node by its full path in one locale.
    fn node_at_path(&self, path: &str, locale: &Locale) -> Option<Node>;

    /// Full path of a node, derived from its parent chain.
    fn path(&self, id: NodeId, locale: &Locale) -> Option<String>;

    /// Ordered children of a node. Unresolvable child links are skipped.
    fn children(&self, id: NodeId, locale: &Locale) -> Vec<Node>;

    /// Locales known to the repository.
    fn locales(&self) -> Vec<Locale>;

    /// Version numbers of a node in one locale. Empty means the locale
    /// holds no content for that node.
    fn versions(&self, id: NodeId, locale: &Locale) -> Vec<u32>;

    /// Whether `ty` equals `base` or transitively derives from it.
    fn type_derives_from(&self, ty: TypeId, base: TypeId) -> bool;

    /// Raw field value of a node in one locale.
    fn read_field(&self, id: NodeId, locale: &Locale, field: &str) -> Option<String>;

    /// Writes one raw field value. Callers go through [`EditScope`] rather
    /// than calling this directly.
    fn write_field(&self, id: NodeId, locale: &Locale, field: &str, value: &str)
    -> RepoResult<()>;

    /// Resolves a datasource reference — a node id string or a full path.
    fn resolve(&self, reference: &str, locale: &Locale) -> Option<Node> {
        let reference = reference.trim();
        if let Ok(id) = NodeId::parse(reference) {
            return self.node(id, locale);
        }
        self.node_at_path(reference, locale)
    }

    /// Opens a scoped edit session on one node. Through a trait object,
    /// use [`EditScope::new`] directly.
    fn begin_edit(&self, id: NodeId, locale: &Locale) -> EditScope<'_, Self>
    where
        Self: Sized,
    {
        EditScope::new(self, id, locale.clone())
    }
}

/// A scoped field write on one node.
///
/// Assignments recorded with [`EditScope::set_field`] are flushed by
/// [`EditScope::commit`]. A scope that is dropped without an explicit
/// commit flushes on drop, so the edit session is closed on every exit
/// path — including when the caller bails out mid-rewrite.
pub struct EditScope<'a, R: Repository + ?Sized> {
    repo: &'a R,
    id: NodeId,
    locale: Locale,
    pending: BTreeMap<String, String>,
}

impl<'a, R: Repository + ?Sized> EditScope<'a, R> {
    /// Opens a scope on one node in one locale.
    pub fn new(repo: &'a R, id: NodeId, locale: Locale) -> Self {
        Self {
            repo,
            id,
            locale,
            pending: BTreeMap::new(),
        }
    }

    /// Records a field assignment. Re-assigning the same field within one
    /// scope keeps the last value.
    pub fn set_field(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.pending.insert(field.into(), value.into());
    }

    /// Flushes every pending assignment, consuming the scope.
    ///
    /// The first write error is returned; remaining assignments are still
    /// attempted so the session never half-closes.
    pub fn commit(mut self) -> RepoResult<()> {
        self.flush()
    }

    fn flush(&mut self) -> RepoResult<()> {
        let mut result = Ok(());
        let pending = std::mem::take(&mut self.pending);
        for (field, value) in pending {
            if let Err(err) = self.repo.write_field(self.id, &self.locale, &field, &value)
                && result.is_ok()
            {
                result = Err(err);
            }
        }
        result
    }
}

impl<R: Repository + ?Sized> Drop for EditScope<'_, R> {
    fn drop(&mut self) {
        if !self.pending.is_empty()
            && let Err(err) = self.flush()
        {
            warn!(node = %self.id, "edit scope flush on drop failed: {err}");
        }
    }
}
