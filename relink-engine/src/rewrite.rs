//! The field rewriter — the transactional unit of a remap.
//!
//! One invocation rewrites one layout field on one copy node in one
//! locale. Whatever happens inside, the edit scope on the copy is closed
//! before returning, and no failure propagates to the caller.

use crate::classify::is_relative;
use crate::correspondence::swap_root_prefix;
use crate::error::{EngineError, EngineResult};
use crate::extract::extract_datasources;
use relink_model::{EditScope, LayoutKind, Node, Repository};
use relink_types::NodeId;
use std::collections::HashMap;
use tracing::{debug, warn};

/// How a relative reference's copy-side destination is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemapStrategy {
    /// Prefix-path substitution only — the earliest engine behavior.
    PathOnly,
    /// Content-fingerprint lookup first, prefix-path substitution as the
    /// fallback.
    #[default]
    FingerprintWithPathFallback,
}

/// Rewrites one layout field on `copy` so references into the original
/// subtree point at their copied counterparts.
///
/// Every failure is caught here, logged with both node paths, and leaves
/// the field as it was; nothing propagates — a field that cannot be
/// remapped must never break the copy operation itself.
pub fn remap_field(
    repo: &dyn Repository,
    original: &Node,
    copy: &Node,
    kind: LayoutKind,
    fingerprints: &HashMap<NodeId, Node>,
    strategy: RemapStrategy,
) {
    if let Err(err) = try_remap_field(repo, original, copy, kind, fingerprints, strategy) {
        let copy_path = repo.path(copy.id, &copy.locale).unwrap_or_default();
        let original_path = repo.path(original.id, &original.locale).unwrap_or_default();
        warn!(
            copy = %copy_path,
            original = %original_path,
            "error re-mapping relative datasources: {err}"
        );
    }
}

fn try_remap_field(
    repo: &dyn Repository,
    original: &Node,
    copy: &Node,
    kind: LayoutKind,
    fingerprints: &HashMap<NodeId, Node>,
    strategy: RemapStrategy,
) -> EngineResult<()> {
    // A version-less node has no field content to rewrite.
    if repo.versions(original.id, &original.locale).is_empty()
        || repo.versions(copy.id, &copy.locale).is_empty()
    {
        return Ok(());
    }

    let datasources = extract_datasources(repo, original, kind);
    let Some(mut raw) = repo.read_field(copy.id, &copy.locale, kind.field_name()) else {
        return Ok(());
    };

    // The scope stays open across the substitution loop; whatever was
    // assigned so far is flushed even if a later step bails out.
    let mut scope = EditScope::new(repo, copy.id, copy.locale.clone());
    scope.set_field(kind.field_name(), raw.clone());

    for datasource in &datasources {
        if !is_relative(repo, datasource, original) {
            continue;
        }
        let Some(destination) =
            copied_destination(repo, datasource, original, copy, fingerprints, strategy)
        else {
            debug!(reference = %datasource, "no copy-side destination, reference kept");
            continue;
        };
        raw = raw.replace(datasource, &destination.to_string());
        scope.set_field(kind.field_name(), raw.clone());
    }

    scope.commit().map_err(EngineError::Write)
}

/// Locates the copy-side node a relative reference should point at.
fn copied_destination(
    repo: &dyn Repository,
    reference: &str,
    original: &Node,
    copy: &Node,
    fingerprints: &HashMap<NodeId, Node>,
    strategy: RemapStrategy,
) -> Option<NodeId> {
    let target = repo.resolve(reference, &original.locale)?;

    if strategy == RemapStrategy::FingerprintWithPathFallback
        && let Some(copy_node) = fingerprints.get(&target.id)
    {
        return Some(copy_node.id);
    }

    // Mirror the target's position under the copy root.
    let target_path = repo.path(target.id, &original.locale)?;
    let original_path = repo.path(original.id, &original.locale)?;
    let copy_path = repo.path(copy.id, &copy.locale)?;
    let expected = swap_root_prefix(&target_path, &original_path, &copy_path)?;
    repo.node_at_path(&expected, &copy.locale).map(|node| node.id)
}
