//! Copy-trigger entry points — thin plumbing between the host's copy
//! notifications and the engine.
//!
//! Event subscription wiring itself belongs to the host; these functions
//! are what its handlers call once a copy has happened.

use crate::engine::RelinkEngine;
use relink_model::{Node, Repository};
use relink_types::{Locale, NodeId};
use thiserror::Error;

/// Operator-facing failures of the pre-remap resolution step. Once the
/// remap itself starts, nothing is reported any more.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The original node was not found.
    #[error("node not found: {0}")]
    OriginalNotFound(NodeId),

    /// The original node has no parent to locate the copy under.
    #[error("node has no parent: {0}")]
    NoParent(NodeId),

    /// No node exists at the expected copy path.
    #[error("copy not found at '{0}'")]
    CopyNotFound(String),
}

/// Post-copy notification: the host reports a finished copy as an
/// `(original, copy)` pair.
pub fn on_node_copied(
    engine: &RelinkEngine,
    repo: &dyn Repository,
    original: &Node,
    copy: &Node,
) {
    engine.remap(repo, original, copy);
}

/// UI-duplicate path: the host supplies `(id, locale, copy_name)` and the
/// pair must be resolved first. A duplicate lands next to its original,
/// so the copy is expected at `parent_path/copy_name`.
///
/// Resolution failures abort before any remap work and surface an
/// operator-facing error; the remap itself stays best-effort.
pub fn remap_duplicate(
    engine: &RelinkEngine,
    repo: &dyn Repository,
    id: NodeId,
    locale: &Locale,
    copy_name: &str,
) -> Result<(), TriggerError> {
    let original = repo
        .node(id, locale)
        .ok_or(TriggerError::OriginalNotFound(id))?;
    let parent_id = original.parent_id.ok_or(TriggerError::NoParent(id))?;
    let parent_path = repo
        .path(parent_id, locale)
        .ok_or(TriggerError::NoParent(id))?;

    let copy_path = format!("{parent_path}/{copy_name}");
    let copy = repo
        .node_at_path(&copy_path, locale)
        .ok_or(TriggerError::CopyNotFound(copy_path))?;

    engine.remap(repo, &original, &copy);
    Ok(())
}
