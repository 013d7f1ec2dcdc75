//! Correspondence maps between an original subtree and its copy.
//!
//! Two independent strategies serve two reuse scenarios. The structural
//! map pairs nodes by position: the same path suffix under the copied
//! root. The fingerprint map pairs nodes by content, which is what
//! resolves a reference whose target was copied along with the page and
//! now lives at a different path.

use crate::fingerprint::content_fingerprint;
use crate::walker::descendants;
use relink_model::{Node, Repository};
use relink_types::{NodeId, TypeId};
use std::collections::HashMap;
use tracing::warn;

/// Swaps the original root path prefix of `path` for the copy root path.
/// `None` when `path` does not live under the original root.
pub(crate) fn swap_root_prefix(
    path: &str,
    original_root: &str,
    copy_root: &str,
) -> Option<String> {
    path.strip_prefix(original_root)
        .map(|rest| format!("{copy_root}{rest}"))
}

/// Builds the structural map: original descendant → copy descendant at
/// the mirrored path.
///
/// Both subtrees are walked respecting `stoppers`, and nodes whose own
/// type is a stopper type are excluded from the map. When two copy
/// descendants share a path the first enumerated one wins. Unmatched
/// originals are simply absent; a root whose path does not resolve yields
/// an empty map and a log line, never an error.
pub fn build_path_map(
    repo: &dyn Repository,
    original: &Node,
    copy: &Node,
    stoppers: &[TypeId],
) -> Vec<(Node, Node)> {
    let original_path = repo.path(original.id, &original.locale);
    let copy_path = repo.path(copy.id, &copy.locale);
    let (Some(original_path), Some(copy_path)) = (original_path, copy_path) else {
        warn!(
            original = %original.id,
            copy = %copy.id,
            "skipping structural map: a root path did not resolve"
        );
        return Vec::new();
    };

    let boundary = |node: &Node| stoppers.contains(&node.type_id);

    let mut copy_by_path: HashMap<String, Node> = HashMap::new();
    for child in descendants(repo, Some(copy), None, stoppers) {
        if boundary(&child) {
            continue;
        }
        if let Some(path) = repo.path(child.id, &child.locale) {
            copy_by_path.entry(path).or_insert(child);
        }
    }

    let mut map = Vec::new();
    for child in descendants(repo, Some(original), None, stoppers) {
        if boundary(&child) {
            continue;
        }
        let Some(child_path) = repo.path(child.id, &child.locale) else {
            continue;
        };
        let Some(expected) = swap_root_prefix(&child_path, &original_path, &copy_path) else {
            continue;
        };
        if let Some(copy_child) = copy_by_path.get(&expected) {
            map.push((child, copy_child.clone()));
        }
    }
    map
}

/// Builds the content-fingerprint map: original node id → copy node with
/// the same fingerprint.
///
/// Both subtrees are walked unfiltered, ignoring stopper boundaries. On a
/// digest collision among copy descendants the earliest-enumerated node
/// wins and later ones are dropped without remark — preserved historical
/// behavior; the tie-break gap is documented in DESIGN.md.
pub fn build_fingerprint_map(
    repo: &dyn Repository,
    original: &Node,
    copy: &Node,
) -> HashMap<NodeId, Node> {
    let mut copy_by_digest: HashMap<String, Node> = HashMap::new();
    for child in descendants(repo, Some(copy), None, &[]) {
        copy_by_digest
            .entry(content_fingerprint(&child))
            .or_insert(child);
    }

    let mut map: HashMap<NodeId, Node> = HashMap::new();
    for child in descendants(repo, Some(original), None, &[]) {
        let digest = content_fingerprint(&child);
        if let Some(copy_child) = copy_by_digest.get(&digest) {
            map.entry(child.id).or_insert_with(|| copy_child.clone());
        }
    }
    map
}
