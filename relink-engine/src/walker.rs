//! Pre-order subtree traversal with type filtering and boundary pruning.

use relink_model::{Node, Repository};
use relink_types::TypeId;

/// Collects the descendants of `root`, depth-first pre-order. The root
/// itself is not included.
///
/// A visited node is included when `filter_type` is unset or its type
/// equals or transitively derives from it. Recursion stops at nodes whose
/// own type is in `stoppers`: such a node may still be included, its
/// subtree is pruned. A `None` root yields an empty result; unresolvable
/// child links are skipped by the repository, never an error.
///
/// Traversal order is deterministic given the repository's child ordering
/// and is consumed only as an iteration order.
pub fn descendants(
    repo: &dyn Repository,
    root: Option<&Node>,
    filter_type: Option<TypeId>,
    stoppers: &[TypeId],
) -> Vec<Node> {
    let mut result = Vec::new();
    if let Some(root) = root {
        collect(repo, root, filter_type, stoppers, &mut result);
    }
    result
}

fn collect(
    repo: &dyn Repository,
    node: &Node,
    filter_type: Option<TypeId>,
    stoppers: &[TypeId],
    out: &mut Vec<Node>,
) {
    for child in repo.children(node.id, &node.locale) {
        let included = match filter_type {
            None => true,
            Some(base) => repo.type_derives_from(child.type_id, base),
        };
        let descend = !stoppers.contains(&child.type_id);

        if included {
            out.push(child.clone());
        }
        if descend {
            collect(repo, &child, filter_type, stoppers, out);
        }
    }
}
