//! Relative-vs-external classification of datasource references.

use relink_model::{Node, Repository};

/// True when `reference` resolves, in the original's locale, to a node
/// whose full path lies inside or at the original subtree root.
///
/// Unresolvable references are external by definition — absolute
/// references out of the subtree are left untouched. The result is a pure
/// function of repository state.
pub fn is_relative(repo: &dyn Repository, reference: &str, original: &Node) -> bool {
    let Some(target) = repo.resolve(reference, &original.locale) else {
        return false;
    };
    let target_path = repo.path(target.id, &original.locale);
    let original_path = repo.path(original.id, &original.locale);
    match (target_path, original_path) {
        (Some(target_path), Some(original_path)) => target_path.starts_with(&original_path),
        _ => false,
    }
}
