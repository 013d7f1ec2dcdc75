//! Content fingerprints.
//!
//! A fingerprint digests a node's stable descriptive fields so that "the
//! same node" can be recognized across a copy boundary when its path has
//! changed. Equal digests are treated as equal content — a matching
//! heuristic, not an identity guarantee.

use md5::{Digest, Md5};
use relink_model::Node;

/// Timestamp rendering used in the digest input (second precision).
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Computes the MD5 content fingerprint of a node, as lowercase hex.
///
/// Digest input, in order: name, type id, version number, sort order,
/// creation time at second precision, then every non-system field value in
/// ascending field-name order.
#[must_use]
pub fn content_fingerprint(node: &Node) -> String {
    let mut input = String::with_capacity(128);
    input.push_str(&node.name);
    input.push_str(&node.type_id.to_string());
    input.push_str(&node.version.to_string());
    input.push_str(&node.sort_order.to_string());
    input.push_str(&node.created_at.format(CREATED_AT_FORMAT).to_string());

    for (_, value) in node.content_fields() {
        input.push_str(value);
    }

    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
