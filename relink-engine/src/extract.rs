//! Datasource extraction from layout definitions.

use crate::error::EngineResult;
use relink_model::{LayoutDefinition, LayoutKind, Node, Repository, RuleSet};
use std::collections::HashSet;
use tracing::debug;

/// Extracts every datasource reference in one of `node`'s layout fields:
/// each rendering's own datasource plus every `SetDataSource` rule
/// action's target.
///
/// Fails soft: a missing, empty or malformed field yields an empty list.
/// Blank entries are dropped and duplicates collapsed (first occurrence
/// kept); callers must not rely on the order.
pub fn extract_datasources(repo: &dyn Repository, node: &Node, kind: LayoutKind) -> Vec<String> {
    let Some(raw) = repo.read_field(node.id, &node.locale, kind.field_name()) else {
        return Vec::new();
    };
    match try_extract(&raw) {
        Ok(datasources) => datasources,
        Err(err) => {
            debug!(node = %node.id, field = kind.field_name(), "layout not extractable: {err}");
            Vec::new()
        }
    }
}

fn try_extract(raw: &str) -> EngineResult<Vec<String>> {
    let layout = LayoutDefinition::parse(raw)?;

    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for device in &layout.devices {
        for rendering in &device.renderings {
            if let Some(datasource) = &rendering.datasource {
                push_datasource(&mut seen, &mut result, datasource);
            }
            if let Some(rules_raw) = &rendering.rules {
                // Rule text that fails to parse contributes nothing, but
                // the rest of the layout is still harvested.
                if let Ok(rules) = RuleSet::parse(rules_raw) {
                    for datasource in rules.datasource_actions() {
                        push_datasource(&mut seen, &mut result, datasource);
                    }
                }
            }
        }
    }

    Ok(result)
}

/// Keeps the token exactly as written — it must match the raw field text
/// for the later substring replacement.
fn push_datasource(seen: &mut HashSet<String>, out: &mut Vec<String>, datasource: &str) {
    if datasource.trim().is_empty() {
        return;
    }
    if seen.insert(datasource.to_string()) {
        out.push(datasource.to_string());
    }
}
