//! The remap orchestrator.

use crate::config::EngineConfig;
use crate::correspondence::{build_fingerprint_map, build_path_map};
use crate::rewrite::{remap_field, RemapStrategy};
use relink_model::{LayoutKind, Node, Repository};
use std::collections::HashMap;
use tracing::debug;

/// The datasource remapping engine.
///
/// Explicitly constructed with its configuration and passed by reference —
/// one instance per process, no hidden global state. All entry points are
/// best-effort: a failure anywhere is logged and leaves the affected field
/// unmodified, and the caller never observes an error.
pub struct RelinkEngine {
    config: EngineConfig,
    strategy: RemapStrategy,
}

impl RelinkEngine {
    /// Creates an engine with the default
    /// [`RemapStrategy::FingerprintWithPathFallback`] strategy.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            strategy: RemapStrategy::default(),
        }
    }

    /// Overrides the destination-matching strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: RemapStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Remaps every relative datasource in `copy`'s subtree to its copied
    /// counterpart: first the root pair itself, then every structurally
    /// corresponding descendant pair, each across all repository locales
    /// and each enabled layout field.
    pub fn remap(&self, repo: &dyn Repository, original: &Node, copy: &Node) {
        debug!(original = %original.id, copy = %copy.id, "remapping relative datasources");

        self.remap_pair(repo, original, copy);

        let pairs = build_path_map(repo, original, copy, self.config.stopper_type_ids());
        for (child_original, child_copy) in &pairs {
            self.remap_pair(repo, child_original, child_copy);
        }
    }

    /// Remaps one `(original, copy)` pair across every locale and every
    /// enabled layout field. A locale where either side is missing
    /// contributes nothing; one field's failure never stops the rest.
    fn remap_pair(&self, repo: &dyn Repository, original: &Node, copy: &Node) {
        for locale in repo.locales() {
            let original_loc = repo.node(original.id, &locale);
            let copy_loc = repo.node(copy.id, &locale);
            let (Some(original_loc), Some(copy_loc)) = (original_loc, copy_loc) else {
                continue;
            };

            // Built once per pair per locale; PathOnly never consults it.
            let fingerprints = match self.strategy {
                RemapStrategy::FingerprintWithPathFallback => {
                    build_fingerprint_map(repo, &original_loc, &copy_loc)
                }
                RemapStrategy::PathOnly => HashMap::new(),
            };

            if self.config.remap_final_layout {
                remap_field(
                    repo,
                    &original_loc,
                    &copy_loc,
                    LayoutKind::Final,
                    &fingerprints,
                    self.strategy,
                );
            }
            if self.config.remap_shared_layout {
                remap_field(
                    repo,
                    &original_loc,
                    &copy_loc,
                    LayoutKind::Shared,
                    &fingerprints,
                    self.strategy,
                );
            }
        }
    }
}
