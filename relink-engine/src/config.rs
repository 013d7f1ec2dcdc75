//! Engine configuration.
//!
//! Constructed once at startup and owned by the engine instance — there is
//! no process-global configured instance. Stopper types are appended one
//! at a time during startup and read-only afterwards.

use relink_types::TypeId;

/// Process-wide remapping configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Rewrite the shared layout field.
    pub remap_shared_layout: bool,
    /// Rewrite the final layout field.
    pub remap_final_layout: bool,
    stopper_type_ids: Vec<TypeId>,
}

impl EngineConfig {
    /// Creates a configuration with no stopper types.
    #[must_use]
    pub fn new(remap_shared_layout: bool, remap_final_layout: bool) -> Self {
        Self {
            remap_shared_layout,
            remap_final_layout,
            stopper_type_ids: Vec::new(),
        }
    }

    /// Parses the two layout flags from the host's string settings.
    /// Anything other than case-insensitive `"true"` disables a flag.
    #[must_use]
    pub fn from_flags(remap_shared_layout: &str, remap_final_layout: &str) -> Self {
        Self::new(
            remap_shared_layout.trim().eq_ignore_ascii_case("true"),
            remap_final_layout.trim().eq_ignore_ascii_case("true"),
        )
    }

    /// Appends a page-module boundary type. Additive; duplicates are
    /// ignored.
    pub fn add_stopper_type(&mut self, ty: TypeId) {
        if !self.stopper_type_ids.contains(&ty) {
            self.stopper_type_ids.push(ty);
        }
    }

    /// Types whose subtrees the walk never descends into.
    #[must_use]
    pub fn stopper_type_ids(&self) -> &[TypeId] {
        &self.stopper_type_ids
    }

    /// Whether `ty` is a configured boundary type.
    #[must_use]
    pub fn is_stopper(&self, ty: TypeId) -> bool {
        self.stopper_type_ids.contains(&ty)
    }
}
