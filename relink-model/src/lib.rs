//! Content model and repository collaborator for the Relink engine.
//!
//! This crate defines what the engine sees of the host content repository:
//!
//! - [`Node`] — one repository entry in one locale
//! - [`LayoutKind`] — which of the two layout fields an operation targets
//! - [`LayoutDefinition`] / [`RuleSet`] — the parsed layout field value and
//!   its conditional-rendering rule sets
//! - [`Repository`] — the synchronous collaborator trait every read and the
//!   single field write go through
//! - [`EditScope`] — the scoped field write, guaranteed to flush on every
//!   exit path
//! - [`MemoryRepository`] — an in-memory reference implementation for tests
//!   and embedders
//!
//! The repository, not the engine, owns nodes: parent/child relationships
//! are id references resolved through [`Repository`], never owning
//! pointers.

mod error;
mod layout;
mod memory;
mod node;
mod repository;
mod rules;

pub use error::{ModelError, ModelResult, RepoError, RepoResult};
pub use layout::{Device, LayoutDefinition, Rendering};
pub use memory::MemoryRepository;
pub use node::{LayoutKind, Node, SYSTEM_FIELD_PREFIX};
pub use repository::{EditScope, Repository};
pub use rules::{Rule, RuleAction, RuleSet, SET_DATA_SOURCE_ACTION};
