//! Core identifier types for the Relink engine.
//!
//! - [`NodeId`] — unique identifier of a repository node
//! - [`TypeId`] — identifier of a node type (template)
//! - [`Locale`] — language tag for multi-locale content trees
//!
//! These types carry no domain logic; they exist so node references, type
//! references and locales cannot be mixed up at call sites.

mod ids;
mod locale;

pub use ids::{NodeId, TypeId};
pub use locale::Locale;
