//! Conditional-rendering rule sets.
//!
//! A rendering may carry a rule set whose actions override the rendering's
//! datasource at render time. The extractor must chase those references
//! too, or a copied page would keep conditionally rendering content from
//! the original subtree.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// Action name that assigns a datasource.
pub const SET_DATA_SOURCE_ACTION: &str = "SetDataSource";

/// A parsed conditional-rendering rule set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// One rule: a condition (opaque to the engine) and its actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    #[serde(default)]
    pub actions: Vec<RuleAction>,
}

/// One rule action. Only [`SET_DATA_SOURCE_ACTION`] actions are meaningful
/// to the engine; every other action kind is carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleAction {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub data_source: Option<String>,
}

impl RuleSet {
    /// Parses a raw rule-set value, with the same failure modes as
    /// [`crate::LayoutDefinition::parse`].
    pub fn parse(raw: &str) -> ModelResult<Self> {
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyValue);
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Datasources assigned by `SetDataSource` actions, in rule order.
    pub fn datasource_actions(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|rule| rule.actions.iter())
            .filter(|action| action.action == SET_DATA_SOURCE_ACTION)
            .filter_map(|action| action.data_source.as_deref())
    }
}
