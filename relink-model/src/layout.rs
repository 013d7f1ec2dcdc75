//! Layout definition values.
//!
//! The layout field holds a JSON document produced by the host
//! repository's serializer: devices, each with an ordered list of
//! renderings, each rendering naming an optional datasource and optionally
//! carrying a raw conditional-rendering rule set. The engine parses this
//! value only to extract references; rewriting happens as literal
//! substring replacement on the raw field text, so every unmodified part
//! of the document survives byte-for-byte.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// A parsed layout field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDefinition {
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// One presentation device and the renderings placed on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub renderings: Vec<Rendering>,
}

/// One component placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendering {
    #[serde(default)]
    pub id: Option<String>,
    /// Reference to the node supplying this rendering's content — a node
    /// id string or a repository path.
    #[serde(default)]
    pub datasource: Option<String>,
    /// Raw serialized conditional-rendering rule set, if any. Parsed
    /// separately via [`crate::RuleSet::parse`].
    #[serde(default)]
    pub rules: Option<String>,
}

impl LayoutDefinition {
    /// Parses a raw layout field value.
    ///
    /// Empty or whitespace-only input is [`ModelError::EmptyValue`];
    /// anything else that is not a well-formed layout document is
    /// [`ModelError::Malformed`].
    pub fn parse(raw: &str) -> ModelResult<Self> {
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyValue);
        }
        Ok(serde_json::from_str(raw)?)
    }
}
