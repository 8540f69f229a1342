//! A single parameter record.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::ParamValue;

/// One entry of a parameter catalogue.
///
/// Only `value` is mandatory when reading input. The remaining attributes may
/// be absent; the renderers report a missing attribute when a table column or
/// macro definition needs it. Attributes beyond the standard five are kept in
/// `extra` so tables can select them by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Display name as LaTeX markup, e.g. `$\tau_\text{m}$`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: ParamValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Textual description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    /// Grouping tag, e.g. `network` or `neuron`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Parameter {
    /// Create a fully specified parameter.
    pub fn new(
        value: impl Into<ParamValue>,
        unit: impl Into<String>,
        docstring: impl Into<String>,
        section: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            unit: Some(unit.into()),
            docstring: Some(docstring.into()),
            section: Some(section.into()),
            extra: IndexMap::new(),
        }
    }

    /// Create a parameter carrying only a value.
    pub fn with_value(value: impl Into<ParamValue>) -> Self {
        Self {
            name: None,
            value: value.into(),
            unit: None,
            docstring: None,
            section: None,
            extra: IndexMap::new(),
        }
    }

    /// Attach an additional named attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether this parameter is tagged with `section`.
    pub fn in_section(&self, section: &str) -> bool {
        self.section.as_deref() == Some(section)
    }
}
