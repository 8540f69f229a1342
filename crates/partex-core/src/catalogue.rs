//! Insertion-ordered parameter catalogue.
//!
//! The catalogue preserves the order in which parameters were defined; tables
//! and macro files are emitted in that order. Identifiers are unique: a second
//! definition of the same identifier is discarded with a warning, whether it
//! comes from [`Catalogue::insert`] or from a duplicate key in a JSON file.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CatalogueError, Result};
use crate::parameter::Parameter;
use crate::value::ParamValue;

/// An ordered map from parameter identifier to [`Parameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogue {
    entries: IndexMap<String, Parameter>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Identifiers in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(identifier, parameter)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Add a parameter unless its identifier is already defined.
    ///
    /// Returns `false` (and logs a warning) when the identifier exists; the
    /// existing entry is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, parameter: Parameter) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            tracing::warn!(key = %key, "parameter already defined, entry ignored");
            return false;
        }
        self.entries.insert(key, parameter);
        true
    }

    /// Define a fully specified parameter.
    ///
    /// Argument order follows how parameter catalogues are usually written
    /// out by hand: identifier, value, unit, description, section, display name.
    pub fn define(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
        unit: &str,
        docstring: &str,
        section: &str,
        name: &str,
    ) -> bool {
        self.insert(key, Parameter::new(value, unit, docstring, section, name))
    }

    /// The sub-catalogue of parameters tagged with `section`, in original order.
    ///
    /// Returns an empty catalogue when nothing matches.
    pub fn group_by_section(&self, section: &str) -> Catalogue {
        let entries = self
            .entries
            .iter()
            .filter(|(_, p)| p.in_section(section))
            .map(|(k, p)| (k.clone(), p.clone()))
            .collect();
        Catalogue { entries }
    }

    /// Distinct section tags in order of first appearance.
    pub fn section_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for section in self.entries.values().filter_map(|p| p.section.as_deref()) {
            if !tags.contains(&section) {
                tags.push(section);
            }
        }
        tags
    }

    /// Parse a catalogue from JSON text (one object per identifier).
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a catalogue from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), parameters = catalogue.len(), "loaded catalogue");
        Ok(catalogue)
    }

    /// Serialize to pretty JSON with four-space indentation.
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the catalogue to a JSON file, replacing any existing content.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<(String, Parameter)> for Catalogue {
    fn from_iter<I: IntoIterator<Item = (String, Parameter)>>(iter: I) -> Self {
        let mut catalogue = Catalogue::new();
        for (key, parameter) in iter {
            catalogue.insert(key, parameter);
        }
        catalogue
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = (&'a String, &'a Parameter);
    type IntoIter = indexmap::map::Iter<'a, String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Catalogue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, parameter) in &self.entries {
            map.serialize_entry(key, parameter)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalogue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogueVisitor;

        impl<'de> Visitor<'de> for CatalogueVisitor {
            type Value = Catalogue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of parameter identifiers to parameter records")
            }

            fn visit_map<M>(self, mut access: M) -> std::result::Result<Catalogue, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalogue = Catalogue::new();
                while let Some((key, parameter)) = access.next_entry::<String, Parameter>()? {
                    catalogue.insert(key, parameter);
                }
                Ok(catalogue)
            }
        }

        deserializer.deserialize_map(CatalogueVisitor)
    }
}
