//! Table section specifications and their colour defaults.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text colour used when neither the section nor the project sets one.
pub const DEFAULT_TEXT_COLOR: &str = "black";

/// Title banner background used when neither the section nor the project sets one.
pub const DEFAULT_TITLE_COLOR: &str = "lightgray";

/// One block of table rows: the parameters tagged with `section`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub section: String,
    /// Banner text spanning all columns; no banner when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Colour of the row text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background colour of the banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
}

impl SectionSpec {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            title: None,
            color: None,
            title_color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = Some(color.into());
        self
    }

    /// Fill unset colours from `defaults`.
    pub fn resolve<'a>(&'a self, defaults: &'a SectionDefaults) -> ResolvedSection<'a> {
        ResolvedSection {
            section: &self.section,
            title: self.title.as_deref(),
            text_color: self.color.as_deref().unwrap_or(&defaults.text_color),
            title_color: self.title_color.as_deref().unwrap_or(&defaults.title_color),
        }
    }
}

/// Parses `TAG` or `TAG:Title`.
impl FromStr for SectionSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, title) = match s.split_once(':') {
            Some((tag, title)) => (tag.trim(), Some(title.trim())),
            None => (s.trim(), None),
        };
        if tag.is_empty() {
            return Err(format!("empty section tag in '{s}'"));
        }
        let spec = SectionSpec::new(tag);
        Ok(match title {
            Some(title) if !title.is_empty() => spec.with_title(title),
            _ => spec,
        })
    }
}

/// Project-wide fallback colours for sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDefaults {
    pub text_color: String,
    pub title_color: String,
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self {
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            title_color: DEFAULT_TITLE_COLOR.to_string(),
        }
    }
}

/// A section with every styling choice made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSection<'a> {
    pub section: &'a str,
    pub title: Option<&'a str>,
    pub text_color: &'a str,
    pub title_color: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_defaults() {
        let defaults = SectionDefaults::default();
        let spec = SectionSpec::new("network");
        let resolved = spec.resolve(&defaults);
        assert_eq!(resolved.section, "network");
        assert_eq!(resolved.title, None);
        assert_eq!(resolved.text_color, "black");
        assert_eq!(resolved.title_color, "lightgray");
    }

    #[test]
    fn section_overrides_win() {
        let defaults = SectionDefaults {
            text_color: "darkgray".into(),
            title_color: "white".into(),
        };
        let spec = SectionSpec::new("synapse_drvd")
            .with_title("Derived synapse parameters")
            .with_color("blue")
            .with_title_color("yellow");
        let resolved = spec.resolve(&defaults);
        assert_eq!(resolved.title, Some("Derived synapse parameters"));
        assert_eq!(resolved.text_color, "blue");
        assert_eq!(resolved.title_color, "yellow");
    }

    #[test]
    fn partial_override() {
        let defaults = SectionDefaults::default();
        let spec = SectionSpec::new("neuron").with_color("red");
        let resolved = spec.resolve(&defaults);
        assert_eq!(resolved.text_color, "red");
        assert_eq!(resolved.title_color, "lightgray");
    }

    #[test]
    fn parse_section_argument() {
        let spec: SectionSpec = "neuron:Neuron parameters".parse().unwrap();
        assert_eq!(spec.section, "neuron");
        assert_eq!(spec.title.as_deref(), Some("Neuron parameters"));

        let spec: SectionSpec = "network".parse().unwrap();
        assert_eq!(spec.title, None);

        assert!(":Title".parse::<SectionSpec>().is_err());
    }

    #[test]
    fn deserialize_from_toml() {
        let spec: SectionSpec =
            toml::from_str("section = \"input\"\ntitle = \"Input\"\ncolor = \"gray\"\n").unwrap();
        assert_eq!(spec.section, "input");
        assert_eq!(spec.title.as_deref(), Some("Input"));
        assert_eq!(spec.color.as_deref(), Some("gray"));
        assert_eq!(spec.title_color, None);
    }
}
