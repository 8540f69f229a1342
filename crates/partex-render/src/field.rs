//! Formatting of single parameter fields as LaTeX.

use std::borrow::Cow;
use std::fmt;

use partex_core::{ParamValue, Parameter};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Default prefix prepended to macro names (`N` becomes `\PN`).
pub const DEFAULT_MACRO_PREFIX: &str = "P";

/// Delimiters tried, in order, for `\verb` spans.
const VERB_DELIMITERS: [char; 5] = ['+', '|', '!', '@', '='];

/// The role a value plays inside a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Value,
    Unit,
    Docstring,
    Name,
    Section,
    /// The parameter identifier, verbatim.
    Key,
    /// The macro invocation derived from the identifier, verbatim.
    Macro,
    /// Any additional attribute of the parameter record.
    Custom(String),
}

impl FieldKind {
    /// Parse a field kind; unknown names select a custom attribute.
    pub fn parse(s: &str) -> Self {
        match s {
            "value" => FieldKind::Value,
            "unit" => FieldKind::Unit,
            "docstring" => FieldKind::Docstring,
            "name" => FieldKind::Name,
            "section" => FieldKind::Section,
            "key" => FieldKind::Key,
            "macro" => FieldKind::Macro,
            other => FieldKind::Custom(other.to_string()),
        }
    }

    /// The attribute name this kind selects.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Value => "value",
            FieldKind::Unit => "unit",
            FieldKind::Docstring => "docstring",
            FieldKind::Name => "name",
            FieldKind::Section => "section",
            FieldKind::Key => "key",
            FieldKind::Macro => "macro",
            FieldKind::Custom(name) => name,
        }
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        FieldKind::parse(&s)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format `value` according to `kind`.
///
/// - numeric `value` fields are wrapped in `$…$`
/// - `key` fields are typeset verbatim
/// - `macro` fields become a verbatim `\<prefix><value>` with underscores removed
/// - everything else is passed through untouched
///
/// No escaping of LaTeX special characters takes place.
pub fn format_field(value: &ParamValue, kind: &FieldKind, prefix: &str) -> String {
    match (kind, value) {
        (FieldKind::Value, ParamValue::Number(n)) => format!("${n}$"),
        (FieldKind::Key, v) => verbatim(&v.to_string()),
        (FieldKind::Macro, v) => verbatim(&format!("\\{}", macro_name(prefix, &v.to_string()))),
        (_, v) => v.to_string(),
    }
}

/// Look up the attribute selected by `kind` on `parameter` and format it.
///
/// `key` and `macro` are derived from the identifier rather than from the
/// record. A missing attribute is an error; nothing is substituted.
pub fn resolve_field(
    key: &str,
    parameter: &Parameter,
    kind: &FieldKind,
    prefix: &str,
) -> Result<String> {
    let value: Cow<'_, ParamValue> = match kind {
        FieldKind::Value => Cow::Borrowed(&parameter.value),
        FieldKind::Key | FieldKind::Macro => Cow::Owned(ParamValue::from(key)),
        FieldKind::Unit => text_attribute(key, kind, parameter.unit.as_deref())?,
        FieldKind::Docstring => text_attribute(key, kind, parameter.docstring.as_deref())?,
        FieldKind::Name => text_attribute(key, kind, parameter.name.as_deref())?,
        FieldKind::Section => text_attribute(key, kind, parameter.section.as_deref())?,
        FieldKind::Custom(name) => match parameter.extra.get(name) {
            Some(serde_json::Value::String(s)) => Cow::Owned(ParamValue::from(s.as_str())),
            Some(serde_json::Value::Number(n)) => Cow::Owned(ParamValue::Number(n.clone())),
            Some(other) => Cow::Owned(ParamValue::Text(other.to_string())),
            None => return Err(missing(key, kind)),
        },
    };
    Ok(format_field(&value, kind, prefix))
}

fn text_attribute<'a>(
    key: &str,
    kind: &FieldKind,
    attribute: Option<&str>,
) -> Result<Cow<'a, ParamValue>> {
    attribute
        .map(|s| Cow::Owned(ParamValue::from(s)))
        .ok_or_else(|| missing(key, kind))
}

fn missing(key: &str, kind: &FieldKind) -> RenderError {
    RenderError::MissingField {
        key: key.to_string(),
        field: kind.to_string(),
    }
}

/// Macro name for identifier `key`: `prefix` + `key` with every `_` removed.
pub fn macro_name(prefix: &str, key: &str) -> String {
    format!("{prefix}{key}").replace('_', "")
}

/// Wrap `text` in a `\verb` span, choosing a delimiter absent from `text`.
pub fn verbatim(text: &str) -> String {
    let delim = VERB_DELIMITERS
        .iter()
        .copied()
        .find(|d| !text.contains(*d))
        .unwrap_or(VERB_DELIMITERS[0]);
    format!("\\verb{delim}{text}{delim}")
}
