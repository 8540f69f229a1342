//! Table column specifications and width normalization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::field::FieldKind;

/// Which field(s) a column shows.
///
/// Written as either a single name (`"value"`) or a list of names
/// (`["value", "unit"]`) whose formatted texts share one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSelector {
    Single(FieldKind),
    List(Vec<FieldKind>),
}

impl FieldSelector {
    /// The selected field kinds, in cell order.
    pub fn kinds(&self) -> &[FieldKind] {
        match self {
            FieldSelector::Single(kind) => std::slice::from_ref(kind),
            FieldSelector::List(kinds) => kinds,
        }
    }
}

impl From<FieldKind> for FieldSelector {
    fn from(kind: FieldKind) -> Self {
        FieldSelector::Single(kind)
    }
}

impl From<Vec<FieldKind>> for FieldSelector {
    fn from(kinds: Vec<FieldKind>) -> Self {
        FieldSelector::List(kinds)
    }
}

/// One table column: header title plus field selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub title: String,
    pub field: FieldSelector,
}

impl ColumnSpec {
    pub fn new(title: impl Into<String>, field: impl Into<FieldSelector>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
        }
    }
}

/// Parses `TITLE=field` or `TITLE=field+field+…`.
impl FromStr for ColumnSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (title, fields) = s
            .split_once('=')
            .ok_or_else(|| format!("expected TITLE=FIELD, got '{s}'"))?;
        let mut kinds: Vec<FieldKind> = fields
            .split('+')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(FieldKind::parse)
            .collect();
        let field = match kinds.len() {
            0 => return Err(format!("column '{title}' selects no field")),
            1 => FieldSelector::Single(kinds.remove(0)),
            _ => FieldSelector::List(kinds),
        };
        Ok(ColumnSpec::new(title.trim(), field))
    }
}

/// Scale relative column widths so they sum to 1.
///
/// Every weight must be positive and finite.
pub fn normalize_widths(widths: &[f64]) -> Result<Vec<f64>> {
    if let Some((index, &value)) = widths
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(RenderError::InvalidColumnWidth { index, value });
    }
    let total: f64 = widths.iter().sum();
    Ok(widths.iter().map(|w| w / total).collect())
}

/// Validated column layout of a table.
///
/// Widths, when present, always match the column count and are normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    columns: Vec<ColumnSpec>,
    widths: Option<Vec<f64>>,
}

impl TableLayout {
    /// Build a layout, checking that `widths` (if any) has one entry per column.
    pub fn new(columns: Vec<ColumnSpec>, widths: Option<&[f64]>) -> Result<Self> {
        let widths = match widths {
            Some(w) if w.len() != columns.len() => {
                return Err(RenderError::ColumnWidthMismatch {
                    widths: w.len(),
                    columns: columns.len(),
                });
            }
            Some(w) => Some(normalize_widths(w)?),
            None => None,
        };
        Ok(Self { columns, widths })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Normalized widths, if the layout constrains them.
    pub fn widths(&self) -> Option<&[f64]> {
        self.widths.as_deref()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The `tabular` column template, e.g. `|l|l|` or `|p{0.250\linewidth}|…`.
    pub fn column_template(&self) -> String {
        let mut template = String::from("|");
        match &self.widths {
            Some(widths) => {
                for w in widths {
                    template.push_str(&format!("p{{{w:.3}\\linewidth}}|"));
                }
            }
            None => template.push_str(&"l|".repeat(self.columns.len())),
        }
        template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn columns(n: usize) -> Vec<ColumnSpec> {
        (0..n)
            .map(|i| ColumnSpec::new(format!("C{i}"), FieldKind::Value))
            .collect()
    }

    #[test]
    fn selector_from_toml_forms() {
        #[derive(Deserialize)]
        struct Doc {
            columns: Vec<ColumnSpec>,
        }
        let doc: Doc = toml::from_str(
            r#"
columns = [
  { title = "Name", field = "name" },
  { title = "Value", field = ["value", "unit"] },
]
"#,
        )
        .unwrap();
        assert_eq!(doc.columns[0].field, FieldSelector::Single(FieldKind::Name));
        assert_eq!(
            doc.columns[1].field.kinds(),
            &[FieldKind::Value, FieldKind::Unit]
        );
    }

    #[test]
    fn parse_column_argument() {
        let col: ColumnSpec = "Value=value+unit".parse().unwrap();
        assert_eq!(col.title, "Value");
        assert_eq!(col.field.kinds(), &[FieldKind::Value, FieldKind::Unit]);

        let col: ColumnSpec = "Macro=macro".parse().unwrap();
        assert_eq!(col.field, FieldSelector::Single(FieldKind::Macro));

        assert!("novalue".parse::<ColumnSpec>().is_err());
        assert!("Empty=".parse::<ColumnSpec>().is_err());
    }

    #[test]
    fn widths_sum_to_one() {
        for input in [vec![1.0, 1.0, 1.0, 4.0], vec![0.3, 7.0], vec![2.5], vec![1e-3, 1e3, 42.0]] {
            let norm = normalize_widths(&input).unwrap();
            assert_eq!(norm.len(), input.len());
            assert_relative_eq!(norm.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn widths_keep_proportions() {
        let norm = normalize_widths(&[1.0, 3.0]).unwrap();
        assert_relative_eq!(norm[0], 0.25);
        assert_relative_eq!(norm[1], 0.75);
    }

    #[test]
    fn reject_non_positive_widths() {
        let err = normalize_widths(&[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidColumnWidth { index: 1, .. }));
        assert!(normalize_widths(&[-1.0, 2.0]).is_err());
        assert!(normalize_widths(&[f64::NAN]).is_err());
    }

    #[test]
    fn width_count_mismatch_is_configuration_error() {
        for (n_cols, n_widths) in [(3, 2), (2, 3), (1, 0)] {
            let widths = vec![1.0; n_widths];
            let err = TableLayout::new(columns(n_cols), Some(widths.as_slice())).unwrap_err();
            assert!(err.is_configuration_error());
            assert!(matches!(
                err,
                RenderError::ColumnWidthMismatch { widths, columns } if widths == n_widths && columns == n_cols
            ));
        }
    }

    #[test]
    fn template_without_widths() {
        let layout = TableLayout::new(columns(3), None).unwrap();
        assert_eq!(layout.column_template(), "|l|l|l|");
        assert!(layout.widths().is_none());
    }

    #[test]
    fn template_with_widths() {
        let layout = TableLayout::new(columns(2), Some(&[1.0, 3.0][..])).unwrap();
        assert_eq!(
            layout.column_template(),
            "|p{0.250\\linewidth}|p{0.750\\linewidth}|"
        );
    }
}
