//! LaTeX parameter tables.
//!
//! A table is written in three phases on one stream: the header (column
//! template and bold titles), one block per section (optional banner and one
//! row per parameter), and the footer. [`TableWriter`] enforces that order:
//! creating it writes the header, [`TableWriter::finish`] consumes it and
//! writes the footer.

use std::io::Write;

use partex_core::{Catalogue, Parameter};

use crate::column::{FieldSelector, TableLayout};
use crate::error::Result;
use crate::field::{resolve_field, DEFAULT_MACRO_PREFIX};
use crate::fragment::{Fragment, FragmentKind};
use crate::section::{SectionDefaults, SectionSpec};

/// Separator between cells of a row.
const COLUMN_SEPARATOR: &str = "  &  ";

/// Thin space between fields sharing one cell.
const FIELD_SPACE: &str = "\\,";

/// Rendering options shared by all sections of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Prefix for `macro` columns.
    pub macro_prefix: String,
    pub section_defaults: SectionDefaults,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            macro_prefix: DEFAULT_MACRO_PREFIX.to_string(),
            section_defaults: SectionDefaults::default(),
        }
    }
}

/// Streaming writer for one `tabular` environment.
pub struct TableWriter<'a, W: Write> {
    out: W,
    layout: &'a TableLayout,
    options: &'a TableOptions,
}

impl<'a, W: Write> TableWriter<'a, W> {
    /// Write the table header to `out` and return the writer for the body.
    pub fn begin(mut out: W, layout: &'a TableLayout, options: &'a TableOptions) -> Result<Self> {
        writeln!(out, "\\begin{{tabular}}{{{}}}", layout.column_template())?;
        writeln!(out, "\\hline")?;
        let titles: Vec<String> = layout
            .columns()
            .iter()
            .map(|c| format!("\\textbf{{{}}}", c.title))
            .collect();
        writeln!(out, "{}\\\\", titles.join(COLUMN_SEPARATOR))?;
        writeln!(out, "\\hline")?;
        Ok(Self {
            out,
            layout,
            options,
        })
    }

    /// Write the block for one section and return the number of rows written.
    pub fn section(&mut self, catalogue: &Catalogue, spec: &SectionSpec) -> Result<usize> {
        let section = spec.resolve(&self.options.section_defaults);
        let parameters = catalogue.group_by_section(section.section);
        tracing::debug!(section = section.section, rows = parameters.len(), "rendering table section");

        if let Some(title) = section.title {
            let n = self.layout.column_count();
            let color = section.title_color;
            writeln!(
                self.out,
                "\\multicolumn{{{n}}}{{|>{{\\columncolor{{{color}}}}}c|}}{{\\textbf{{{title}}}}}\\\\"
            )?;
            writeln!(self.out, "\\hline")?;
        }

        writeln!(self.out, "\\ignorespacesafterend")?;
        for (key, parameter) in &parameters {
            let row = render_row(
                key,
                parameter,
                self.layout,
                section.text_color,
                &self.options.macro_prefix,
            )?;
            writeln!(self.out, "{row}\\\\")?;
            writeln!(self.out, "\\hline")?;
        }
        Ok(parameters.len())
    }

    /// Write the footer and hand back the underlying stream.
    pub fn finish(mut self) -> Result<W> {
        writeln!(self.out, "\\end{{tabular}}\\\\")?;
        Ok(self.out)
    }
}

/// Render the cells of one parameter row, without the row terminator.
fn render_row(
    key: &str,
    parameter: &Parameter,
    layout: &TableLayout,
    color: &str,
    prefix: &str,
) -> Result<String> {
    let mut cells = Vec::with_capacity(layout.column_count());
    for column in layout.columns() {
        let cell = match &column.field {
            FieldSelector::Single(kind) => {
                let text = resolve_field(key, parameter, kind, prefix)?;
                format!("\\noindent{{\\color{{{color}}}{{}}{text}}}")
            }
            FieldSelector::List(kinds) => {
                let mut parts = Vec::with_capacity(kinds.len());
                for kind in kinds {
                    let text = resolve_field(key, parameter, kind, prefix)?;
                    parts.push(format!("{{\\noindent\\color{{{color}}}{{}}{text}}}"));
                }
                parts.join(FIELD_SPACE)
            }
        };
        cells.push(cell);
    }
    Ok(cells.join(COLUMN_SEPARATOR))
}

/// A complete table: layout, sections in display order and options.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFragment {
    pub layout: TableLayout,
    pub sections: Vec<SectionSpec>,
    pub options: TableOptions,
}

impl TableFragment {
    pub fn new(layout: TableLayout, sections: Vec<SectionSpec>) -> Self {
        Self {
            layout,
            sections,
            options: TableOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }
}

impl Fragment for TableFragment {
    fn kind(&self) -> FragmentKind {
        FragmentKind::Table
    }

    fn write(&self, catalogue: &Catalogue, out: &mut dyn Write) -> Result<()> {
        let mut table = TableWriter::begin(out, &self.layout, &self.options)?;
        for spec in &self.sections {
            table.section(catalogue, spec)?;
        }
        table.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnSpec;
    use crate::error::RenderError;
    use crate::field::FieldKind;

    fn network_model() -> Catalogue {
        let mut pars = Catalogue::new();
        pars.define("N", 10000, "", "size", "network", "$N$");
        pars.define("gamma", 0.8, "", "relative size", "network", "$\\gamma$");
        pars.define("tau_m", 10.0, "ms", "membrane time constant", "neuron", "$\\tau_\\text{m}$");
        pars
    }

    fn value_layout() -> TableLayout {
        TableLayout::new(vec![ColumnSpec::new("Value", FieldKind::Value)], None).unwrap()
    }

    #[test]
    fn header_without_widths() {
        let layout = TableLayout::new(
            vec![
                ColumnSpec::new("Name", FieldKind::Name),
                ColumnSpec::new("Value", FieldKind::Value),
            ],
            None,
        )
        .unwrap();
        let options = TableOptions::default();
        let out = TableWriter::begin(Vec::new(), &layout, &options).unwrap();
        let text = String::from_utf8(out.finish().unwrap()).unwrap();
        assert_eq!(
            text,
            "\\begin{tabular}{|l|l|}\n\
             \\hline\n\
             \\textbf{Name}  &  \\textbf{Value}\\\\\n\
             \\hline\n\
             \\end{tabular}\\\\\n"
        );
    }

    #[test]
    fn header_with_widths() {
        let layout = TableLayout::new(
            vec![
                ColumnSpec::new("Name", FieldKind::Name),
                ColumnSpec::new("Description", FieldKind::Docstring),
            ],
            Some(&[1.0, 4.0][..]),
        )
        .unwrap();
        let text = TableFragment::new(layout, vec![]).render(&Catalogue::new()).unwrap();
        assert!(text.starts_with(
            "\\begin{tabular}{|p{0.200\\linewidth}|p{0.800\\linewidth}|}\n"
        ));
    }

    #[test]
    fn single_value_row() {
        let pars = network_model();
        let options = TableOptions::default();
        let layout = value_layout();
        let mut table = TableWriter::begin(Vec::new(), &layout, &options).unwrap();
        let rows = table.section(&pars.group_by_section("network"), &SectionSpec::new("network")).unwrap();
        assert_eq!(rows, 2);
        let text = String::from_utf8(table.finish().unwrap()).unwrap();
        assert!(text.contains(
            "\\ignorespacesafterend\n\
             \\noindent{\\color{black}{}$10000$}\\\\\n\
             \\hline\n\
             \\noindent{\\color{black}{}$0.8$}\\\\\n\
             \\hline\n"
        ));
        assert!(!text.contains("multicolumn"));
    }

    #[test]
    fn titled_section_banner() {
        let pars = network_model();
        let layout = TableLayout::new(
            vec![
                ColumnSpec::new("Name", FieldKind::Name),
                ColumnSpec::new("Value", vec![FieldKind::Value, FieldKind::Unit]),
            ],
            None,
        )
        .unwrap();
        let sections = vec![SectionSpec::new("neuron")
            .with_title("Neuron")
            .with_color("blue")
            .with_title_color("yellow")];
        let text = TableFragment::new(layout, sections).render(&pars).unwrap();
        assert!(text.contains(
            "\\multicolumn{2}{|>{\\columncolor{yellow}}c|}{\\textbf{Neuron}}\\\\\n\\hline\n"
        ));
        assert!(text.contains(
            "\\noindent{\\color{blue}{}$\\tau_\\text{m}$}  &  \
             {\\noindent\\color{blue}{}$10.0$}\\,{\\noindent\\color{blue}{}ms}\\\\\n"
        ));
        assert!(!text.contains("10000"));
    }

    #[test]
    fn sections_follow_given_order() {
        let pars = network_model();
        let sections = vec![SectionSpec::new("neuron"), SectionSpec::new("network")];
        let text = TableFragment::new(value_layout(), sections).render(&pars).unwrap();
        let tau = text.find("$10.0$").unwrap();
        let n = text.find("$10000$").unwrap();
        assert!(tau < n);
        assert_eq!(text.matches("\\ignorespacesafterend").count(), 2);
    }

    #[test]
    fn empty_section_emits_no_rows() {
        let pars = network_model();
        let sections = vec![SectionSpec::new("plasticity").with_title("Plasticity")];
        let text = TableFragment::new(value_layout(), sections).render(&pars).unwrap();
        assert!(text.contains("{\\textbf{Plasticity}}"));
        assert!(!text.contains("\\noindent"));
    }

    #[test]
    fn key_and_macro_columns_use_identifier() {
        let pars = network_model();
        let layout = TableLayout::new(
            vec![
                ColumnSpec::new("Key", FieldKind::Key),
                ColumnSpec::new("Macro", FieldKind::Macro),
            ],
            None,
        )
        .unwrap();
        let options = TableOptions {
            macro_prefix: "Q".into(),
            ..TableOptions::default()
        };
        let text = TableFragment::new(layout, vec![SectionSpec::new("neuron")])
            .with_options(options)
            .render(&pars)
            .unwrap();
        assert!(text.contains(
            "\\noindent{\\color{black}{}\\verb+tau_m+}  &  \\noindent{\\color{black}{}\\verb+\\Qtaum+}\\\\"
        ));
    }

    #[test]
    fn project_defaults_apply() {
        let pars = network_model();
        let options = TableOptions {
            section_defaults: SectionDefaults {
                text_color: "darkgray".into(),
                title_color: "white".into(),
            },
            ..TableOptions::default()
        };
        let text = TableFragment::new(value_layout(), vec![SectionSpec::new("network").with_title("Net")])
            .with_options(options)
            .render(&pars)
            .unwrap();
        assert!(text.contains("\\columncolor{white}"));
        assert!(text.contains("\\color{darkgray}"));
    }

    #[test]
    fn missing_field_aborts_table() {
        let mut pars = Catalogue::new();
        pars.define("seed", 1234, "", "RNG seed", "simulation", "$\\xi$");
        let mut dt = Parameter::with_value(0.125);
        dt.section = Some("simulation".into());
        pars.insert("dt", dt);
        let layout = TableLayout::new(vec![ColumnSpec::new("Unit", FieldKind::Unit)], None).unwrap();
        let err = TableFragment::new(layout, vec![SectionSpec::new("simulation")])
            .render(&pars)
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingField { ref key, .. } if key == "dt"));
    }
}
