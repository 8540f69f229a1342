//! `partex.toml` project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use partex_render::{
    ColumnSpec, SectionDefaults, SectionSpec, TableFragment, TableLayout, TableOptions,
    DEFAULT_MACRO_PREFIX,
};
use serde::{Deserialize, Serialize};

/// File name searched for when no configuration path is given.
pub const CONFIG_FILE: &str = "partex.toml";

/// The top-level configuration of a documentation project.
///
/// Relative paths are resolved against the directory holding the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// JSON parameter catalogue (required).
    pub params_file: PathBuf,
    /// Prefix of generated macro names.
    #[serde(default = "default_prefix")]
    pub macros_prefix: String,
    /// Row text colour for sections that set none.
    #[serde(default = "default_text_color")]
    pub section_text_color: String,
    /// Banner background for sections that set none.
    #[serde(default = "default_title_color")]
    pub section_title_color: String,
    /// Macro definitions output.
    #[serde(default)]
    pub macros: Option<MacrosConfig>,
    /// Tables to generate.
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

fn default_prefix() -> String {
    DEFAULT_MACRO_PREFIX.to_string()
}

fn default_text_color() -> String {
    SectionDefaults::default().text_color
}

fn default_title_color() -> String {
    SectionDefaults::default().title_color
}

/// Macro definitions section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacrosConfig {
    pub output: PathBuf,
}

/// One `[[tables]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub output: PathBuf,
    pub columns: Vec<ColumnSpec>,
    /// Relative column widths, one per column.
    #[serde(default)]
    pub column_widths: Option<Vec<f64>>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
}

impl ProjectConfig {
    /// Search upward from `start_dir` for a `partex.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn section_defaults(&self) -> SectionDefaults {
        SectionDefaults {
            text_color: self.section_text_color.clone(),
            title_color: self.section_title_color.clone(),
        }
    }

    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            macro_prefix: self.macros_prefix.clone(),
            section_defaults: self.section_defaults(),
        }
    }

    /// Build the renderer for one configured table.
    pub fn table_fragment(&self, table: &TableConfig) -> Result<TableFragment> {
        let layout = TableLayout::new(table.columns.clone(), table.column_widths.as_deref())
            .with_context(|| format!("table {}", table.output.display()))?;
        Ok(TableFragment::new(layout, table.sections.clone()).with_options(self.table_options()))
    }

    /// Generate the default template for `partex init`.
    pub fn template(params_file: &str) -> String {
        format!(
            r#"params_file = "{params_file}"
macros_prefix = "P"
section_text_color = "black"
section_title_color = "lightgray"

[macros]
output = "macros.tex"

[[tables]]
output = "parameter_table.tex"
column_widths = [1.0, 1.0, 1.0, 4.0]
columns = [
  {{ title = "Name", field = "name" }},
  {{ title = "Value", field = "value" }},
  {{ title = "Unit", field = "unit" }},
  {{ title = "Description", field = "docstring" }},
]
sections = [
  {{ section = "network", title = "Network" }},
  {{ section = "neuron", title = "Neuron" }},
  {{ section = "simulation", title = "Simulation", color = "gray" }},
]

[[tables]]
output = "macros_table.tex"
columns = [
  {{ title = "Key", field = "key" }},
  {{ title = "Macro", field = "macro" }},
  {{ title = "Symbol", field = "name" }},
]
sections = [
  {{ section = "network" }},
  {{ section = "neuron" }},
  {{ section = "simulation" }},
]
"#
        )
    }
}
