//! `partex render`: generate every output configured in `partex.toml`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use partex_render::{Fragment, MacroFragment};

use super::load_catalogue;
use crate::config::{ProjectConfig, CONFIG_FILE};

/// Render the macro file and all tables of the project containing `cwd`,
/// or of the explicit configuration file `config_path`.
pub fn run(cwd: &Path, config_path: Option<&Path>) -> Result<()> {
    let (config, base_dir) = match config_path {
        Some(path) => {
            let config = ProjectConfig::load(path)?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            (config, base_dir)
        }
        None => match ProjectConfig::find_and_load(cwd)? {
            Some(found) => found,
            None => bail!(
                "no {CONFIG_FILE} found in {} or any parent directory. Run 'partex init' to create one.",
                cwd.display()
            ),
        },
    };

    let written = render_project(&config, &base_dir)?;
    for path in &written {
        println!("  {}", path.display());
    }
    println!("Generated {} file(s)", written.len());
    Ok(())
}

/// Write all configured outputs, returning their paths in write order.
pub(crate) fn render_project(config: &ProjectConfig, base_dir: &Path) -> Result<Vec<PathBuf>> {
    let catalogue = load_catalogue(&base_dir.join(&config.params_file))?;
    let mut written = Vec::new();

    if let Some(macros) = &config.macros {
        let path = base_dir.join(&macros.output);
        MacroFragment::new(config.macros_prefix.as_str())
            .write_file(&catalogue, &path)
            .with_context(|| format!("writing macros to {}", path.display()))?;
        written.push(path);
    }

    for table in &config.tables {
        let fragment = config.table_fragment(table)?;
        let path = base_dir.join(&table.output);
        fragment
            .write_file(&catalogue, &path)
            .with_context(|| format!("writing table to {}", path.display()))?;
        written.push(path);
    }

    if written.is_empty() {
        tracing::warn!("configuration lists no macros or tables; nothing generated");
    }
    Ok(written)
}
