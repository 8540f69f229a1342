//! `partex macros`: macro definitions for a parameter file.

use std::io;
use std::path::Path;

use anyhow::Result;
use partex_render::{Fragment, MacroFragment};

use super::load_catalogue;

/// Write macro definitions for `params` to `output`, or to stdout.
pub fn run(params: &Path, prefix: &str, output: Option<&Path>) -> Result<()> {
    let catalogue = load_catalogue(params)?;
    let fragment = MacroFragment::new(prefix);
    match output {
        Some(path) => {
            fragment.write_file(&catalogue, path)?;
            println!("Wrote {} macro definitions to {}", catalogue.len(), path.display());
        }
        None => fragment.write(&catalogue, &mut io::stdout().lock())?,
    }
    Ok(())
}
