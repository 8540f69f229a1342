//! `partex table`: a single table from command-line column and section lists.

use std::io;
use std::path::Path;

use anyhow::{bail, Result};
use partex_core::Catalogue;
use partex_render::{
    ColumnSpec, Fragment, SectionDefaults, SectionSpec, TableFragment, TableLayout, TableOptions,
};

use super::load_catalogue;

/// Render one table for `params`.
///
/// Without explicit sections every section tag is rendered, in order of
/// first appearance, without banners.
pub fn run(
    params: &Path,
    columns: Vec<ColumnSpec>,
    sections: Vec<SectionSpec>,
    widths: Option<&[f64]>,
    prefix: &str,
    output: Option<&Path>,
) -> Result<()> {
    let catalogue = load_catalogue(params)?;
    let fragment = build_fragment(&catalogue, columns, sections, widths, prefix)?;

    match output {
        Some(path) => {
            fragment.write_file(&catalogue, path)?;
            println!(
                "Wrote table with {} section(s) to {}",
                fragment.sections.len(),
                path.display()
            );
        }
        None => fragment.write(&catalogue, &mut io::stdout().lock())?,
    }
    Ok(())
}

fn build_fragment(
    catalogue: &Catalogue,
    columns: Vec<ColumnSpec>,
    sections: Vec<SectionSpec>,
    widths: Option<&[f64]>,
    prefix: &str,
) -> Result<TableFragment> {
    if columns.is_empty() {
        bail!("at least one --column is required");
    }
    let layout = TableLayout::new(columns, widths)?;
    let sections = if sections.is_empty() {
        catalogue.section_tags().into_iter().map(SectionSpec::new).collect()
    } else {
        sections
    };
    let options = TableOptions {
        macro_prefix: prefix.to_string(),
        section_defaults: SectionDefaults::default(),
    };
    Ok(TableFragment::new(layout, sections).with_options(options))
}
