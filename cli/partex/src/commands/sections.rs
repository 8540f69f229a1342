//! `partex sections`: list the section tags of a parameter file.

use std::path::Path;

use anyhow::Result;
use partex_core::Catalogue;

use super::load_catalogue;

/// Print each section tag with its parameter count.
pub fn run(params: &Path) -> Result<()> {
    let catalogue = load_catalogue(params)?;
    let counts = section_counts(&catalogue);

    println!("Sections in {}:", params.display());
    println!();
    for (tag, count) in &counts {
        println!("  {tag:<25} {count}");
    }
    let untagged = catalogue.len() - counts.iter().map(|(_, n)| n).sum::<usize>();
    if untagged > 0 {
        println!();
        println!("  {untagged} parameter(s) without section");
    }
    Ok(())
}

/// Section tags in order of first appearance, with parameter counts.
pub(crate) fn section_counts(catalogue: &Catalogue) -> Vec<(String, usize)> {
    catalogue
        .section_tags()
        .into_iter()
        .map(|tag| (tag.to_string(), catalogue.group_by_section(tag).len()))
        .collect()
}
