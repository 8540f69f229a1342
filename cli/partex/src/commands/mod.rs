//! CLI command implementations.

pub mod init;
pub mod macros;
pub mod render;
pub mod sections;
pub mod table;

use std::path::Path;

use anyhow::{Context, Result};
use partex_core::Catalogue;

/// Load a JSON parameter catalogue, attaching the path to any error.
pub(crate) fn load_catalogue(path: &Path) -> Result<Catalogue> {
    Catalogue::load_json(path).with_context(|| format!("loading parameters from {}", path.display()))
}
