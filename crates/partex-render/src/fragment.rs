//! Fragment trait shared by the table and macro renderers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use partex_core::Catalogue;

use crate::error::{RenderError, Result};

/// The kind of LaTeX fragment produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Table,
    Macros,
}

impl FragmentKind {
    /// Display name for this fragment kind.
    pub fn name(&self) -> &'static str {
        match self {
            FragmentKind::Table => "table",
            FragmentKind::Macros => "macros",
        }
    }
}

/// A LaTeX fragment generated from a parameter catalogue.
pub trait Fragment {
    /// The kind of fragment this is.
    fn kind(&self) -> FragmentKind;

    /// Append the fragment for `catalogue` to `out`.
    fn write(&self, catalogue: &Catalogue, out: &mut dyn Write) -> Result<()>;

    /// Render the fragment into a string.
    fn render(&self, catalogue: &Catalogue) -> Result<String> {
        let mut buf = Vec::new();
        self.write(catalogue, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Create (or truncate) `path` and write the fragment into it.
    fn write_file(&self, catalogue: &Catalogue, path: &Path) -> Result<()> {
        with_output_file(path, |out| self.write(catalogue, out))?;
        tracing::info!(path = %path.display(), kind = self.kind().name(), "wrote fragment");
        Ok(())
    }
}

/// Run `write` against a buffered handle on a freshly created `path`.
///
/// The handle is flushed on success and closed on every exit path. A failing
/// `write` leaves whatever was written so far in the file.
pub fn with_output_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let output_error = |source: std::io::Error| RenderError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_error)?;
    let mut out = BufWriter::new(file);
    write(&mut out)?;
    out.flush().map_err(output_error)
}
