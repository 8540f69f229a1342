//! LaTeX table and macro generation from parameter catalogues.
//!
//! Turns a [`partex_core::Catalogue`] into two kinds of LaTeX fragments meant
//! for `\input` into a larger document: `tabular` parameter tables grouped by
//! section, and `\def` macro definitions for each parameter's symbol.
//!
//! ## Modules
//!
//! - [`field`]: formatting of single fields (`value`, `key`, `macro`, …)
//! - [`column`]: column specifications, width normalization, table layout
//! - [`section`]: section specifications and colour defaults
//! - [`table`]: header / body / footer table writer
//! - [`macros`]: macro definitions
//! - [`fragment`]: the [`Fragment`] trait and scoped output files

pub mod column;
pub mod error;
pub mod field;
pub mod fragment;
pub mod macros;
pub mod section;
pub mod table;

pub use column::{normalize_widths, ColumnSpec, FieldSelector, TableLayout};
pub use error::RenderError;
pub use field::{format_field, macro_name, resolve_field, FieldKind, DEFAULT_MACRO_PREFIX};
pub use fragment::{with_output_file, Fragment, FragmentKind};
pub use macros::{macro_definition, write_macros, MacroFragment};
pub use section::{ResolvedSection, SectionDefaults, SectionSpec};
pub use table::{TableFragment, TableOptions, TableWriter};
