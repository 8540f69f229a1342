//! Parameter catalogue model for LaTeX parameter documentation.
//!
//! A [`Catalogue`] is an insertion-ordered map from a parameter's programmatic
//! identifier to its [`Parameter`] record (value, unit, docstring, LaTeX display
//! name and section tag). Catalogues are loaded from JSON and consumed by the
//! table and macro renderers in `partex-render`.
//!
//! ## Modules
//!
//! - [`value`]: numeric or textual parameter values
//! - [`parameter`]: a single parameter record
//! - [`catalogue`]: ordered, duplicate-rejecting parameter map and section grouping
//! - [`error`]: load/save errors

pub mod catalogue;
pub mod error;
pub mod parameter;
pub mod value;

pub use catalogue::Catalogue;
pub use error::CatalogueError;
pub use parameter::Parameter;
pub use value::ParamValue;
