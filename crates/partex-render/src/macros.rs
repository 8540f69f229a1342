//! LaTeX macro definitions for parameters.
//!
//! Each parameter `tau_m` with display name `$\tau_\text{m}$` becomes
//!
//! ```text
//! \def\Ptaum{\ensuremath{\tau_\text{m}} }     %% membrane time constant
//! ```
//!
//! so prose can refer to the symbol as `\Ptaum`.

use std::io::Write;

use partex_core::{Catalogue, Parameter};

use crate::error::{RenderError, Result};
use crate::field::{macro_name, DEFAULT_MACRO_PREFIX};
use crate::fragment::{Fragment, FragmentKind};

/// The definition line for one parameter, without trailing newline.
pub fn macro_definition(key: &str, parameter: &Parameter, prefix: &str) -> Result<String> {
    let name = required(key, "name", parameter.name.as_deref())?;
    let docstring = required(key, "docstring", parameter.docstring.as_deref())?;
    let command = macro_name(prefix, key);
    let symbol = name.replace('$', "");
    Ok(format!(
        "\\def\\{command}{{\\ensuremath{{{symbol}}} }}     %% {docstring}"
    ))
}

fn required<'a>(key: &str, field: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| RenderError::MissingField {
        key: key.to_string(),
        field: field.to_string(),
    })
}

/// Write one definition per parameter, in catalogue order.
pub fn write_macros(catalogue: &Catalogue, prefix: &str, out: &mut dyn Write) -> Result<()> {
    for (key, parameter) in catalogue.iter() {
        writeln!(out, "{}", macro_definition(key, parameter, prefix)?)?;
    }
    Ok(())
}

/// The macro definitions file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroFragment {
    pub prefix: String,
}

impl MacroFragment {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for MacroFragment {
    fn default() -> Self {
        Self::new(DEFAULT_MACRO_PREFIX)
    }
}

impl Fragment for MacroFragment {
    fn kind(&self) -> FragmentKind {
        FragmentKind::Macros
    }

    fn write(&self, catalogue: &Catalogue, out: &mut dyn Write) -> Result<()> {
        write_macros(catalogue, &self.prefix, out)
    }
}
