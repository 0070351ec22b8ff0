//! Text rendering of parameter descriptions for the interactive help system.

use std::io::Write;

use crate::catalog::store::ParameterRegistry;
use crate::core::error::RegistryError;
use crate::core::types::ParamKey;

/// Header printed above the index view
pub const INDEX_HEADER: &str = "Enter a name or number for explanation of the parameter";

/// How a `print_descriptions` key selects what to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `""`: header plus one `(N) name` label per entry
    Index,
    /// `"*"`: the selected description of every entry
    All,
    /// Any other key: the selected description of that entry
    One(ParamKey),
}

impl From<ParamKey> for Selection {
    fn from(key: ParamKey) -> Self {
        if key.is_empty() {
            Self::Index
        } else if key.is_wildcard() {
            Self::All
        } else {
            Self::One(key)
        }
    }
}

/// Write descriptions for one key, every key (`"*"`), or the index view (`""`).
///
/// `short` picks the one-line summary over the long text. It has no effect on the
/// index view.
///
/// # Errors
///
/// Returns `RegistryError::UnknownParameter` for an unregistered key (nothing is
/// written), or `RegistryError::Io` if the writer fails.
pub fn write_descriptions<W: Write>(
    out: &mut W,
    registry: &ParameterRegistry,
    key: impl Into<ParamKey>,
    short: bool,
) -> Result<(), RegistryError> {
    match Selection::from(key.into()) {
        Selection::All => {
            for entry in registry {
                writeln!(out, "{}", entry.description(short)).map_err(RegistryError::Io)?;
            }
        }
        Selection::One(key) => {
            let description = registry.get_description(key, short)?;
            writeln!(out, "{description}").map_err(RegistryError::Io)?;
        }
        Selection::Index => {
            writeln!(out, "{INDEX_HEADER}\n").map_err(RegistryError::Io)?;
            for entry in registry {
                writeln!(out, "{}", entry.index_label).map_err(RegistryError::Io)?;
            }
        }
    }
    Ok(())
}

/// Print descriptions to stdout. See [`write_descriptions`].
///
/// # Errors
///
/// Returns `RegistryError::UnknownParameter` for an unregistered key.
pub fn print_descriptions(
    registry: &ParameterRegistry,
    key: impl Into<ParamKey>,
    short: bool,
) -> Result<(), RegistryError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_descriptions(&mut out, registry, key, short)
}
