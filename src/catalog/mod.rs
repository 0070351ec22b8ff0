//! Parameter registry storage and rendering.
//!
//! The embedded registry is built once, on first use, from
//! `catalogs/assembly_params.json` and shared read-only for the life of the
//! process. The free functions here read from it; build a [`ParameterRegistry`]
//! directly to work with a different parameter set.

pub mod render;
pub mod store;

use std::sync::LazyLock;

use crate::core::error::RegistryError;
use crate::core::types::ParamKey;
use store::ParameterRegistry;

static EMBEDDED: LazyLock<ParameterRegistry> = LazyLock::new(|| {
    // build.rs rejects a catalog that would fail here
    ParameterRegistry::load_embedded()
        .unwrap_or_else(|e| panic!("embedded parameter catalog is invalid: {e}"))
});

/// The process-wide registry of the assembly pipeline's parameters
pub fn registry() -> &'static ParameterRegistry {
    &EMBEDDED
}

/// Resolve a key (e.g. `7` or `"7"`) to its canonical name (e.g. `datatype`).
///
/// # Errors
///
/// Returns `RegistryError::UnknownParameter` if the key is not registered.
pub fn resolve_name(key: impl Into<ParamKey>) -> Result<&'static str, RegistryError> {
    registry().resolve_name(key)
}

/// Fetch the long or short description for a key.
///
/// # Errors
///
/// Returns `RegistryError::UnknownParameter` if the key is not registered.
pub fn get_description(
    key: impl Into<ParamKey>,
    short: bool,
) -> Result<&'static str, RegistryError> {
    registry().get_description(key, short)
}

/// Print one description, every description (`"*"`), or the index (`""`) to stdout.
///
/// # Errors
///
/// Returns `RegistryError::UnknownParameter` if the key is not registered.
pub fn print_descriptions(key: impl Into<ParamKey>, short: bool) -> Result<(), RegistryError> {
    render::print_descriptions(registry(), key, short)
}
