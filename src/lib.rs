//! # assembly-params
//!
//! Reference documentation for the numbered parameters of a RAD-seq assembly
//! pipeline.
//!
//! Each parameter has a number (`0`..`29` in the bundled catalog), a canonical name
//! such as `datatype` or `clust_threshold`, a one-line summary, and a long
//! explanation with usage examples. This crate maps a number or name to that text
//! for interactive help.
//!
//! ## Example
//!
//! ```rust
//! use assembly_params::{get_description, resolve_name};
//!
//! assert_eq!(resolve_name(7usize).unwrap(), "datatype");
//! assert_eq!(
//!     get_description("7", true).unwrap(),
//!     "Datatype (see docs): rad, gbs, ddrad, etc."
//! );
//!
//! // Names work wherever numbers do
//! assert_eq!(
//!     get_description("project_dir", false).unwrap(),
//!     get_description(1usize, false).unwrap()
//! );
//!
//! assert!(resolve_name("999").unwrap_err().is_unknown_parameter());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The parameter registry, its embedded data, and text rendering
//! - [`core`]: Keys, entries, and errors
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Validation helpers

pub mod catalog;
pub mod cli;
pub mod core;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::render::write_descriptions;
pub use catalog::store::ParameterRegistry;
pub use catalog::{get_description, print_descriptions, registry, resolve_name};
pub use core::entry::ParameterEntry;
pub use core::error::RegistryError;
pub use core::types::ParamKey;
