//! Core data types for the parameter registry.
//!
//! - [`ParamKey`]: a normalised lookup key (numeric index or canonical name)
//! - [`ParameterEntry`]: one documented parameter with its derived name and label
//! - [`RegistryError`]: lookup and catalog failures
//!
//! ## Entry format
//!
//! Every long description opens with a banner line naming the parameter:
//!
//! ```text
//!     (7) datatype ---------------------------------------------------------
//! ```
//!
//! The token after the parenthesised index is the canonical name. It is extracted
//! once when the entry is built.

pub mod entry;
pub mod error;
pub mod types;
