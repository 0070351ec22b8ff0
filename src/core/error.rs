use thiserror::Error;

use crate::core::types::ParamKey;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller asked for a key that is not in the registry
    #[error("Key name/number not recognized: '{key}'")]
    UnknownParameter { key: ParamKey },

    /// An entry's text breaks the `(<key>) <name> ---` banner format
    #[error("Malformed parameter entry '{key}': {reason}")]
    MalformedEntry { key: ParamKey, reason: String },

    #[error("Duplicate parameter key '{key}' in catalog")]
    DuplicateKey { key: ParamKey },

    #[error("Parameter '{key}' reuses the name '{name}' of parameter '{existing}'")]
    DuplicateName {
        key: ParamKey,
        name: String,
        existing: ParamKey,
    },

    #[error("Failed to read catalog: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Failed to write descriptions: {0}")]
    Io(#[source] std::io::Error),
}

impl RegistryError {
    pub fn is_unknown_parameter(&self) -> bool {
        matches!(self, Self::UnknownParameter { .. })
    }

    pub fn is_malformed_entry(&self) -> bool {
        matches!(self, Self::MalformedEntry { .. })
    }
}
