use serde::{Deserialize, Serialize};

use crate::core::error::RegistryError;
use crate::core::types::ParamKey;
use crate::utils::validation::{
    is_reserved_key, is_valid_param_name, is_valid_short_description, MAX_SHORT_DESCRIPTION_LEN,
};

/// Serialized form of a parameter as stored in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterRecord {
    pub key: String,
    pub long_description: String,
    pub short_description: String,
}

/// A validated parameter entry.
///
/// The canonical name and index label are derived from the long description once,
/// when the entry is built, so a malformed banner is rejected up front rather than
/// at first lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterEntry {
    pub key: ParamKey,

    /// Canonical parameter name, e.g. `project_dir`
    pub canonical_name: String,

    /// Compact label for the index view, e.g. `(1) project_dir`
    pub index_label: String,

    /// Multi-line explanation with usage examples, kept verbatim
    pub long_description: String,

    /// One-line summary
    pub short_description: String,
}

impl ParameterEntry {
    /// Build an entry, validating the banner line of its long description.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::MalformedEntry` if the first non-blank line of
    /// `long_description` is not `(<key>) <name> ...`, or if the short description
    /// is empty or spans several lines.
    pub fn new(
        key: impl Into<ParamKey>,
        long_description: impl Into<String>,
        short_description: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let key = key.into();
        let long_description = long_description.into();
        let short_description = short_description.into();

        if is_reserved_key(key.as_str()) {
            return Err(malformed(&key, "key must not be empty or '*'"));
        }

        let canonical_name = parse_canonical_name(&key, &long_description)?;
        validate_short_description(&key, &short_description)?;

        Ok(Self {
            index_label: format!("({key}) {canonical_name}"),
            key,
            canonical_name,
            long_description,
            short_description,
        })
    }

    /// Select the long or short description
    pub fn description(&self, short: bool) -> &str {
        if short {
            &self.short_description
        } else {
            &self.long_description
        }
    }

    pub fn to_record(&self) -> ParameterRecord {
        ParameterRecord {
            key: self.key.to_string(),
            long_description: self.long_description.clone(),
            short_description: self.short_description.clone(),
        }
    }
}

impl TryFrom<ParameterRecord> for ParameterEntry {
    type Error = RegistryError;

    fn try_from(record: ParameterRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.key,
            record.long_description,
            record.short_description,
        )
    }
}

/// Extract the name token that follows `(<key>)` on the banner line.
///
/// # Errors
///
/// Returns `RegistryError::MalformedEntry` if the banner is missing, does not start
/// with the entry's own key, or has no name token.
pub fn parse_canonical_name(
    key: &ParamKey,
    long_description: &str,
) -> Result<String, RegistryError> {
    let banner = long_description
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| malformed(key, "long description is empty"))?;

    let mut tokens = banner.split_whitespace();
    let expected = format!("({key})");
    match tokens.next() {
        Some(index) if index == expected => {}
        Some(index) => {
            return Err(malformed(
                key,
                &format!("banner starts with '{index}', expected '{expected}'"),
            ));
        }
        None => return Err(malformed(key, "banner line is empty")),
    }

    match tokens.next() {
        Some(name) if is_valid_param_name(name) => Ok(name.to_string()),
        // A rule line directly after the index means the name was left out
        Some(name) if name.starts_with('-') => Err(malformed(
            key,
            &format!("no parameter name after '{expected}'"),
        )),
        Some(name) => Err(malformed(key, &format!("invalid parameter name '{name}'"))),
        None => Err(malformed(key, &format!("no parameter name after '{expected}'"))),
    }
}

fn validate_short_description(key: &ParamKey, short: &str) -> Result<(), RegistryError> {
    if short.trim().is_empty() {
        return Err(malformed(key, "short description is empty"));
    }
    if short.contains('\n') {
        return Err(malformed(key, "short description spans several lines"));
    }
    if !is_valid_short_description(short) {
        return Err(malformed(
            key,
            &format!("short description exceeds {MAX_SHORT_DESCRIPTION_LEN} characters"),
        ));
    }
    Ok(())
}

fn malformed(key: &ParamKey, reason: &str) -> RegistryError {
    RegistryError::MalformedEntry {
        key: key.clone(),
        reason: reason.to_string(),
    }
}
