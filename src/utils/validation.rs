//! Centralized validation helpers for parameter keys and names.
//!
//! `build.rs` compiles this file too, so the embedded catalog is held to exactly
//! the rules `ParameterEntry::new` applies. Keep it free of
//! crate-internal imports.

/// Maximum length of a canonical parameter name
pub const MAX_PARAM_NAME_LENGTH: usize = 64;

/// Longest short description, in characters, that still renders on one line
pub const MAX_SHORT_DESCRIPTION_LEN: usize = 80;

/// Validate that a string is a usable canonical parameter name.
///
/// Names are identifiers as written in a params file: ASCII letters, digits and
/// underscores, not starting with a digit.
///
/// # Examples
///
/// ```
/// use assembly_params::utils::validation::is_valid_param_name;
///
/// assert!(is_valid_param_name("phred_Qscore_offset"));
/// assert!(!is_valid_param_name("---"));
/// assert!(!is_valid_param_name("7up"));
/// ```
#[must_use]
pub fn is_valid_param_name(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_PARAM_NAME_LENGTH
        && !s.starts_with(|c: char| c.is_ascii_digit())
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check whether a key is a plain decimal index such as `"7"` or `"29"`.
#[must_use]
pub fn is_numeric_key(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Keys that select a printing mode and so cannot name an entry: `""` and `"*"`.
#[must_use]
pub fn is_reserved_key(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || s == "*"
}

/// Check that a short description is one non-empty line that fits a listing.
#[must_use]
pub fn is_valid_short_description(s: &str) -> bool {
    !s.trim().is_empty() && !s.contains('\n') && s.chars().count() <= MAX_SHORT_DESCRIPTION_LEN
}
