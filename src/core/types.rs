use serde::{Deserialize, Serialize};

/// Lookup key for a parameter in the registry.
///
/// Keys are always held in canonical string form so that `7`, `7usize` and `" 7 "`
/// all address the same entry. Canonical parameter names (e.g. `datatype`) are
/// carried the same way and resolved by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamKey(String);

impl ParamKey {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty key, which selects the index view when printing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True for the `*` wildcard, which selects every entry when printing
    pub fn is_wildcard(&self) -> bool {
        self.0 == "*"
    }
}

impl std::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParamKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParamKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for ParamKey {
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl From<&ParamKey> for ParamKey {
    fn from(key: &ParamKey) -> Self {
        key.clone()
    }
}

macro_rules! impl_from_index {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamKey {
                fn from(index: $t) -> Self {
                    Self(index.to_string())
                }
            }
        )*
    };
}

impl_from_index!(u8, u16, u32, u64, usize);
