use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::core::entry::{ParameterEntry, ParameterRecord};
use crate::core::error::RegistryError;
use crate::core::types::ParamKey;
use crate::utils::validation::is_numeric_key;

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub parameters: Vec<ParameterRecord>,
}

/// Ordered, read-only set of documented parameters.
///
/// Insertion order is display order. There is no way to add or change entries once
/// the registry has been built.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    entries: Vec<ParameterEntry>,

    /// Index: key -> index in entries vec
    key_to_index: HashMap<ParamKey, usize>,

    /// Index: canonical name -> index in entries vec
    name_to_index: HashMap<String, usize>,
}

impl ParameterRegistry {
    /// Load the embedded default catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails validation.
    pub fn load_embedded() -> Result<Self, RegistryError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/assembly_params.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid catalog, or
    /// contains a malformed or duplicate entry.
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(RegistryError::ReadError)?;
        Self::from_json(&content)
    }

    /// Parse a catalog from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or an entry fails validation.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            tracing::warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION,
                data.version
            );
        }

        let entries = data
            .parameters
            .into_iter()
            .map(ParameterEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_entries(entries)
    }

    /// Build a registry from already validated entries, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if two entries share a key, or
    /// `RegistryError::DuplicateName` if two entries share a canonical name.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ParameterEntry>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();

        for entry in entries {
            let index = registry.entries.len();
            if registry.key_to_index.contains_key(&entry.key) {
                return Err(RegistryError::DuplicateKey { key: entry.key });
            }
            if let Some(&existing) = registry.name_to_index.get(&entry.canonical_name) {
                return Err(RegistryError::DuplicateName {
                    key: entry.key,
                    name: entry.canonical_name,
                    existing: registry.entries[existing].key.clone(),
                });
            }
            registry.key_to_index.insert(entry.key.clone(), index);
            registry
                .name_to_index
                .insert(entry.canonical_name.clone(), index);

            registry.entries.push(entry);
        }

        tracing::debug!("Built parameter registry with {} entries", registry.len());
        Ok(registry)
    }

    /// Find an entry by key, falling back to canonical name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownParameter` if neither a key nor a name matches.
    pub fn lookup(&self, key: impl Into<ParamKey>) -> Result<&ParameterEntry, RegistryError> {
        let key = key.into();
        self.get(&key).ok_or_else(|| {
            tracing::debug!("Key name/number not recognized: '{key}'");
            RegistryError::UnknownParameter { key }
        })
    }

    /// Get an entry by key or canonical name
    pub fn get(&self, key: &ParamKey) -> Option<&ParameterEntry> {
        let index = match self.key_to_index.get(key) {
            Some(index) => Some(index),
            // Names never look like indices
            None if is_numeric_key(key.as_str()) => None,
            None => self.name_to_index.get(key.as_str()),
        };
        index.map(|&idx| &self.entries[idx])
    }

    /// Resolve a key to its canonical parameter name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownParameter` if the key is not registered.
    pub fn resolve_name(&self, key: impl Into<ParamKey>) -> Result<&str, RegistryError> {
        Ok(&self.lookup(key)?.canonical_name)
    }

    /// Fetch the long or short description for a key, verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownParameter` if the key is not registered.
    pub fn get_description(
        &self,
        key: impl Into<ParamKey>,
        short: bool,
    ) -> Result<&str, RegistryError> {
        Ok(self.lookup(key)?.description(short))
    }

    /// Entries in display order
    pub fn iter(&self) -> std::slice::Iter<'_, ParameterEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &ParamKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Export catalog to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            parameters: self.entries.iter().map(ParameterEntry::to_record).collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of parameters in the registry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParameterRegistry {
    type Item = &'a ParameterEntry;
    type IntoIter = std::slice::Iter<'a, ParameterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
