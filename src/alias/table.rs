use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::identifiers::AliasTableVersion;

#[derive(Debug, Error)]
pub enum AliasTableError {
    #[error("Failed to read alias table {path}: {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid alias table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Alias table entries must not be blank")]
    EmptyName,
    #[error("Name '{alias}' maps to both '{first}' and '{second}'")]
    ConflictingAlias {
        alias: String,
        first: String,
        second: String,
    },
}

/// Many-to-one mapping from terpene name variants to canonical names.
///
/// Keys are stored trimmed and lower-cased; canonical names keep their
/// registered display form. Every canonical name is also reachable through
/// its own folded form, which makes [`AliasTable::resolve`] idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `canonical` so that it resolves to itself.
    pub fn insert_canonical(&mut self, canonical: &str) -> Result<(), AliasTableError> {
        let canonical = canonical.trim();
        self.register(fold(canonical), canonical)
    }

    /// Register `alias` as a spelling of `canonical`.
    pub fn insert_alias(&mut self, alias: &str, canonical: &str) -> Result<(), AliasTableError> {
        let canonical = canonical.trim();
        self.register(fold(canonical), canonical)?;
        self.register(fold(alias), canonical)
    }

    /// Register a canonical name together with all of its spellings.
    pub fn insert_synonyms<I, S>(&mut self, canonical: &str, aliases: I) -> Result<(), AliasTableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert_canonical(canonical)?;
        for alias in aliases {
            self.insert_alias(alias.as_ref(), canonical)?;
        }
        Ok(())
    }

    fn register(&mut self, key: String, canonical: &str) -> Result<(), AliasTableError> {
        if key.is_empty() || canonical.is_empty() {
            return Err(AliasTableError::EmptyName);
        }

        match self.entries.get(&key) {
            Some(existing) if existing != canonical => Err(AliasTableError::ConflictingAlias {
                alias: key,
                first: existing.clone(),
                second: canonical.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(key, canonical.to_string());
                Ok(())
            }
        }
    }

    /// Map a free-text terpene name to its canonical name.
    ///
    /// Unknown names are returned trimmed but otherwise unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        let trimmed = name.trim();
        match self.entries.get(&fold(trimmed)) {
            Some(canonical) => canonical.as_str(),
            None => trimmed,
        }
    }

    pub fn version(&self) -> AliasTableVersion {
        AliasTableVersion::from_entries(
            self.entries
                .iter()
                .map(|(key, canonical)| (key.as_str(), canonical.as_str())),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Free-function form of [`AliasTable::resolve`].
pub fn resolve<'a>(name: &'a str, aliases: &'a AliasTable) -> &'a str {
    aliases.resolve(name)
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}
