use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::table::{AliasTable, AliasTableError};

/// One entry of an alias table JSON object.
///
/// `"alias": "Canonical"` maps a single spelling, while
/// `"Canonical": ["alias", ...]` registers a group of synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AliasEntry {
    Canonical(String),
    Synonyms(Vec<String>),
}

impl AliasTable {
    pub fn from_json_str(json: &str) -> Result<Self, AliasTableError> {
        let raw: BTreeMap<String, AliasEntry> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AliasTableError> {
        let raw: BTreeMap<String, AliasEntry> = serde_json::from_reader(reader)?;
        Self::from_entries(raw)
    }

    pub fn load(path: &Path) -> Result<Self, AliasTableError> {
        let f = std::fs::File::open(path).map_err(|source| AliasTableError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(std::io::BufReader::new(f))?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "loaded alias table"
        );
        Ok(table)
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, AliasEntry)>,
    ) -> Result<Self, AliasTableError> {
        let mut table = AliasTable::new();
        for (key, entry) in entries {
            match entry {
                AliasEntry::Canonical(canonical) => table.insert_alias(&key, &canonical)?,
                AliasEntry::Synonyms(aliases) => table.insert_synonyms(&key, aliases)?,
            }
        }
        Ok(table)
    }
}
