use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of an alias table.
///
/// Computed over the sorted `folded_key:canonical` lines, so two tables with
/// the same mappings share a version regardless of how their JSON was laid out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTableVersion(String);

impl AliasTableVersion {
    /// Entries must already be sorted by key.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut hasher = Sha256::new();
        for (key, canonical) in entries {
            hasher.update(key.as_bytes());
            hasher.update(b":");
            hasher.update(canonical.as_bytes());
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        AliasTableVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
