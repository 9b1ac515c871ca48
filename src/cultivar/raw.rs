use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cultivar::{push_terpenes, Cultivar, CultivarStatus};
use crate::similarity::tokenizer::extend_tokens;

const NAME_KEYS: &[&str] = &["name"];
const TERPENE_KEYS: &[&str] = &["terpeneProfile", "terpene_profile", "terpenes", "terpene"];
const LINEAGE_KEYS: &[&str] = &["lineage", "genetics", "genetik"];
const SCENT_KEYS: &[&str] = &["scent", "smell", "geruch"];
const AROMA_KEYS: &[&str] = &["aroma", "flavour", "flavor", "taste", "geschmack"];
const STATUS_KEYS: &[&str] = &["status"];

/// A catalog record exactly as it arrived: any keys, any value shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCultivar {
    inner: BTreeMap<String, Value>,
}

impl RawCultivar {
    pub fn new() -> Self {
        RawCultivar {
            inner: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.inner.insert(key.into(), value);
    }

    /// Normalize into the strict record type.
    ///
    /// Returns `None` only when the record has no usable name. Every other
    /// malformed field degrades to an empty collection.
    pub fn normalize(&self) -> Option<Cultivar> {
        let name = self
            .first_present(NAME_KEYS)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())?;

        let mut cultivar = Cultivar::new(name);

        if let Some(value) = self.first_present(TERPENE_KEYS) {
            for entry in strings(value) {
                push_terpenes(&mut cultivar.terpene_profile, entry);
            }
        }
        if let Some(value) = self.first_present(LINEAGE_KEYS) {
            for entry in strings(value) {
                extend_tokens(&mut cultivar.lineage, entry);
            }
        }
        if let Some(value) = self.first_present(SCENT_KEYS) {
            for entry in strings(value) {
                extend_tokens(&mut cultivar.scent, entry);
            }
        }
        if let Some(value) = self.first_present(AROMA_KEYS) {
            for entry in strings(value) {
                extend_tokens(&mut cultivar.aroma, entry);
            }
        }

        cultivar.status = self
            .first_present(STATUS_KEYS)
            .and_then(Value::as_str)
            .map(CultivarStatus::parse)
            .unwrap_or_default();

        Some(cultivar)
    }

    /// First key whose value carries any string content.
    fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.inner.get(*key))
            .find(|value| strings(value).any(|s| !s.trim().is_empty()))
    }
}

/// String content of a field: a lone string, or the string items of an array.
fn strings(value: &Value) -> Box<dyn Iterator<Item = &str> + '_> {
    match value {
        Value::String(s) => Box::new(std::iter::once(s.as_str())),
        Value::Array(items) => Box::new(items.iter().filter_map(Value::as_str)),
        _ => Box::new(std::iter::empty()),
    }
}
