use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::cultivar::Cultivar;
use super::raw::RawCultivar;
use crate::alias::AliasTable;
use crate::similarity::SimilarityRanker;
use crate::types::similarity_result::{SimilarityError, SimilarityResult};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Load {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Catalog must be a JSON array of records")]
    NotAnArray,
}

/// An immutable set of normalized cultivars, kept in source order.
///
/// Names are unique; when the source repeats a name the first record wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    cultivars: Vec<Cultivar>,
    by_name: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn new(cultivars: impl IntoIterator<Item = Cultivar>) -> Self {
        let mut catalog = Catalog::default();
        for cultivar in cultivars {
            catalog.push(cultivar);
        }
        catalog
    }

    fn push(&mut self, cultivar: Cultivar) {
        if self.by_name.contains_key(&cultivar.name) {
            tracing::warn!(name = %cultivar.name, "duplicate cultivar name, keeping first record");
            return;
        }
        self.by_name.insert(cultivar.name.clone(), self.cultivars.len());
        self.cultivars.push(cultivar);
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let f = std::fs::File::open(path).map_err(|source| CatalogError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(std::io::BufReader::new(f))?;
        tracing::debug!(path = %path.display(), cultivars = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    fn from_value(value: Value) -> Result<Self, CatalogError> {
        let Value::Array(records) = value else {
            return Err(CatalogError::NotAnArray);
        };

        let mut catalog = Catalog::default();
        for (index, record) in records.into_iter().enumerate() {
            let Value::Object(fields) = record else {
                tracing::warn!(index, "skipping catalog entry that is not an object");
                continue;
            };

            let mut raw = RawCultivar::new();
            for (key, value) in fields {
                raw.insert(key, value);
            }

            match raw.normalize() {
                Some(cultivar) => catalog.push(cultivar),
                None => tracing::warn!(index, "skipping catalog record without a name"),
            }
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Cultivar> {
        self.by_name.get(name.trim()).map(|&index| &self.cultivars[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cultivar> {
        self.cultivars.iter()
    }

    pub fn len(&self) -> usize {
        self.cultivars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cultivars.is_empty()
    }

    /// Rank the rest of the catalog against the cultivar called `name`.
    pub fn similar_to(
        &self,
        name: &str,
        aliases: &AliasTable,
        ranker: &SimilarityRanker,
    ) -> Result<SimilarityResult, SimilarityError> {
        let reference = self
            .get(name)
            .ok_or_else(|| SimilarityError::UnknownReference(name.trim().to_string()))?;

        Ok(ranker.rank(reference, &self.cultivars, aliases))
    }
}
