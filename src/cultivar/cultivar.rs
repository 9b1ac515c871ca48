use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::similarity::tokenizer::extend_tokens;

/// Availability of a cultivar. Decides pool membership, never the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CultivarStatus {
    Active,
    Discontinued,
    #[default]
    Unknown,
}

impl CultivarStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "active" | "aktiv" | "available" | "verfügbar" => Self::Active,
            "discontinued" | "inactive" | "inaktiv" | "eingestellt" | "unavailable"
            | "nicht verfügbar" => Self::Discontinued,
            _ => Self::Unknown,
        }
    }
}

/// A normalized catalog entry.
///
/// `terpene_profile` keeps its source order (first = dominant), display
/// spelling and repeats; alias resolution and duplicate collapsing happen
/// when a profile is encoded. The token sets only ever hold trimmed,
/// lower-cased, non-empty strings.
///
/// Fields are only written through [`Cultivar::new`], the `with_*` methods
/// and [`RawCultivar::normalize`](super::RawCultivar::normalize), which all
/// normalize their input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cultivar {
    pub(crate) name: String,
    pub(crate) terpene_profile: Vec<String>,
    pub(crate) lineage: BTreeSet<String>,
    pub(crate) scent: BTreeSet<String>,
    pub(crate) aroma: BTreeSet<String>,
    pub(crate) status: CultivarStatus,
}

impl Cultivar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            terpene_profile: Vec::new(),
            lineage: BTreeSet::new(),
            scent: BTreeSet::new(),
            aroma: BTreeSet::new(),
            status: CultivarStatus::Unknown,
        }
    }

    /// Append terpene names in dominance order.
    ///
    /// Each entry may itself be a `,`/`;` separated list. Blank names are
    /// skipped; repeats are kept so they count towards the profile length.
    pub fn with_terpenes<I, S>(mut self, terpenes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for terpene in terpenes {
            push_terpenes(&mut self.terpene_profile, terpene.as_ref());
        }
        self
    }

    pub fn with_lineage<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for parent in parents {
            extend_tokens(&mut self.lineage, parent.as_ref());
        }
        self
    }

    pub fn with_scent<I, S>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for descriptor in descriptors {
            extend_tokens(&mut self.scent, descriptor.as_ref());
        }
        self
    }

    pub fn with_aroma<I, S>(mut self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for descriptor in descriptors {
            extend_tokens(&mut self.aroma, descriptor.as_ref());
        }
        self
    }

    pub fn with_status(mut self, status: CultivarStatus) -> Self {
        self.status = status;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terpene_profile(&self) -> &[String] {
        &self.terpene_profile
    }

    pub fn lineage(&self) -> &BTreeSet<String> {
        &self.lineage
    }

    pub fn scent(&self) -> &BTreeSet<String> {
        &self.scent
    }

    pub fn aroma(&self) -> &BTreeSet<String> {
        &self.aroma
    }

    pub fn status(&self) -> CultivarStatus {
        self.status
    }

    pub fn has_terpenes(&self) -> bool {
        !self.terpene_profile.is_empty()
    }

    pub fn has_lineage(&self) -> bool {
        !self.lineage.is_empty()
    }

    /// Scent and aroma count as one descriptor type for eligibility.
    pub fn has_scent_data(&self) -> bool {
        !self.scent.is_empty() || !self.aroma.is_empty()
    }

    /// A cultivar with no descriptor data at all cannot be compared to anything.
    pub fn is_comparable(&self) -> bool {
        self.has_terpenes() || self.has_lineage() || self.has_scent_data()
    }

    /// True when both sides carry at least one descriptor type in common.
    pub fn shares_descriptor_type(&self, other: &Cultivar) -> bool {
        (self.has_terpenes() && other.has_terpenes())
            || (self.has_lineage() && other.has_lineage())
            || (self.has_scent_data() && other.has_scent_data())
    }
}

/// Split a terpene field on `,`/`;` and append every non-blank name in order.
pub(crate) fn push_terpenes(profile: &mut Vec<String>, raw: &str) {
    for name in raw.split([',', ';']).map(str::trim) {
        if !name.is_empty() {
            profile.push(name.to_string());
        }
    }
}
