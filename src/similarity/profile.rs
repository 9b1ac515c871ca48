use std::collections::BTreeMap;

use crate::alias::AliasTable;

/// Canonical terpene name → dominance weight in `(0, 1]`.
///
/// For a profile of length `n` the entry at position `i` weighs `(n - i) / n`,
/// so the dominant terpene always weighs `1.0`. Names that resolve to the same
/// canonical terpene keep the highest of their weights.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedProfile {
    weights: BTreeMap<String, f64>,
}

impl WeightedProfile {
    /// Encode an ordered terpene list, resolving every entry through `aliases`.
    ///
    /// Blank entries are dropped before positions are counted.
    pub fn encode<S: AsRef<str>>(terpenes: &[S], aliases: &AliasTable) -> Self {
        let names: Vec<&str> = terpenes
            .iter()
            .map(|terpene| aliases.resolve(terpene.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();

        let n = names.len();
        let mut weights: BTreeMap<String, f64> = BTreeMap::new();
        for (i, name) in names.into_iter().enumerate() {
            let weight = (n - i) as f64 / n as f64;
            let slot = weights.entry(name.to_string()).or_insert(0.0);
            if weight > *slot {
                *slot = weight;
            }
        }

        WeightedProfile { weights }
    }

    pub fn weight(&self, name: &str) -> f64 {
        self.weights.get(name).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Pairs of weights over the sorted union of both profiles' terpenes.
    /// A terpene missing on one side contributes `0.0` there.
    pub fn union_weights<'a>(&'a self, other: &'a WeightedProfile) -> Vec<(f64, f64)> {
        let mut names: Vec<&'a String> = self.weights.keys().chain(other.weights.keys()).collect();
        names.sort();
        names.dedup();

        names
            .into_iter()
            .map(|name| (self.weight(name), other.weight(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_terpene_weighs_one() {
        let profile = WeightedProfile::encode(&["Myrcene", "Limonene"], &AliasTable::new());
        assert_eq!(profile.weight("Myrcene"), 1.0);
        assert_eq!(profile.weight("Limonene"), 0.5);
        assert_eq!(profile.weight("Linalool"), 0.0);
    }

    #[test]
    fn weights_decrease_with_position() {
        let profile =
            WeightedProfile::encode(&["A", "B", "C", "D"], &AliasTable::new());
        assert_eq!(profile.weight("A"), 1.0);
        assert_eq!(profile.weight("B"), 0.75);
        assert_eq!(profile.weight("C"), 0.5);
        assert_eq!(profile.weight("D"), 0.25);
    }

    #[test]
    fn duplicates_keep_highest_weight() {
        let mut aliases = AliasTable::new();
        aliases
            .insert_synonyms("β-Caryophyllen", ["Caryophyllen"])
            .unwrap();

        let profile = WeightedProfile::encode(
            &["Caryophyllen", "Myrcen", "β-Caryophyllen", "Pinen"],
            &aliases,
        );

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.weight("β-Caryophyllen"), 1.0);
        assert_eq!(profile.weight("Myrcen"), 0.75);
        assert_eq!(profile.weight("Pinen"), 0.25);
    }

    #[test]
    fn empty_list_encodes_empty_profile() {
        let empty: [&str; 0] = [];
        assert!(WeightedProfile::encode(&empty, &AliasTable::new()).is_empty());
    }
}
