//! Taxonomy accumulation.
//!
//! All aggregation policy lives in [`TaxonomyAccumulator::record`]:
//! cleanup, `"string"` normalization and empty-value discard. The map only
//! ever grows.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{Observation, Taxonomy};
use crate::taxonomy::decompose::clean;

/// Type tag that carries no literal constraint; stored as `""`.
pub const FREE_FORM_TAG: &str = "string";

/// Key that always carries the boolean literals.
pub const BOOLEAN_KEY: &str = "boolean";
pub const BOOLEAN_VALUES: [&str; 2] = ["true", "false"];

/// What happened to a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Inserted,
    Duplicate,
    Discarded,
}

/// Running totals, for the run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub inserted: usize,
    pub duplicates: usize,
    pub discarded: usize,
}

impl RecordStats {
    pub fn total(&self) -> usize {
        self.inserted + self.duplicates + self.discarded
    }
}

#[derive(Debug, Default)]
pub struct TaxonomyAccumulator {
    entries: BTreeMap<String, BTreeSet<String>>,
    stats: RecordStats,
}

impl TaxonomyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` was followed by `value`.
    ///
    /// `"string"` is stored as `""`; a value that is empty after cleanup is
    /// dropped without creating the key.
    pub fn record(&mut self, key: &str, value: &str) -> RecordOutcome {
        let key = clean(key);
        let mut value = clean(value);

        if value == FREE_FORM_TAG {
            value.clear();
        } else if value.is_empty() {
            self.stats.discarded += 1;
            return RecordOutcome::Discarded;
        }

        let inserted = self.entries.entry(key).or_default().insert(value);
        if inserted {
            self.stats.inserted += 1;
            RecordOutcome::Inserted
        } else {
            self.stats.duplicates += 1;
            RecordOutcome::Duplicate
        }
    }

    pub fn record_observation(&mut self, observation: &Observation) -> RecordOutcome {
        self.record(&observation.key, &observation.successor)
    }

    /// Add the fixed `boolean -> {true, false}` domain.
    pub fn seed_boolean(&mut self) {
        for value in BOOLEAN_VALUES {
            self.record(BOOLEAN_KEY, value);
        }
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    pub fn successor_count(&self, key: &str) -> usize {
        self.entries.get(key).map_or(0, BTreeSet::len)
    }

    pub fn stats(&self) -> RecordStats {
        self.stats
    }

    pub fn finalize(self) -> Taxonomy {
        Taxonomy::from_map(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_values_collapse() {
        let mut acc = TaxonomyAccumulator::new();
        assert_eq!(acc.record("k", "v"), RecordOutcome::Inserted);
        assert_eq!(acc.record("k", "v"), RecordOutcome::Duplicate);
        assert_eq!(acc.record("k", "{$v}"), RecordOutcome::Duplicate);
        assert_eq!(acc.successor_count("k"), 1);
        assert_eq!(acc.stats().duplicates, 2);
    }

    #[test]
    fn string_tag_is_stored_as_empty() {
        let mut acc = TaxonomyAccumulator::new();
        assert_eq!(acc.record("k", "string"), RecordOutcome::Inserted);
        let tax = acc.finalize();
        assert!(tax.successors("k").unwrap().contains(""));
    }

    #[test]
    fn empty_value_is_a_noop() {
        let mut acc = TaxonomyAccumulator::new();
        assert_eq!(acc.record("k", ""), RecordOutcome::Discarded);
        assert_eq!(acc.record("k", "}"), RecordOutcome::Discarded);
        assert_eq!(acc.key_count(), 0);

        acc.record("k", "v");
        acc.record("k", "");
        let tax = acc.finalize();
        assert_eq!(tax.successors("k").unwrap().len(), 1);
        assert!(!tax.successors("k").unwrap().contains(""));
    }

    #[test]
    fn keys_are_cleaned() {
        let mut acc = TaxonomyAccumulator::new();
        acc.record("{$owner}", "name");
        acc.record("owner", "sector");
        let tax = acc.finalize();
        assert_eq!(tax.key_count(), 1);
        assert_eq!(tax.successors("owner").unwrap().len(), 2);
    }

    #[test]
    fn counts_never_shrink() {
        let observations = [
            ("a", "b"),
            ("a", "b"),
            ("a", ""),
            ("b", "string"),
            ("", "c"),
            ("a", "c"),
            ("b", "string"),
        ];
        let mut acc = TaxonomyAccumulator::new();
        let mut last_keys = 0;
        let mut last_sizes = BTreeMap::new();
        for (k, v) in observations {
            acc.record(k, v);
            assert!(acc.key_count() >= last_keys);
            last_keys = acc.key_count();
            for key in ["a", "b", ""] {
                let size = acc.successor_count(key);
                let prev = last_sizes.insert(key, size).unwrap_or(0);
                assert!(size >= prev);
            }
        }
        assert_eq!(acc.stats().total(), observations.len());
    }

    #[test]
    fn boolean_seed_is_present() {
        let mut acc = TaxonomyAccumulator::new();
        acc.record("boolean", "maybe");
        acc.seed_boolean();
        let tax = acc.finalize();
        let values = tax.successors(BOOLEAN_KEY).unwrap();
        assert!(values.contains("true") && values.contains("false"));
        assert_eq!(values.len(), 3);
    }
}
