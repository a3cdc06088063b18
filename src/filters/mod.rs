//! Include/exclude filter-set bookkeeping.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Two parallel mappings from a category key to the values selected for it.
///
/// Invariant: for any key, a value is never in both `includes` and
/// `excludes`. The mutators keep it that way by refusing values already
/// tracked on either side, mirroring the widgets, which only offer untracked
/// values for selection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub includes: BTreeMap<String, BTreeSet<String>>,
    pub excludes: BTreeMap<String, BTreeSet<String>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a previous snapshot, keeping only values present in `data`.
    pub fn seeded(data: &BTreeMap<String, Vec<String>>, initial: Option<&Filters>) -> Self {
        let mut filters = Self::new();
        for (key, pool) in data {
            let includes = filters.includes.entry(key.clone()).or_default();
            let excludes = filters.excludes.entry(key.clone()).or_default();
            if let Some(initial) = initial {
                for value in pool {
                    if initial.has_include(key, value) {
                        includes.insert(value.clone());
                    } else if initial.has_exclude(key, value) {
                        excludes.insert(value.clone());
                    }
                }
            }
        }
        filters
    }

    pub fn has_include(&self, key: &str, value: &str) -> bool {
        self.includes.get(key).is_some_and(|s| s.contains(value))
    }

    pub fn has_exclude(&self, key: &str, value: &str) -> bool {
        self.excludes.get(key).is_some_and(|s| s.contains(value))
    }

    /// Whether a value is already selected on either side of a key.
    pub fn is_tracked(&self, key: &str, value: &str) -> bool {
        self.has_include(key, value) || self.has_exclude(key, value)
    }

    /// Select a value as a required match. No-op when already tracked.
    pub fn include(&mut self, key: &str, value: &str) -> bool {
        if self.is_tracked(key, value) {
            return false;
        }
        self.includes
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string())
    }

    /// Select a value as a forbidden match. No-op when already tracked.
    pub fn exclude(&mut self, key: &str, value: &str) -> bool {
        if self.is_tracked(key, value) {
            return false;
        }
        self.excludes
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn remove_include(&mut self, key: &str, value: &str) -> bool {
        self.includes
            .get_mut(key)
            .is_some_and(|s| s.remove(value))
    }

    pub fn remove_exclude(&mut self, key: &str, value: &str) -> bool {
        self.excludes
            .get_mut(key)
            .is_some_and(|s| s.remove(value))
    }

    /// The selectable pool for a key: every candidate not yet on either side.
    pub fn selectable(&self, key: &str, pool: &[String]) -> Vec<String> {
        pool.iter()
            .filter(|v| !self.is_tracked(key, v))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.includes.values().all(BTreeSet::is_empty)
            && self.excludes.values().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([
            (
                "status".to_string(),
                vec!["open".to_string(), "closed".to_string(), "draft".to_string()],
            ),
            ("author".to_string(), vec!["ada".to_string()]),
        ])
    }

    #[test]
    fn value_never_lands_on_both_sides() {
        let mut filters = Filters::new();
        assert!(filters.include("status", "open"));
        // Excluding an included value is refused, not moved.
        assert!(!filters.exclude("status", "open"));
        assert!(filters.has_include("status", "open"));
        assert!(!filters.has_exclude("status", "open"));

        assert!(filters.exclude("status", "draft"));
        assert!(!filters.include("status", "draft"));
    }

    #[test]
    fn selectable_pool_shrinks_as_values_are_tracked() {
        let data = data();
        let mut filters = Filters::new();
        let pool = &data["status"];

        assert_eq!(filters.selectable("status", pool).len(), 3);
        filters.include("status", "open");
        filters.exclude("status", "closed");
        assert_eq!(filters.selectable("status", pool), vec!["draft"]);
    }

    #[test]
    fn removal_returns_values_to_the_pool() {
        let data = data();
        let mut filters = Filters::new();
        filters.include("status", "open");

        assert!(filters.remove_include("status", "open"));
        assert!(!filters.remove_include("status", "open"));
        assert_eq!(filters.selectable("status", &data["status"]).len(), 3);
    }

    #[test]
    fn seeding_keeps_only_values_known_to_the_pool() {
        let mut previous = Filters::new();
        previous.include("status", "open");
        previous.include("status", "retired value");
        previous.exclude("author", "ada");

        let filters = Filters::seeded(&data(), Some(&previous));
        assert!(filters.has_include("status", "open"));
        assert!(!filters.is_tracked("status", "retired value"));
        assert!(filters.has_exclude("author", "ada"));
        // Every key from the pool is present even when nothing is selected.
        assert!(filters.includes.contains_key("author"));
    }

    #[test]
    fn snapshots_are_value_copies() {
        let mut filters = Filters::new();
        filters.include("status", "open");

        let snapshot = filters.clone();
        filters.include("status", "closed");

        assert!(!snapshot.has_include("status", "closed"));
        assert!(snapshot.has_include("status", "open"));
    }

    #[test]
    fn empty_checks_ignore_empty_sets() {
        let filters = Filters::seeded(&data(), None);
        assert!(filters.is_empty());

        let mut filters = filters;
        filters.include("status", "open");
        assert!(!filters.is_empty());
    }

    #[test]
    fn filters_serialize_round_trip() {
        let mut filters = Filters::new();
        filters.include("status", "open");
        filters.exclude("status", "draft");

        let json = serde_json::to_string(&filters).expect("should serialize");
        let back: Filters = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(filters, back);
    }
}
