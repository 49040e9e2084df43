use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Category;

/// Counts for the candidates of one category: candidate name -> votes,
/// in the order the candidates were first added
pub type CandidateCounts = IndexMap<String, u64>;

/// Vote document: category id -> candidate name -> votes
///
/// Entries for categories or candidates that no longer exist are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteTable(IndexMap<String, CandidateCounts>);

impl VoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zero entry for every category/candidate pair that is missing
    ///
    /// Existing counts are never touched. Returns true if anything was added.
    pub fn synchronize(&mut self, categories: &[Category]) -> bool {
        let mut updated = false;

        for category in categories {
            let counts = self.0.entry(category.id.clone()).or_insert_with(|| {
                updated = true;
                CandidateCounts::new()
            });
            for candidate in &category.candidates {
                if !counts.contains_key(candidate) {
                    counts.insert(candidate.clone(), 0);
                    updated = true;
                }
            }
        }

        updated
    }

    /// Add one vote for a pair, creating the entry at zero first if needed
    pub fn increment(&mut self, category_id: &str, candidate: &str) -> u64 {
        let count = self
            .0
            .entry(category_id.to_string())
            .or_default()
            .entry(candidate.to_string())
            .or_insert(0);
        *count += 1;
        *count
    }

    /// Current count for a pair, zero when absent
    pub fn count(&self, category_id: &str, candidate: &str) -> u64 {
        self.0
            .get(category_id)
            .and_then(|counts| counts.get(candidate))
            .copied()
            .unwrap_or(0)
    }

    pub fn category(&self, category_id: &str) -> Option<&CandidateCounts> {
        self.0.get(category_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, candidates: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            icon: String::new(),
            description: String::new(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_synchronize_adds_zero_entries() {
        let mut table = VoteTable::new();
        let categories = vec![category("best-actor", &["A", "B"]), category("empty", &[])];

        assert!(table.synchronize(&categories));
        assert_eq!(table.category("best-actor").unwrap().len(), 2);
        assert_eq!(table.count("best-actor", "A"), 0);
        assert_eq!(table.count("best-actor", "B"), 0);

        // A category without candidates still gets its sub-mapping
        assert!(table.category("empty").unwrap().is_empty());
    }

    #[test]
    fn test_synchronize_is_idempotent() {
        let mut table = VoteTable::new();
        let categories = vec![category("best-actor", &["A", "B"])];

        assert!(table.synchronize(&categories));
        let snapshot = table.clone();
        assert!(!table.synchronize(&categories));
        assert_eq!(table, snapshot);
    }

    #[test]
    fn test_synchronize_keeps_counts_and_stale_entries() {
        let mut table = VoteTable::new();
        table.synchronize(&[category("best-actor", &["A", "B"])]);
        table.increment("best-actor", "A");
        table.increment("best-actor", "B");

        // B dropped from the category, C added, another category added
        let changed = table.synchronize(&[
            category("best-actor", &["A", "C"]),
            category("best-film", &["X"]),
        ]);

        assert!(changed);
        assert_eq!(table.count("best-actor", "A"), 1);
        assert_eq!(table.count("best-actor", "B"), 1);
        assert_eq!(table.count("best-actor", "C"), 0);
        assert_eq!(table.count("best-film", "X"), 0);
    }

    #[test]
    fn test_increment_initializes_missing_pair() {
        let mut table = VoteTable::new();

        assert_eq!(table.increment("best-actor", "A"), 1);
        assert_eq!(table.increment("best-actor", "A"), 2);
        assert_eq!(table.count("best-actor", "A"), 2);
    }

    #[test]
    fn test_count_defaults_to_zero() {
        let table = VoteTable::new();
        assert_eq!(table.count("missing", "A"), 0);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut table = VoteTable::new();
        table.synchronize(&[category("z-cat", &["Zed", "Amy"]), category("a-cat", &["M"])]);
        table.increment("z-cat", "Bob");

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"{"z-cat":{"Zed":0,"Amy":0,"Bob":1},"a-cat":{"M":0}}"#
        );

        // Order survives a round trip through the document
        let parsed: VoteTable = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = parsed
            .category("z-cat")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Bob"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut table = VoteTable::new();
        table.increment("best-actor", "A");

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({ "best-actor": { "A": 1 } }));

        let parsed: VoteTable = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, table);
    }
}
