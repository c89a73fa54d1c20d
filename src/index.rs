//! Word index over catalog names
//!
//! Maps each lowercase name token to the records whose name contains it.
//! Built once from a [`Catalog`]; the search predicate itself always does a
//! full scan, so this is an inspection aid rather than an accelerator.

use crate::catalog::{Catalog, FoodRecord};
use std::collections::HashMap;

/// Lowercase token -> records (catalog order, one entry per occurrence)
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    buckets: HashMap<String, Vec<FoodRecord>>,
}

/// Split a name into lowercase tokens on runs of whitespace and commas
pub fn tokenize(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// Build the word index for a catalog
pub fn build_index(catalog: &Catalog) -> WordIndex {
    let mut buckets: HashMap<String, Vec<FoodRecord>> = HashMap::new();

    for record in catalog {
        for token in tokenize(&record.name) {
            buckets.entry(token).or_default().push(record.clone());
        }
    }

    log::debug!(
        target: "INDEX",
        "Built word index: {} tokens over {} records",
        buckets.len(),
        catalog.len()
    );

    WordIndex { buckets }
}

impl WordIndex {
    /// Records containing `token` (case-insensitive), empty if unknown
    pub fn get(&self, token: &str) -> &[FoodRecord] {
        self.buckets
            .get(&token.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All tokens, sorted
    pub fn tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.buckets.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[FoodRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn tokenize_splits_on_whitespace_and_comma_runs() {
        let tokens: Vec<String> = tokenize("Salmon,  Atlantic ,wild").collect();
        assert_eq!(tokens, vec!["salmon", "atlantic", "wild"]);
    }

    #[test]
    fn buckets_follow_catalog_order() {
        let index = build_index(&Catalog::reference());
        assert_eq!(ids(index.get("raw")), vec![1, 2, 3, 4, 5, 26, 27, 28, 29, 30, 50]);
        assert_eq!(ids(index.get("Chicken")), vec![6, 7]);
        assert!(index.get("pizzas").is_empty());
    }

    #[test]
    fn repeated_tokens_are_kept() {
        let catalog = Catalog::new(vec![
            FoodRecord::new(1, "Bean, bean salad", "1 cup", 120),
            FoodRecord::new(2, "Beans, baked", "1 cup", 240),
        ])
        .unwrap();

        let index = build_index(&catalog);
        assert_eq!(ids(index.get("bean")), vec![1, 1]);
        assert_eq!(index.tokens(), vec!["baked", "bean", "beans", "salad"]);
    }

    #[test]
    fn empty_catalog_gives_empty_index() {
        let index = build_index(&Catalog::new(Vec::new()).unwrap());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
