//! Search engine and pagination
//!
//! [`search`] turns a raw query into either a user-facing warning or the
//! ordered list of matching records. [`SearchState`] is the state a front
//! end carries between user actions (query, results, warning, display limit)
//! and the operations that move it along.

use crate::catalog::{Catalog, FoodRecord};
use crate::index::{build_index, WordIndex};
use crate::pattern::{is_wildcard, PatternMode, WildcardPattern};
use std::fmt;

/// Rows shown after a fresh search
pub const DEFAULT_DISPLAY_LIMIT: usize = 25;

/// Rows added by one "load more"
pub const LOAD_MORE_INCREMENT: usize = 25;

/// Expected, user-facing reasons a search produced no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchWarning {
    EmptyQuery,
    NoMatches,
}

impl SearchWarning {
    pub fn message(&self) -> &'static str {
        match self {
            SearchWarning::EmptyQuery => "Please enter a search term",
            SearchWarning::NoMatches => "No matching foods found",
        }
    }
}

impl fmt::Display for SearchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Warning(SearchWarning),
    /// Non-empty, in catalog order
    Matches(Vec<FoodRecord>),
}

/// Run a query against the catalog.
///
/// Plain queries are case-insensitive substring matches on the name; queries
/// containing `*` go through the wildcard compiler. A wildcard query that
/// fails to compile is reported as no matches.
pub fn search(query: &str, catalog: &Catalog, mode: PatternMode) -> SearchOutcome {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return SearchOutcome::Warning(SearchWarning::EmptyQuery);
    }

    let matched: Vec<FoodRecord> = if is_wildcard(&term) {
        match WildcardPattern::compile(&term, mode) {
            Ok(pattern) => catalog
                .iter()
                .filter(|food| pattern.is_match(&food.name.to_lowercase()))
                .cloned()
                .collect(),
            Err(e) => {
                log::warn!(target: "SEARCH", "{}", e);
                Vec::new()
            }
        }
    } else {
        catalog
            .iter()
            .filter(|food| food.name.to_lowercase().contains(&term))
            .cloned()
            .collect()
    };

    log::debug!(
        target: "SEARCH",
        "query='{}' mode={:?} matches={}",
        term,
        mode,
        matched.len()
    );

    if matched.is_empty() {
        SearchOutcome::Warning(SearchWarning::NoMatches)
    } else {
        SearchOutcome::Matches(matched)
    }
}

/// Grow a display limit by one increment. Never clamps.
pub fn load_more(current_limit: usize, increment: usize) -> usize {
    current_limit + increment
}

/// The leading `display_limit` results
pub fn visible_results(results: &[FoodRecord], display_limit: usize) -> &[FoodRecord] {
    &results[..display_limit.min(results.len())]
}

pub fn has_more(results: &[FoodRecord], display_limit: usize) -> bool {
    results.len() > display_limit
}

/// Results not yet shown
pub fn remaining(results: &[FoodRecord], display_limit: usize) -> usize {
    results.len().saturating_sub(display_limit)
}

// ============================================================================
// Engine
// ============================================================================

/// A catalog, its word index and the pattern mode, bundled for repeated searches
#[derive(Debug, Clone)]
pub struct FoodSearch {
    catalog: Catalog,
    index: WordIndex,
    mode: PatternMode,
}

impl FoodSearch {
    /// Takes ownership of the catalog and builds its word index
    pub fn new(catalog: Catalog) -> Self {
        let index = build_index(&catalog);
        Self {
            catalog,
            index,
            mode: PatternMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: PatternMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        search(query, &self.catalog, self.mode)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn mode(&self) -> PatternMode {
        self.mode
    }
}

// ============================================================================
// Search State
// ============================================================================

/// Where a front end currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet, or cleared
    Idle,
    Warning(SearchWarning),
    Showing { total: usize, display_limit: usize },
}

/// Query, results, warning and display limit owned by a front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<FoodRecord>,
    pub warning: Option<SearchWarning>,
    pub display_limit: usize,
    page_size: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_LIMIT)
    }
}

impl SearchState {
    /// `page_size` is both the initial display limit and the load-more step
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            query: String::new(),
            results: Vec::new(),
            warning: None,
            display_limit: page_size,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Search for the current query and take on the outcome
    pub fn submit(&mut self, engine: &FoodSearch) {
        let outcome = engine.search(&self.query);
        self.apply(outcome);
    }

    /// Replace results/warning with a search outcome.
    ///
    /// Warnings drop any previous results; matches reset the display limit.
    pub fn apply(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Warning(warning) => {
                self.warning = Some(warning);
                self.results.clear();
            }
            SearchOutcome::Matches(records) => {
                self.warning = None;
                self.results = records;
                self.display_limit = self.page_size;
            }
        }
    }

    /// Show one more page. Does nothing once every result is visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.display_limit = load_more(self.display_limit, self.page_size);
        true
    }

    /// Back to the idle state
    pub fn clear(&mut self) {
        *self = Self::new(self.page_size);
    }

    pub fn phase(&self) -> Phase {
        if let Some(warning) = self.warning {
            Phase::Warning(warning)
        } else if self.results.is_empty() {
            Phase::Idle
        } else {
            Phase::Showing {
                total: self.results.len(),
                display_limit: self.display_limit,
            }
        }
    }

    pub fn visible(&self) -> &[FoodRecord] {
        visible_results(&self.results, self.display_limit)
    }

    pub fn has_more(&self) -> bool {
        has_more(&self.results, self.display_limit)
    }

    pub fn remaining(&self) -> usize {
        remaining(&self.results, self.display_limit)
    }

    /// "Found N matching food(s)", with "(showing M)" once results exceed a page
    pub fn summary(&self) -> Option<String> {
        let total = self.results.len();
        if total == 0 {
            return None;
        }

        let mut text = format!(
            "Found {} matching food{}",
            total,
            if total != 1 { "s" } else { "" }
        );
        if total > self.page_size {
            text.push_str(&format!(" (showing {})", self.visible().len()));
        }
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foods(count: u32) -> Catalog {
        Catalog::new(
            (1..=count)
                .map(|id| FoodRecord::new(id, format!("Food {}", id), "1 cup", id * 10))
                .collect(),
        )
        .unwrap()
    }

    fn ids(records: &[FoodRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_and_blank_queries_warn() {
        let catalog = Catalog::reference();
        for query in ["", "   ", "\t\n"] {
            assert_eq!(
                search(query, &catalog, PatternMode::Escaped),
                SearchOutcome::Warning(SearchWarning::EmptyQuery)
            );
        }
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let catalog = Catalog::reference();
        match search("  chicken  ", &catalog, PatternMode::Escaped) {
            SearchOutcome::Matches(records) => assert_eq!(ids(&records), vec![6, 7]),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn broken_raw_pattern_is_no_matches() {
        let catalog = Catalog::reference();
        assert_eq!(
            search("[*", &catalog, PatternMode::Raw),
            SearchOutcome::Warning(SearchWarning::NoMatches)
        );
    }

    #[test]
    fn load_more_never_clamps() {
        assert_eq!(load_more(25, 25), 50);
        assert_eq!(load_more(1000, LOAD_MORE_INCREMENT), 1025);
    }

    #[test]
    fn visible_results_handles_short_lists() {
        let catalog = foods(3);
        assert_eq!(visible_results(catalog.records(), 25).len(), 3);
        assert_eq!(visible_results(catalog.records(), 2).len(), 2);
        assert!(!has_more(catalog.records(), 3));
        assert!(has_more(catalog.records(), 2));
        assert_eq!(remaining(catalog.records(), 1), 2);
        assert_eq!(remaining(catalog.records(), 10), 0);
    }

    #[test]
    fn state_load_more_stops_at_the_end() {
        let engine = FoodSearch::new(foods(30));
        let mut state = SearchState::default();
        state.query = "food".to_string();
        state.submit(&engine);

        assert!(state.load_more());
        assert_eq!(state.display_limit, 50);
        assert!(!state.load_more());
        assert_eq!(state.display_limit, 50);
    }

    #[test]
    fn warning_keeps_display_limit_but_drops_results() {
        let engine = FoodSearch::new(foods(60));
        let mut state = SearchState::default();
        state.query = "food".to_string();
        state.submit(&engine);
        state.load_more();

        state.query = "nothing here".to_string();
        state.submit(&engine);
        assert_eq!(state.phase(), Phase::Warning(SearchWarning::NoMatches));
        assert!(state.results.is_empty());
        assert_eq!(state.display_limit, 50);
    }

    #[test]
    fn summary_pluralizes_and_reports_partial_view() {
        let mut state = SearchState::default();
        assert_eq!(state.summary(), None);

        state.apply(SearchOutcome::Matches(foods(1).records().to_vec()));
        assert_eq!(state.summary().as_deref(), Some("Found 1 matching food"));

        state.apply(SearchOutcome::Matches(foods(25).records().to_vec()));
        assert_eq!(state.summary().as_deref(), Some("Found 25 matching foods"));

        state.apply(SearchOutcome::Matches(foods(30).records().to_vec()));
        assert_eq!(state.summary().as_deref(), Some("Found 30 matching foods (showing 25)"));

        state.load_more();
        assert_eq!(state.summary().as_deref(), Some("Found 30 matching foods (showing 30)"));
    }

    #[test]
    fn custom_page_size() {
        let mut state = SearchState::new(10);
        state.apply(SearchOutcome::Matches(foods(25).records().to_vec()));
        assert_eq!(state.visible().len(), 10);
        assert_eq!(state.remaining(), 15);
        state.load_more();
        assert_eq!(state.display_limit, 20);

        state.clear();
        assert_eq!(state.display_limit, 10);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn zero_page_size_is_bumped_to_one() {
        assert_eq!(SearchState::new(0).page_size(), 1);
    }

    #[test]
    fn warning_display() {
        assert_eq!(SearchWarning::NoMatches.to_string(), "No matching foods found");
        assert_eq!(SearchWarning::EmptyQuery.to_string(), "Please enter a search term");
    }
}
