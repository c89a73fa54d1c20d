//! Calorie Counter - food calorie lookup
//!
//! Searches a fixed catalog of foods by name and pages through the matches.
//!
//! # Features
//!
//! - **Substring Search**: Case-insensitive match anywhere in a food name
//! - **Wildcards**: `*` matches any run of characters (`*berry`, `ch*grilled`)
//! - **Pagination**: Results are revealed a page at a time ("load more")
//! - **Word Index**: Token-to-food index for inspecting the catalog
//! - **Terminal UI**: Interactive search widget on top of the same engine
//!
//! # Example
//!
//! ```
//! use calorie_counter::{Catalog, FoodSearch, SearchState};
//!
//! let engine = FoodSearch::new(Catalog::reference());
//!
//! let mut state = SearchState::default();
//! state.query = "*berry".to_string();
//! state.submit(&engine);
//!
//! let names: Vec<&str> = state.visible().iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["Strawberries, raw", "Blueberries, raw"]);
//! assert_eq!(state.summary().as_deref(), Some("Found 2 matching foods"));
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod logging;
pub mod pattern;
pub mod search;
pub mod tui;

// Re-export main types
pub use catalog::{Catalog, FoodRecord};
pub use error::{CalorieError, Result};
pub use index::{build_index, WordIndex};
pub use pattern::{PatternMode, WildcardPattern};
pub use search::{
    has_more, load_more, search, visible_results, FoodSearch, Phase, SearchOutcome, SearchState,
    SearchWarning, DEFAULT_DISPLAY_LIMIT, LOAD_MORE_INCREMENT,
};

use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Column headers for result tables
pub const TABLE_HEADERS: [&str; 3] = ["Food Description", "Portion Size", "Calories"];

/// Pad `text` with spaces to `width` display columns
pub fn pad_to_width(text: &str, width: usize, right_align: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", padding, text)
    } else {
        format!("{}{}", text, padding)
    }
}

/// Format records as aligned plain-text rows (header first).
/// Calories are right-aligned.
pub fn format_table(records: &[FoodRecord]) -> Vec<String> {
    let calories: Vec<String> = records.iter().map(|r| r.calories.to_string()).collect();

    let name_width = records
        .iter()
        .map(|r| r.name.width())
        .chain(std::iter::once(TABLE_HEADERS[0].width()))
        .max()
        .unwrap_or(0);
    let portion_width = records
        .iter()
        .map(|r| r.portion.width())
        .chain(std::iter::once(TABLE_HEADERS[1].width()))
        .max()
        .unwrap_or(0);
    let calories_width = calories
        .iter()
        .map(|c| c.width())
        .chain(std::iter::once(TABLE_HEADERS[2].width()))
        .max()
        .unwrap_or(0);

    let row = |name: &str, portion: &str, kcal: &str| {
        format!(
            "{}  {}  {}",
            pad_to_width(name, name_width, false),
            pad_to_width(portion, portion_width, false),
            pad_to_width(kcal, calories_width, true)
        )
    };

    std::iter::once(row(TABLE_HEADERS[0], TABLE_HEADERS[1], TABLE_HEADERS[2]))
        .chain(
            records
                .iter()
                .zip(&calories)
                .map(|(r, kcal)| row(&r.name, &r.portion, kcal)),
        )
        .collect()
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rows per page (initial display limit and load-more step)
    pub page_size: usize,
    /// How wildcard queries treat regex metacharacters
    pub pattern_mode: PatternMode,
    /// Minimum log level (off, error, warn, info, debug, trace)
    pub log_level: String,
    /// Log file; defaults to a file next to the executable
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_DISPLAY_LIMIT,
            pattern_mode: PatternMode::Escaped,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load a JSON config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| CalorieError::ConfigParseError(path.display().to_string(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CalorieError::InvalidConfig {
                field: "page_size",
                reason: "must be at least 1".to_string(),
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| CalorieError::InvalidConfig {
                field: "log_level",
                reason: format!("unknown level '{}'", self.log_level),
            })
    }

    /// Engine for the built-in catalog using this config's pattern mode
    pub fn engine(&self) -> FoodSearch {
        FoodSearch::new(Catalog::reference()).with_mode(self.pattern_mode)
    }

    /// Empty search state with this config's page size
    pub fn search_state(&self) -> SearchState {
        SearchState::new(self.page_size)
    }
}
