//! Wildcard pattern compiler
//!
//! Queries may contain `*`, meaning "zero or more of any character". Every
//! other character is literal in [`PatternMode::Escaped`]; in
//! [`PatternMode::Raw`] it is handed to the regex engine as-is.
//!
//! In escaped mode a pattern also matches when it matches some prefix of the
//! name that ends on a `-ies` plural read as its `-y` singular, so `*berry`
//! finds "Strawberries" while `*y,` still finds nothing there. Raw mode
//! matches the name exactly as the regex would.

use crate::error::{CalorieError, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

pub const WILDCARD: char = '*';

/// How non-wildcard characters of a query are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// Literal text plus `*` only
    #[default]
    Escaped,
    /// Regex metacharacters in the query keep their regex meaning
    Raw,
}

/// A compiled, case-insensitive, unanchored wildcard pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
    /// Same pattern anchored at the end; only built in escaped mode
    singular: Option<Regex>,
}

/// A name with its `-ies` words rewritten to `-y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingularName {
    pub text: String,
    /// Byte offsets in `text` just past each rewritten word
    pub word_ends: Vec<usize>,
}

/// Does the query use wildcard syntax at all?
pub fn is_wildcard(query: &str) -> bool {
    query.contains(WILDCARD)
}

/// Translate a wildcard query into regex syntax
fn translate(query: &str, mode: PatternMode) -> String {
    match mode {
        PatternMode::Raw => query.replace(WILDCARD, ".*"),
        PatternMode::Escaped => query
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*"),
    }
}

/// Rewrite words ending in `ies` to end in `y` ("berries" -> "berry").
/// `None` when no word changes.
pub fn fold_plurals(name: &str) -> Option<SingularName> {
    if !name.to_ascii_lowercase().contains("ies") {
        return None;
    }

    let mut folded = SingularName {
        text: String::with_capacity(name.len()),
        word_ends: Vec::new(),
    };
    let mut word = String::new();
    for c in name.chars() {
        if c.is_alphanumeric() {
            word.push(c);
        } else {
            folded.push_word(&word);
            word.clear();
            folded.text.push(c);
        }
    }
    folded.push_word(&word);

    if folded.word_ends.is_empty() {
        None
    } else {
        Some(folded)
    }
}

impl SingularName {
    fn push_word(&mut self, word: &str) {
        let stem_len = word.len().saturating_sub(3);
        if word.len() > 3
            && word.is_char_boundary(stem_len)
            && word[stem_len..].eq_ignore_ascii_case("ies")
        {
            self.text.push_str(&word[..stem_len]);
            self.text.push('y');
            self.word_ends.push(self.text.len());
        } else {
            self.text.push_str(word);
        }
    }
}

fn build(pattern: &str, query: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| CalorieError::PatternError(query.to_string(), e))
}

impl WildcardPattern {
    pub fn compile(query: &str, mode: PatternMode) -> Result<Self> {
        let translated = translate(query, mode);
        let regex = build(&translated, query)?;
        let singular = match mode {
            PatternMode::Escaped => Some(build(&format!("(?:{})$", translated), query)?),
            PatternMode::Raw => None,
        };

        Ok(Self {
            source: query.to_string(),
            regex,
            singular,
        })
    }

    /// True if the pattern occurs anywhere in `name`, or (escaped mode)
    /// ends exactly on a singularized plural
    pub fn is_match(&self, name: &str) -> bool {
        if self.regex.is_match(name) {
            return true;
        }
        let (Some(singular), Some(folded)) = (&self.singular, fold_plurals(name)) else {
            return false;
        };
        folded
            .word_ends
            .iter()
            .any(|&end| singular.is_match(&folded.text[..end]))
    }

    /// The query this pattern was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }
}
