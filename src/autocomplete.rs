//! Autocomplete collaborators for the incremental search widget.
//!
//! The widget only knows the [`Autocomplete`] trait. Hosts either implement
//! it or pass a closure; [`WordList`] is a ready-made substring matcher.

use crate::error::{BoxError, DialogError, Result};
use crate::types::SearchResult;

/// Maps a query and a result limit to ranked suggestions.
pub trait Autocomplete {
    /// Called after every edit of the search buffer, including when the
    /// buffer becomes empty. Errors abort the search.
    fn complete(&mut self, query: &str, limit: usize) -> Result<Vec<SearchResult>>;
}

impl<F> Autocomplete for F
where
    F: FnMut(&str, usize) -> std::result::Result<Vec<SearchResult>, BoxError>,
{
    fn complete(&mut self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        self(query, limit).map_err(|source| DialogError::Autocomplete {
            query: query.to_string(),
            source,
        })
    }
}

// ============================================================================
// WORD LIST
// ============================================================================

const LOREM: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod \
    tempor incididunt ut labore et dolore magna aliqua Ut enim ad minim veniam quis nostrud \
    exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat Duis aute irure dolor \
    in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur Excepteur \
    sint occaecat cupidatat non proident sunt in culpa qui officia deserunt mollit anim id est \
    laborum";

/// Substring matcher over a fixed list of words.
///
/// Each match is annotated with its upper-cased form. Word order is kept,
/// duplicates included.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The demo corpus: lower-cased lorem ipsum.
    pub fn lorem() -> Self {
        WordList::new(LOREM.split_whitespace().map(str::to_lowercase))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words containing `query`, first `limit` only.
    pub fn matches(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        if query.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|word| word.contains(query))
            .take(limit)
            .map(|word| SearchResult::new(word.clone(), word.to_uppercase()))
            .collect()
    }
}

impl Autocomplete for WordList {
    fn complete(&mut self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        Ok(self.matches(query, limit))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_nothing() {
        let words = WordList::lorem();
        assert!(words.matches("", 10).is_empty());
    }

    #[test]
    fn substring_matches_are_annotated_upper_case() {
        let words = WordList::new(["alpha", "beta", "palace"]);
        assert_eq!(
            words.matches("al", 10),
            vec![
                SearchResult::new("alpha", "ALPHA"),
                SearchResult::new("palace", "PALACE"),
            ]
        );
    }

    #[test]
    fn matches_respect_limit() {
        let words = WordList::lorem();
        assert_eq!(words.matches("o", 3).len(), 3);
    }

    #[test]
    fn lorem_is_lower_cased() {
        let words = WordList::lorem();
        assert_eq!(words.len(), 69);
        assert_eq!(words.matches("lorem", 5), vec![SearchResult::new("lorem", "LOREM")]);
        assert!(words.matches("Lorem", 5).is_empty());
    }

    #[test]
    fn closure_errors_become_autocomplete_errors() {
        let mut failing = |_: &str, _: usize| -> std::result::Result<Vec<SearchResult>, BoxError> {
            Err("backend down".into())
        };
        let err = failing.complete("q", 5).unwrap_err();
        match err {
            DialogError::Autocomplete { query, source } => {
                assert_eq!(query, "q");
                assert_eq!(source.to_string(), "backend down");
            }
            other => panic!("Expected Autocomplete error, got {other:?}"),
        }
    }
}
