//! AutoComplete facade over the suggestion engines.
//!
//! The facade dispatches `insert` and `query` verbatim to whichever engine it
//! wraps and holds no state of its own beyond the engine instance. Use it to
//! feed a batch of raw lines into an index without caring which engine is
//! behind it.

use std::collections::HashSet;

use crate::engines::SuggestionEngine;
use crate::error::TypeaheadResult;

/// Uniform insert/query surface over a suggestion engine.
///
/// # Example
///
/// ```
/// use typeahead::{AutoComplete, Trie};
///
/// let mut autocomplete = AutoComplete::new(Trie::new());
/// autocomplete.insert_batch(["cat", "car", "dog"]).unwrap();
///
/// assert_eq!(autocomplete.query("ca").len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct AutoComplete<E> {
    engine: E,
}

impl<E: SuggestionEngine> AutoComplete<E> {
    /// Wraps `engine`.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Indexes a single entry.
    pub fn insert<S: AsRef<str>>(&mut self, entry: S) -> TypeaheadResult<()> {
        self.engine.insert(entry.as_ref())
    }

    /// Indexes every entry in the batch, in order. Stops at the first engine
    /// error, leaving earlier entries indexed.
    pub fn insert_batch<I, S>(&mut self, entries: I) -> TypeaheadResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            self.engine.insert(entry.as_ref())?;
        }
        Ok(())
    }

    /// Returns every indexed entry starting with `prefix`, or an empty set.
    pub fn query(&self, prefix: &str) -> HashSet<String> {
        self.engine.query(prefix)
    }

    /// Borrows the wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Unwraps the facade.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{EngineKind, PrefixHashIndex, Trie};

    #[test]
    fn test_facade_delegates_to_trie() {
        let mut autocomplete = AutoComplete::new(Trie::new());
        autocomplete.insert("cat").unwrap();
        autocomplete.insert_batch(["car", "dog"]).unwrap();

        assert_eq!(autocomplete.query("ca").len(), 2);
        assert_eq!(autocomplete.query("do").len(), 1);
        assert!(autocomplete.query("").is_empty());
    }

    #[test]
    fn test_facade_delegates_to_prefix_hash() {
        let mut autocomplete = AutoComplete::new(PrefixHashIndex::new());
        autocomplete.insert_batch(vec!["cat".to_string(), "car".to_string()]).unwrap();

        assert_eq!(autocomplete.query("c").len(), 2);
        assert!(autocomplete.query("cat").is_empty());
    }

    #[test]
    fn test_facade_over_runtime_engine() {
        let mut autocomplete = AutoComplete::new(EngineKind::Trie.build());
        autocomplete.insert("dog").unwrap();

        assert!(autocomplete.query("d").contains("dog"));
        assert_eq!(autocomplete.engine().kind(), EngineKind::Trie);
    }
}
