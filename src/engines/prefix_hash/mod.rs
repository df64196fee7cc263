// Copyright (c) 2025 Typeahead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix-hash index engine for prefix suggestion.
//!
//! Trades memory for query time: every proper prefix of an inserted entry
//! becomes a map key whose value is the set of entries sharing it, so a query
//! is a single O(1) average hash lookup instead of a tree walk.
//!
//! One deliberate quirk of the scheme, preserved exactly: an entry's own
//! full-length key is never registered. Querying a prefix equal to a complete
//! entry therefore does not return that entry, while the trie engine does.
//! See `tests/engine_divergence.rs` for the pinned behavior.
//!
//! # Example
//!
//! ```
//! use typeahead::engines::PrefixHashIndex;
//!
//! let mut index = PrefixHashIndex::new();
//! index.insert("cat");
//! index.insert("car");
//!
//! assert_eq!(index.query("ca").len(), 2);
//! // Full-length keys are not registered by design.
//! assert!(index.query("cat").is_empty());
//! ```

use std::collections::{HashMap, HashSet};

/// Direct mapping from every proper prefix of the inserted entries to the set
/// of entries sharing that prefix.
///
/// Entries are created on first observation of a prefix and only ever grow;
/// nothing is removed. Insertion takes `&mut self`; callers needing
/// concurrent access must serialize it themselves.
#[derive(Debug, Default)]
pub struct PrefixHashIndex {
    map: HashMap<String, HashSet<String>>,
}

impl PrefixHashIndex {
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no prefixes have been registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct prefixes registered. Useful when comparing the
    /// space cost of the two engines.
    pub fn prefix_count(&self) -> usize {
        self.map.len()
    }

    /// Indexes `entry` under every proper, non-empty prefix of itself.
    ///
    /// For an entry of `n` characters, the keys are the prefixes of length
    /// `1..=n-1`; the full-length key is deliberately excluded. Entries of
    /// one character or fewer register nothing. Re-inserting an entry is
    /// idempotent: the sets already contain it.
    pub fn insert(&mut self, entry: &str) {
        // char_indices yields byte offsets at character starts; skipping the
        // first gives exactly the proper non-empty prefixes.
        for (offset, _) in entry.char_indices().skip(1) {
            let key = &entry[..offset];
            match self.map.get_mut(key) {
                Some(set) => {
                    set.insert(entry.to_owned());
                }
                None => {
                    let mut set = HashSet::new();
                    set.insert(entry.to_owned());
                    self.map.insert(key.to_owned(), set);
                }
            }
        }
    }

    /// Returns the set registered under `prefix`, or an empty set when the
    /// prefix was never observed as a proper prefix of any inserted entry.
    pub fn query(&self, prefix: &str) -> HashSet<String> {
        self.map.get(prefix).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_query_proper_prefixes() {
        let mut index = PrefixHashIndex::new();
        index.insert("cat");
        index.insert("car");

        assert_eq!(index.query("c"), set(&["cat", "car"]));
        assert_eq!(index.query("ca"), set(&["cat", "car"]));
    }

    #[test]
    fn test_full_length_key_excluded() {
        let mut index = PrefixHashIndex::new();
        index.insert("cat");
        index.insert("car");

        // Full words are excluded from the key set by design.
        assert!(index.query("cat").is_empty());
        assert!(index.query("car").is_empty());
    }

    #[test]
    fn test_longer_entry_registers_shorter_word_as_key() {
        let mut index = PrefixHashIndex::new();
        index.insert("car");
        index.insert("carpet");

        // "car" is a proper prefix of "carpet", so the key exists and holds
        // "carpet" only; "car" itself never registered its full length.
        assert_eq!(index.query("car"), set(&["carpet"]));
        assert_eq!(index.query("ca"), set(&["car", "carpet"]));
    }

    #[test]
    fn test_unknown_prefix_is_empty() {
        let mut index = PrefixHashIndex::new();
        index.insert("cat");

        assert!(index.query("x").is_empty());
        assert!(index.query("").is_empty());
    }

    #[test]
    fn test_single_character_entry_registers_nothing() {
        let mut index = PrefixHashIndex::new();
        index.insert("a");
        index.insert("");

        assert!(index.is_empty());
        assert!(index.query("a").is_empty());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut index = PrefixHashIndex::new();
        index.insert("cat");
        let before = index.query("ca");

        index.insert("cat");

        assert_eq!(index.query("ca"), before);
        assert_eq!(index.prefix_count(), 2);
    }

    #[test]
    fn test_unicode_prefix_boundaries() {
        let mut index = PrefixHashIndex::new();
        index.insert("日本語");

        assert_eq!(index.query("日"), set(&["日本語"]));
        assert_eq!(index.query("日本"), set(&["日本語"]));
        assert!(index.query("日本語").is_empty());
    }
}
