// Copyright (c) 2025 Typeahead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suggestion engines.
//!
//! Two independent indexing strategies implement the same insert/query
//! contract so their space/time tradeoffs can be compared apples-to-apples:
//!
//! - [`Trie`]: a character trie; queries walk the tree and enumerate the
//!   matching subtree iteratively.
//! - [`PrefixHashIndex`]: a direct prefix-to-entries map; queries are a
//!   single hash lookup at the cost of registering every proper prefix at
//!   insertion time.
//!
//! Both engines are single-threaded and synchronous. Insertion mutates in
//! place with no locking, so concurrent use must be serialized by the caller;
//! `&mut self` makes the compiler enforce that discipline.

pub mod prefix_hash;
pub mod trie;

use std::collections::HashSet;
use std::fmt;

pub use prefix_hash::PrefixHashIndex;
pub use trie::{Node, Trie, TrieError, TrieResult};

use crate::error::TypeaheadResult;

/// Common contract shared by the suggestion engines.
///
/// `insert` indexes one entry; `query` returns every indexed entry sharing
/// the given prefix, as an unordered set. Ranking, deletion, and fuzzy
/// matching are out of scope for every implementor.
pub trait SuggestionEngine {
    /// Indexes a single entry.
    fn insert(&mut self, entry: &str) -> TypeaheadResult<()>;

    /// Returns every indexed entry starting with `prefix`, or an empty set.
    fn query(&self, prefix: &str) -> HashSet<String>;
}

impl SuggestionEngine for Trie {
    fn insert(&mut self, entry: &str) -> TypeaheadResult<()> {
        Trie::insert(self, entry)?;
        Ok(())
    }

    fn query(&self, prefix: &str) -> HashSet<String> {
        Trie::query(self, prefix)
    }
}

impl SuggestionEngine for PrefixHashIndex {
    fn insert(&mut self, entry: &str) -> TypeaheadResult<()> {
        PrefixHashIndex::insert(self, entry);
        Ok(())
    }

    fn query(&self, prefix: &str) -> HashSet<String> {
        PrefixHashIndex::query(self, prefix)
    }
}

/// A suggestion engine chosen at runtime.
#[derive(Debug)]
pub enum Engine {
    /// Character trie engine.
    Trie(Trie),
    /// Prefix-hash index engine.
    PrefixHash(PrefixHashIndex),
}

impl Engine {
    /// The kind of engine wrapped.
    pub fn kind(&self) -> EngineKind {
        match self {
            Engine::Trie(_) => EngineKind::Trie,
            Engine::PrefixHash(_) => EngineKind::PrefixHash,
        }
    }
}

impl SuggestionEngine for Engine {
    fn insert(&mut self, entry: &str) -> TypeaheadResult<()> {
        match self {
            Engine::Trie(trie) => trie.insert(entry).map_err(Into::into),
            Engine::PrefixHash(index) => {
                index.insert(entry);
                Ok(())
            }
        }
    }

    fn query(&self, prefix: &str) -> HashSet<String> {
        match self {
            Engine::Trie(trie) => trie.query(prefix),
            Engine::PrefixHash(index) => index.query(prefix),
        }
    }
}

/// Engine selector, for configuration and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Character trie engine.
    Trie,
    /// Prefix-hash index engine.
    PrefixHash,
}

impl EngineKind {
    /// Builds a fresh, empty engine of this kind.
    pub fn build(self) -> Engine {
        match self {
            EngineKind::Trie => Engine::Trie(Trie::new()),
            EngineKind::PrefixHash => Engine::PrefixHash(PrefixHashIndex::new()),
        }
    }

    /// Stable label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            EngineKind::Trie => "trie",
            EngineKind::PrefixHash => "prefix-hash",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_round_trip() {
        for kind in [EngineKind::Trie, EngineKind::PrefixHash] {
            assert_eq!(kind.build().kind(), kind);
        }
    }

    #[test]
    fn test_engine_dispatch() {
        let mut engine = EngineKind::Trie.build();
        engine.insert("cat").unwrap();
        engine.insert("car").unwrap();

        assert_eq!(engine.query("ca").len(), 2);

        let mut engine = EngineKind::PrefixHash.build();
        engine.insert("cat").unwrap();
        engine.insert("car").unwrap();

        assert_eq!(engine.query("ca").len(), 2);
        // The documented divergence between the two schemes.
        assert!(engine.query("cat").is_empty());
    }

    #[test]
    fn test_engine_kind_labels() {
        assert_eq!(EngineKind::Trie.to_string(), "trie");
        assert_eq!(EngineKind::PrefixHash.to_string(), "prefix-hash");
    }
}
