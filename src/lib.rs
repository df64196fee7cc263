//! typeahead — prefix-based string suggestion.
//!
//! Indexes a corpus of strings so that, for any prefix, every indexed string
//! beginning with that prefix can be retrieved. Two engines implement the
//! same contract, enabling apples-to-apples comparison of their space/time
//! tradeoffs:
//!
//! - [`Trie`]: a character trie with iterative, cycle-safe depth-first
//!   enumeration of the matching subtree.
//! - [`PrefixHashIndex`]: a direct map from every proper prefix to the
//!   entries sharing it; O(1) average queries at a steep memory cost.
//!
//! The [`AutoComplete`] facade gives both a uniform insert/query surface, and
//! [`harness::Benchmark`] compares them on a real corpus.
//!
//! # Example
//!
//! ```
//! use typeahead::{AutoComplete, Trie};
//!
//! let mut autocomplete = AutoComplete::new(Trie::new());
//! autocomplete.insert_batch(["cat", "car", "dog"]).unwrap();
//!
//! let matches = autocomplete.query("ca");
//! assert!(matches.contains("cat") && matches.contains("car"));
//! ```

pub mod autocomplete;
pub mod engines;
pub mod error;
pub mod harness;

#[cfg(test)]
pub(crate) mod tests;

pub use autocomplete::AutoComplete;
pub use engines::{Engine, EngineKind, PrefixHashIndex, SuggestionEngine, Trie};
pub use error::{TypeaheadError, TypeaheadResult};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
