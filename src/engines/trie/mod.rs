// Copyright (c) 2025 Typeahead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character trie engine for prefix suggestion.
//!
//! A traditional (non-radix) trie over `char`s. Supports insertion and prefix
//! query only; entries are never deleted and the tree never shrinks.
//!
//! # Features
//!
//! - Unbounded alphabet: any code point can appear at any position.
//! - Deterministic enumeration: children are kept in insertion order.
//! - Iterative depth-first enumeration with an explicit stack, so query depth
//!   never consumes call stack regardless of entry length or tree skew.
//! - Per-node identity tokens keep the traversal bookkeeping correct even
//!   when many sibling subtrees carry equal character values.
//!
//! # Example
//!
//! ```
//! use typeahead::engines::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat").unwrap();
//! trie.insert("car").unwrap();
//! trie.insert("dog").unwrap();
//!
//! let matches = trie.query("ca");
//! assert!(matches.contains("cat"));
//! assert!(matches.contains("car"));
//! assert_eq!(matches.len(), 2);
//!
//! // The empty prefix never lists everything.
//! assert!(trie.query("").is_empty());
//! ```

mod error;
mod node;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use fnv::FnvHashMap;

pub use error::{TrieError, TrieResult};
pub use node::Node;
use node::ROOT_SENTINEL;

/// Character trie mapping prefixes to the set of inserted entries that share
/// them.
///
/// Insertion takes `&mut self`; callers needing concurrent access must
/// serialize it themselves.
#[derive(Debug)]
pub struct Trie {
    /// Root of the tree. Holds a reserved sentinel value and is never a leaf.
    root: Node,
}

impl Trie {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::new(ROOT_SENTINEL),
        }
    }

    /// Whether no entries have been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }

    /// Inserts `entry` into the trie.
    ///
    /// Walks from the root one character at a time, lazily creating a node
    /// per missing character, and marks the final node as a leaf. Re-inserting
    /// an existing entry is idempotent. Inserting the empty string is a no-op:
    /// the root is never marked as a leaf.
    ///
    /// # Errors
    ///
    /// Propagates [`TrieError::DuplicateChild`] from node attachment. The
    /// error arm is unreachable through this path because existence is
    /// checked before attaching.
    pub fn insert(&mut self, entry: &str) -> TrieResult<()> {
        if entry.is_empty() {
            return Ok(());
        }

        let mut current = &mut self.root;
        for c in entry.chars() {
            let position = match current.child_position(c) {
                Some(position) => position,
                None => current.add_child(Node::new(c))?,
            };
            current = current.child_mut(position);
        }
        current.mark_leaf();
        Ok(())
    }

    /// Whether `entry` was inserted as a complete entry (not merely as a
    /// prefix of another entry).
    pub fn contains(&self, entry: &str) -> bool {
        if entry.is_empty() {
            return false;
        }
        self.descend(entry).map_or(false, Node::is_leaf)
    }

    /// Returns every inserted entry that starts with `prefix`.
    ///
    /// The empty prefix returns an empty set: there is no "list everything"
    /// behavior. A prefix that leaves the tree at any character also returns
    /// an empty set.
    pub fn query(&self, prefix: &str) -> HashSet<String> {
        if prefix.is_empty() {
            return HashSet::new();
        }
        match self.descend(prefix) {
            Some(node) => Self::collect_words(node, prefix),
            None => HashSet::new(),
        }
    }

    /// Walks the tree along `path`, returning the node reached when every
    /// character is present.
    fn descend(&self, path: &str) -> Option<&Node> {
        let mut current = &self.root;
        for c in path.chars() {
            let position = current.child_position(c)?;
            current = &current.children()[position];
        }
        Some(current)
    }

    /// Collects every entry reachable from `start`, pairing each
    /// leaf-terminated path with the accumulated `prefix`.
    ///
    /// Iterative depth-first traversal: an explicit stack of nodes, a mutable
    /// current word extended on descent and truncated (one character) on
    /// ascent, and a next-unexplored-child cursor per node on the stack path.
    /// Cursors are keyed by node identity, not value, so sibling nodes with
    /// equal characters never alias each other's state. Each reachable node
    /// is visited exactly once.
    fn collect_words(start: &Node, prefix: &str) -> HashSet<String> {
        let mut words = HashSet::new();
        let mut stack: Vec<&Node> = vec![start];
        let mut cursors: FnvHashMap<u64, usize> = FnvHashMap::default();
        let mut word = String::from(prefix);

        while let Some(&node) = stack.last() {
            if node.children().is_empty() {
                // Nothing below: record if terminal, then backtrack.
                if node.is_leaf() {
                    words.insert(word.clone());
                }
                stack.pop();
                word.pop();
            } else if let Some(cursor) = cursors.get_mut(&node.id()) {
                if *cursor + 1 < node.children().len() {
                    // Siblings remain: descend into the next one.
                    *cursor += 1;
                    let child = &node.children()[*cursor];
                    stack.push(child);
                    word.push(child.value());
                } else {
                    // Subtree fully explored.
                    stack.pop();
                    word.pop();
                }
            } else {
                // First visit: record if terminal, then descend leftmost.
                if node.is_leaf() {
                    words.insert(word.clone());
                }
                cursors.insert(node.id(), 0);
                let child = &node.children()[0];
                stack.push(child);
                word.push(child.value());
            }
        }

        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
