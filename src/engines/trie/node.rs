// Copyright (c) 2025 Typeahead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the character trie.
//!
//! Each node holds one character and its children in insertion order. The
//! alphabet is unbounded (any `char`), so children are kept in an associative
//! structure rather than an array indexed by code point, which would be far
//! too sparse at every node.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use fnv::FnvHashMap;

use super::error::TrieError;

/// Reserved value for the root node. Never appears as a real input character.
pub(crate) const ROOT_SENTINEL: char = '\0';

/// Process-wide source of node identities. Uniqueness is the only requirement,
/// so a relaxed monotonic counter is enough.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// A node in the character trie.
///
/// Equality and hashing compare `value` alone, which is what domain-level node
/// comparison wants but cannot distinguish two node instances carrying the
/// same character at different tree positions. Traversal bookkeeping therefore
/// keys off [`Node::id`], a token minted once at construction and unique per
/// live node instance.
#[derive(Debug)]
pub struct Node {
    /// The character stored in this node.
    value: char,

    /// Owned children, in insertion order.
    children: Vec<Node>,

    /// Character to position in `children`; kept consistent with `children`
    /// at all times, giving O(1) lookup and existence checks.
    children_index: FnvHashMap<char, usize>,

    /// Whether some inserted string terminates exactly at this node.
    leaf: bool,

    /// Identity token for traversal bookkeeping. Stable for the node's
    /// lifetime and never shared with another live node.
    id: u64,
}

impl Node {
    /// Creates a new node holding `value`, with a fresh identity.
    pub fn new(value: char) -> Self {
        Self {
            value,
            children: Vec::new(),
            children_index: FnvHashMap::default(),
            leaf: false,
            id: NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// The character stored in this node.
    pub fn value(&self) -> char {
        self.value
    }

    /// Whether some inserted string terminates exactly at this node.
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub(crate) fn mark_leaf(&mut self) {
        self.leaf = true;
    }

    /// The identity token for this node instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The children of this node, in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Position of the child holding `value`, if one exists.
    pub fn child_position(&self, value: char) -> Option<usize> {
        self.children_index.get(&value).copied()
    }

    /// Whether a child holding `value` exists.
    pub fn has_child(&self, value: char) -> bool {
        self.children_index.contains_key(&value)
    }

    /// Attaches `node` as a new child keyed by its value and returns its
    /// position in the child list.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::DuplicateChild`] if a child with the same value is
    /// already present. A duplicate is a usage error in direct node
    /// manipulation, never a silent no-op; [`Trie::insert`](super::Trie::insert)
    /// checks for an existing child before attaching.
    pub fn add_child(&mut self, node: Node) -> Result<usize, TrieError> {
        if self.children_index.contains_key(&node.value) {
            return Err(TrieError::DuplicateChild { value: node.value });
        }
        let position = self.children.len();
        self.children_index.insert(node.value, position);
        self.children.push(node);
        Ok(position)
    }

    pub(crate) fn child_mut(&mut self, position: usize) -> &mut Node {
        &mut self.children[position]
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_records_position() {
        let mut node = Node::new('a');

        assert_eq!(node.add_child(Node::new('b')).unwrap(), 0);
        assert_eq!(node.add_child(Node::new('c')).unwrap(), 1);

        assert_eq!(node.child_position('b'), Some(0));
        assert_eq!(node.child_position('c'), Some(1));
        assert!(node.has_child('b'));
        assert!(!node.has_child('x'));

        // Insertion order is preserved for deterministic enumeration.
        let values: Vec<char> = node.children().iter().map(Node::value).collect();
        assert_eq!(values, vec!['b', 'c']);
    }

    #[test]
    fn test_add_duplicate_child_fails() {
        let mut node = Node::new('a');
        node.add_child(Node::new('b')).unwrap();

        let err = node.add_child(Node::new('b')).unwrap_err();
        assert_eq!(err, TrieError::DuplicateChild { value: 'b' });

        // The failed attach must not disturb existing state.
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.child_position('b'), Some(0));
    }

    #[test]
    fn test_identity_unique_for_equal_values() {
        let first = Node::new('z');
        let second = Node::new('z');

        // Domain equality is by value alone...
        assert_eq!(first, second);
        // ...but each instance carries its own identity.
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_new_node_is_not_leaf() {
        let node = Node::new('a');
        assert!(!node.is_leaf());
        assert!(node.children().is_empty());
    }
}
