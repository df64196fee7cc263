// Copyright (c) 2025 Typeahead Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the trie engine.

/// Errors that can occur in trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieError {
    /// A second child with the same character value was attached under one
    /// parent. Signals a programming error in direct node manipulation; the
    /// public insert path checks for an existing child first.
    #[error("attempted to attach duplicate child '{value}'")]
    DuplicateChild {
        /// The character value that was already present.
        value: char,
    },
}

/// Result type for trie operations.
pub type TrieResult<T> = std::result::Result<T, TrieError>;
