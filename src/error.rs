//! Error module for the typeahead crate.
//!
//! The engines themselves have a single failure mode (duplicate child
//! attachment in direct node manipulation); everything else here belongs to
//! the harness and the report plumbing. Errors are never caught inside the
//! core; they propagate unchanged to the caller.

use std::path::PathBuf;

use thiserror::Error;

use crate::engines::TrieError;

/// Result type alias used throughout the crate.
pub type TypeaheadResult<T> = Result<T, TypeaheadError>;

/// Core error enum for the typeahead crate.
#[derive(Error, Debug)]
pub enum TypeaheadError {
    /// Errors raised by the trie engine.
    #[error("trie engine error: {0}")]
    Trie(#[from] TrieError),

    /// IO errors while loading a corpus file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors while emitting a timing report.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The corpus holds fewer usable lines than the harness was asked to
    /// sample.
    #[error("corpus '{}' has {available} usable lines, {requested} requested", path.display())]
    CorpusTooSmall {
        /// Path of the corpus file.
        path: PathBuf,
        /// Usable (non-empty) lines found.
        available: usize,
        /// Lines the harness was configured to sample.
        requested: usize,
    },

    /// Two engines disagreed on a query beyond the documented full-word
    /// divergence.
    #[error("engines disagree for prefix '{prefix}': {detail}")]
    ResultsMismatch {
        /// The queried prefix.
        prefix: String,
        /// What differed.
        detail: String,
    },
}
