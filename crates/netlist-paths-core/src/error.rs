//! # Error Taxonomy
//!
//! A single closed error enum shared by every fallible operation in the
//! crate: ingest, transform, name resolution, and path queries.
//!
//! - No silent failures; every fallible path returns `Result<T, Error>`.
//! - "No path found" is not an error — queries return an empty `Vec`/`Path`.

use thiserror::Error;

/// Errors produced by ingest, transform, and query operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A name did not resolve to any vertex.
    #[error("not found: {0}")]
    NotFound(String),

    /// A name resolved to more than one vertex and the caller did not
    /// request match-any semantics.
    #[error("ambiguous name {name:?}: {count} matches")]
    Ambiguous {
        /// The pattern that was resolved.
        name: String,
        /// How many vertices it matched.
        count: usize,
    },

    /// A wildcard or regular-expression pattern was malformed.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why the pattern engine rejected it.
        reason: String,
    },

    /// The AST document violated a structural invariant ingest depends on.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A filesystem or subprocess operation failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The document describes something ingest cannot handle, such as a
    /// design with more than one top module or with interfaces present.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub(crate) fn ambiguous(name: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            name: name.into(),
            count,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
