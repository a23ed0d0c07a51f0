//! Error types for the host boundary
//!
//! This module defines every failure shape a primitive call or extension
//! lifecycle hook can produce. We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.
//!
//! All variants are plain data, so errors are `Clone + PartialEq` and host
//! code can match on them directly. `KeyNotFound` is the sentinel condition:
//! [`Error::is_key_not_found`] distinguishes "truly absent" from every other
//! failure shape.

use thiserror::Error;

/// Result type alias for boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors crossing the host boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument did not have the expected type.
    ///
    /// Raised during argument extraction, before any store access. Positions
    /// are 1-based, matching how an embedded-language user counts arguments.
    #[error("{primitive}: expected {expected} at argument {position}, got {actual}")]
    WrongType {
        /// Primitive that rejected the argument
        primitive: String,
        /// 1-based argument position
        position: usize,
        /// Expected type name
        expected: &'static str,
        /// Type name of the value that arrived
        actual: &'static str,
    },

    /// Lookup missed and the caller supplied no fallback
    #[error("{primitive}: key {key:?} not found")]
    KeyNotFound {
        /// Primitive that performed the lookup
        primitive: String,
        /// The key that was absent
        key: String,
    },

    /// Argument count outside the declared contract
    #[error("{primitive}: expected {expected} arguments, got {got}")]
    Arity {
        /// Primitive that was invoked
        primitive: String,
        /// Human-readable count contract ("exactly 2", "at least 1", ...)
        expected: String,
        /// Number of arguments in the call frame
        got: usize,
    },

    /// A primitive name is already taken in the registry
    #[error("duplicate primitive: {name}")]
    DuplicatePrimitive {
        /// The colliding name
        name: String,
    },

    /// No primitive registered under the invoked name
    #[error("unknown primitive: {name}")]
    UnknownPrimitive {
        /// The name that missed
        name: String,
    },

    /// Extension shutdown failed
    #[error("extension {name}: close failed: {reason}")]
    Shutdown {
        /// Extension identifier
        name: String,
        /// What went wrong
        reason: String,
    },
}

impl Error {
    /// Sentinel test: is this the key-not-found condition?
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }
}
