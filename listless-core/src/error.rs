// listless-core - Error types for value demands
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for listless operations.

use std::fmt;

/// Result type for listless operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a demanded value does not exist.
///
/// Neither case is ever recovered internally: an accessor either
/// guarantees presence by construction or hands the error straight to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value was demanded from an empty `Maybe`
    NoValue,
    /// `first`/`rest` walked past the end of a finite sequence
    EndOfSequence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoValue => write!(f, "No value present"),
            Error::EndOfSequence => write!(f, "Reached the end of the sequence"),
        }
    }
}

impl std::error::Error for Error {}
