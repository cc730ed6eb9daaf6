// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.
use thiserror::Error;

/// A specialized [`Result`](std::result::Result) for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when building or combining filters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A construction parameter is out of its accepted range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// Two filters were combined whose bit count or hash count differ.
    #[error("incompatible filters: {left_bits} bits/{left_hashes} hashes vs {right_bits} bits/{right_hashes} hashes")]
    Incompatible {
        /// Bit count of the left-hand filter.
        left_bits: usize,
        /// Hash count of the left-hand filter.
        left_hashes: usize,
        /// Bit count of the right-hand filter.
        right_bits: usize,
        /// Hash count of the right-hand filter.
        right_hashes: usize,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
