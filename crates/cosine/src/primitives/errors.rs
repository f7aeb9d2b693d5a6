//! Error types for cosine evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while dispatching
//! an input to the cosine adapter, coercing its elements, or configuring an
//! execution adapter.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending kind or element location.
//! * **All-or-nothing**: An error is always reported before any output is produced.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Shape errors**: The value is not a scalar, labeled collection, or array.
//! 2. **Element errors**: A member of a collection is not a real number.
//! 3. **Parameter validation**: Invalid chunk size or parallel threshold.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or partial results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for cosine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CosineError {
    /// The value is none of {scalar number, mapping of string to number, sequence of numbers}.
    InvalidInputKind(String),

    /// An element of a labeled collection or array is not a real number.
    NonNumericElement {
        /// Where the element sits, e.g. `index 3` or `key "pi"`.
        location: String,
        /// Kind of value found in its place.
        found: &'static str,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Chunk size for the element pass must be at least `min`.
    InvalidChunkSize {
        /// The chunk size provided.
        got: usize,
        /// Minimum allowed chunk size.
        min: usize,
    },

    /// Minimum array length for the parallel pass must be at least `min`.
    InvalidParallelThreshold {
        /// The threshold provided.
        got: usize,
        /// Minimum allowed threshold.
        min: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CosineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInputKind(kind) => write!(
                f,
                "Invalid input kind: {kind} (expected a number, a mapping of string to number, or a sequence of numbers)"
            ),
            Self::NonNumericElement { location, found } => {
                write!(f, "Non-numeric element at {location}: found {found}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidChunkSize { got, min } => {
                write!(f, "Invalid chunk_size: {got} (must be at least {min})")
            }
            Self::InvalidParallelThreshold { got, min } => {
                write!(f, "Invalid min_parallel_len: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CosineError {}
