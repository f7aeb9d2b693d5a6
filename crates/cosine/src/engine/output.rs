//! Output types for cosine evaluation.
//!
//! ## Purpose
//!
//! This module defines [`CosineOutput`], the shape-preserving result of an
//! evaluation, together with accessors and a human-readable table.
//!
//! ## Design notes
//!
//! * **Mirrors the input**: One variant per input shape.
//! * **Ergonomics**: Implements `Display` for quick inspection.
//!
//! ## Invariants
//!
//! * A labeled output has exactly the key set of its input.
//! * An array output has exactly the length of its input.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::primitives::shape::{LabeledMap, Shape};

// ============================================================================
// Result Structure
// ============================================================================

/// Cosine of a scalar, labeled collection, or array.
#[derive(Debug, Clone, PartialEq)]
pub enum CosineOutput<T> {
    /// Cosine of a single angle.
    Scalar(T),

    /// Cosine of each labeled angle, keyed as in the input.
    Labeled(LabeledMap<T>),

    /// Cosine of each array element, in input order.
    Array(Vec<T>),
}

impl<T: Float> CosineOutput<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The shape of this output.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Labeled(_) => Shape::Labeled,
            Self::Array(_) => Shape::Array,
        }
    }

    /// Number of elements (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Labeled(map) => map.len(),
            Self::Array(values) => values.len(),
        }
    }

    /// Whether the output holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The scalar result, if this is a scalar.
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// The labeled results, if this is a labeled collection.
    pub fn as_labeled(&self) -> Option<&LabeledMap<T>> {
        match self {
            Self::Labeled(map) => Some(map),
            _ => None,
        }
    }

    /// The array results, if this is an array.
    pub fn as_array(&self) -> Option<&[T]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Take the labeled results, if this is a labeled collection.
    pub fn into_labeled(self) -> Option<LabeledMap<T>> {
        match self {
            Self::Labeled(map) => Some(map),
            _ => None,
        }
    }

    /// Take the array results, if this is an array.
    pub fn into_array(self) -> Option<Vec<T>> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for CosineOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Shape:    {}", self.shape().name())?;
        writeln!(f, "  Elements: {}", self.len())?;
        writeln!(f)?;

        match self {
            Self::Scalar(v) => {
                writeln!(f, "{:>12}", "cos")?;
                writeln!(f, "{:-<12}", "")?;
                writeln!(f, "{:>12.6}", v)?;
            }
            Self::Labeled(map) => {
                let width = map.keys().map(|k| k.len()).max().unwrap_or(0).max(5);
                writeln!(f, "{:>width$} {:>12}", "Label", "cos", width = width)?;
                writeln!(f, "{:-<line$}", "", line = width + 13)?;
                for (label, v) in map {
                    writeln!(f, "{:>width$} {:>12.6}", label, v, width = width)?;
                }
            }
            Self::Array(values) => {
                writeln!(f, "{:>8} {:>12}", "Index", "cos")?;
                writeln!(f, "{:-<21}", "")?;

                // Data rows (show first 10 and last 10 if more than 20 points)
                let n = values.len();
                for (idx, v) in values.iter().enumerate() {
                    if n > 20 && idx == 10 {
                        writeln!(f, "{:>8}", "...")?;
                    }
                    if n > 20 && (10..n - 10).contains(&idx) {
                        continue;
                    }
                    writeln!(f, "{:>8} {:>12.6}", idx, v)?;
                }
            }
        }

        Ok(())
    }
}
