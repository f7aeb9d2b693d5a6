//! Input abstractions for array evaluation.
//!
//! ## Purpose
//!
//! This module lets the array adapters accept slices, vectors, and `ndarray`
//! 1-D arrays through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a view of the caller's buffer.
//! * **Fail-fast**: Strided `ndarray` views are rejected instead of copied.
//!
//! ## Invariants
//!
//! * The returned slice covers every element of the input, in order.
//!
//! ## Non-goals
//!
//! * This module does not reshape multi-dimensional arrays.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from cosine crate
use cosine::internals::primitives::errors::CosineError;

/// Types that can be evaluated by the array adapters.
pub trait CosineArrayInput<T: Float> {
    /// View the input as a contiguous slice.
    fn as_cosine_slice(&self) -> Result<&[T], CosineError>;
}

impl<T: Float> CosineArrayInput<T> for [T] {
    fn as_cosine_slice(&self) -> Result<&[T], CosineError> {
        Ok(self)
    }
}

impl<T: Float> CosineArrayInput<T> for Vec<T> {
    fn as_cosine_slice(&self) -> Result<&[T], CosineError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> CosineArrayInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_cosine_slice(&self) -> Result<&[T], CosineError> {
        self.as_slice().ok_or_else(|| {
            CosineError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
