//! Array adapter for cosine evaluation with parallel support.
//!
//! ## Purpose
//!
//! This module wraps the `cosine` array adapter and injects the rayon element
//! pass when parallel execution is enabled. It also accepts `ndarray` 1-D
//! arrays and returns them as `Array1`.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and execution stay in the `cosine` crate.
//! * **Parallel-first**: Parallel by default; inputs shorter than
//!   `min_parallel_len` still run sequentially.
//! * **Feature-gated**: Without the `cpu` feature the pass is always sequential.
//!
//! ## Invariants
//!
//! * Output length and order match the input.
//! * Parallel and sequential results are bitwise identical.
//!
//! ## Non-goals
//!
//! * This adapter does not evaluate in place.
//! * This adapter does not copy strided `ndarray` views.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::element_pass_parallel;

// External dependencies
use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use num_traits::Float;
use std::result::Result;

// Export dependencies from cosine crate
use cosine::internals::adapters::array::{ArrayCosine, ArrayCosineBuilder};
use cosine::internals::primitives::errors::CosineError;
use cosine::internals::primitives::value::Value;

// Internal dependencies
use crate::input::CosineArrayInput;

// ============================================================================
// Extended Array Cosine Builder
// ============================================================================

/// Builder for the array cosine processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelArrayCosineBuilder<T: Float> {
    /// Base builder from the cosine crate
    pub base: ArrayCosineBuilder<T>,
}

impl<T: Float> Default for ParallelArrayCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelArrayCosineBuilder<T> {
    /// Create a new array builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from cosine ArrayCosineBuilder
    /// * parallel: true (fastCosine extension)
    fn new() -> Self {
        let base = ArrayCosineBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the chunk size handed to each parallel task.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.base = self.base.chunk_size(chunk_size);
        self
    }

    /// Set the minimum array length for the parallel pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.base = self.base.min_parallel_len(len);
        self
    }
}

impl<T: Float + Send + Sync> ParallelArrayCosineBuilder<T> {
    /// Build the array processor.
    pub fn build(self) -> Result<ParallelArrayCosine<T>, CosineError> {
        let mut builder = self.base;
        let parallel = builder.parallel.unwrap_or(true);

        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder.custom_element_pass(element_pass_parallel);
            } else {
                builder.custom_element_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_element_pass = None;
        }

        debug!(
            "array adapter: parallel={}, min_parallel_len={}, chunk_size={}",
            parallel && builder.custom_element_pass.is_some(),
            builder.min_parallel_len,
            builder.chunk_size
        );

        let inner = builder.build()?;
        Ok(ParallelArrayCosine { inner })
    }
}

// ============================================================================
// Extended Array Cosine Processor
// ============================================================================

/// Array cosine processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelArrayCosine<T: Float> {
    inner: ArrayCosine<T>,
}

impl<T: Float> ParallelArrayCosine<T> {
    /// Cosine of every element of a slice, vector, or contiguous `ndarray`.
    pub fn evaluate<I>(&self, input: &I) -> Result<Vec<T>, CosineError>
    where
        I: CosineArrayInput<T> + ?Sized,
    {
        let x = input.as_cosine_slice()?;
        debug!(
            "evaluating {} elements ({} pass)",
            x.len(),
            if self.uses_parallel_pass(x.len()) {
                "parallel"
            } else {
                "sequential"
            }
        );
        Ok(self.inner.evaluate(x))
    }

    /// Cosine of every element of a 1-D `ndarray`, returned as `Array1`.
    pub fn evaluate_ndarray<S>(&self, input: &ArrayBase<S, Ix1>) -> Result<Array1<T>, CosineError>
    where
        S: Data<Elem = T>,
    {
        self.evaluate(input).map(Array1::from_vec)
    }

    /// Whether an array of length `n` would take the parallel pass.
    pub fn uses_parallel_pass(&self, n: usize) -> bool {
        self.inner.uses_custom_pass(n)
    }
}

impl ParallelArrayCosine<f64> {
    /// Cosine of a dynamic value that must be a sequence of numbers.
    pub fn evaluate_value(&self, value: &Value) -> Result<Vec<f64>, CosineError> {
        self.inner.evaluate_value(value)
    }
}
