//! Array adapter for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for ordered arrays of angles.
//! It evaluates every element into a freshly allocated array of the same
//! length and float type.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Extension hook**: Extension crates inject a parallel element pass
//!   through the hidden `custom_element_pass` setter.
//! * **Generics**: Generic over `Float` types, so `f32` arrays stay `f32`.
//!
//! ## Invariants
//!
//! * Output length equals input length; empty input yields empty output.
//! * Output order matches input order.
//! * NaN and infinite elements are passed to the kernel, not rejected.
//!
//! ## Non-goals
//!
//! * This adapter does not reshape multi-dimensional data.
//! * This adapter does not evaluate in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CosineConfig, CosineExecutor, ElementPassFn};
use crate::engine::executor::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_PARALLEL_LEN};
use crate::engine::validator::Validator;
use crate::primitives::errors::CosineError;
use crate::primitives::value::Value;

// ============================================================================
// Array Cosine Builder
// ============================================================================

/// Builder for the array cosine processor.
#[derive(Debug, Clone)]
pub struct ArrayCosineBuilder<T: Float> {
    /// Number of elements handed to the element pass at a time.
    pub chunk_size: usize,

    /// Minimum array length for the custom (parallel) pass.
    pub min_parallel_len: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom element pass function.
    #[doc(hidden)]
    pub custom_element_pass: Option<ElementPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ArrayCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ArrayCosineBuilder<T> {
    /// Create a new array builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * chunk_size: 1024
    /// * min_parallel_len: 4096
    /// * parallel: false (the core crate has no parallel pass)
    fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            custom_element_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the chunk size of the element pass.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the minimum array length for the parallel pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Set parallel execution mode.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom element pass function.
    #[doc(hidden)]
    pub fn custom_element_pass(mut self, pass: ElementPassFn<T>) -> Self {
        self.custom_element_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the array processor.
    pub fn build(self) -> Result<ArrayCosine<T>, CosineError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate pass parameters
        Validator::validate_chunk_size(self.chunk_size, 1)?;
        Validator::validate_parallel_threshold(self.min_parallel_len, 1)?;

        let config = CosineConfig {
            chunk_size: self.chunk_size,
            min_parallel_len: self.min_parallel_len,
            custom_element_pass: self.custom_element_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(ArrayCosine {
            executor: CosineExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Array Cosine Processor
// ============================================================================

/// Array cosine processor.
#[derive(Debug, Clone)]
pub struct ArrayCosine<T: Float> {
    executor: CosineExecutor<T>,
}

impl<T: Float> ArrayCosine<T> {
    /// Cosine of every element, in order.
    pub fn evaluate(&self, input: &[T]) -> Vec<T> {
        self.executor.run_slice(input)
    }

    /// Whether an array of length `n` would take the custom pass.
    #[doc(hidden)]
    pub fn uses_custom_pass(&self, n: usize) -> bool {
        self.executor.uses_custom_pass(n)
    }
}

impl ArrayCosine<f64> {
    /// Cosine of a dynamic value that must be a sequence of numbers.
    pub fn evaluate_value(&self, value: &Value) -> Result<Vec<f64>, CosineError> {
        let values = Validator::coerce_array(value)?;
        Ok(self.evaluate(&values))
    }
}
