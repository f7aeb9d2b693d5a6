//! Shape-dispatching adapter for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides a single processor that accepts any of the three
//! input shapes, either already typed ([`CosineInput`]) or as a loosely-typed
//! [`Value`] from a scripting layer, and returns a result of matching shape.
//!
//! ## Design notes
//!
//! * **Boundary dispatch**: The shape is resolved once, at the call boundary;
//!   everything past it is statically typed.
//! * **All-or-nothing**: A dynamic value is fully validated before any
//!   element is evaluated.
//!
//! ## Invariants
//!
//! * `evaluate(input).shape() == input.shape()`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CosineConfig, CosineExecutor, ElementPassFn};
use crate::engine::executor::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_PARALLEL_LEN};
use crate::engine::output::CosineOutput;
use crate::engine::validator::Validator;
use crate::primitives::errors::CosineError;
use crate::primitives::shape::CosineInput;
use crate::primitives::value::Value;

// ============================================================================
// Dynamic Cosine Builder
// ============================================================================

/// Builder for the shape-dispatching cosine processor.
#[derive(Debug, Clone)]
pub struct DynamicCosineBuilder<T: Float> {
    /// Number of elements handed to the element pass at a time.
    pub chunk_size: usize,

    /// Minimum collection length for the custom (parallel) pass.
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

impl<T: Float> Default for DynamicCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DynamicCosineBuilder<T> {
    fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            custom_element_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the chunk size of the element pass.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the minimum collection length for the parallel pass.
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

    /// Build the dynamic processor.
    pub fn build(self) -> Result<DynamicCosine<T>, CosineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_chunk_size(self.chunk_size, 1)?;
        Validator::validate_parallel_threshold(self.min_parallel_len, 1)?;

        let config = CosineConfig {
            chunk_size: self.chunk_size,
            min_parallel_len: self.min_parallel_len,
            custom_element_pass: self.custom_element_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(DynamicCosine {
            executor: CosineExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Dynamic Cosine Processor
// ============================================================================

/// Shape-dispatching cosine processor.
#[derive(Debug, Clone)]
pub struct DynamicCosine<T: Float> {
    executor: CosineExecutor<T>,
}

impl<T: Float> DynamicCosine<T> {
    /// Cosine of a typed input, preserving its shape.
    pub fn evaluate(&self, input: &CosineInput<T>) -> CosineOutput<T> {
        self.executor.run(input)
    }

    /// Whether a collection of length `n` would take the custom pass.
    #[doc(hidden)]
    pub fn uses_custom_pass(&self, n: usize) -> bool {
        self.executor.uses_custom_pass(n)
    }
}

impl DynamicCosine<f64> {
    /// Classify a dynamic value, then evaluate it.
    pub fn evaluate_value(&self, value: &Value) -> Result<CosineOutput<f64>, CosineError> {
        let input = Validator::coerce(value)?;
        Ok(self.evaluate(&input))
    }
}
