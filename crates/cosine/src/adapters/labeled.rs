//! Labeled collection adapter for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides the execution adapter for mappings of string labels
//! to angles. The result carries exactly the input's key set, each value
//! replaced by its cosine.
//!
//! ## Design notes
//!
//! * **Non-mutating**: The input map is borrowed; a new map is returned.
//! * **Delegation**: Values are gathered into one slice and sent through the
//!   same element pass as arrays, then zipped back with their keys.
//! * **Order**: Key order of the result is not part of the contract.
//!
//! ## Invariants
//!
//! * `output.keys() == input.keys()` as sets.
//! * `output[k] == cos(input[k])` for every key.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{CosineConfig, CosineExecutor, ElementPassFn};
use crate::engine::executor::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_PARALLEL_LEN};
use crate::engine::validator::Validator;
use crate::primitives::errors::CosineError;
use crate::primitives::shape::LabeledMap;
use crate::primitives::value::Value;

// ============================================================================
// Labeled Cosine Builder
// ============================================================================

/// Builder for the labeled collection cosine processor.
#[derive(Debug, Clone)]
pub struct LabeledCosineBuilder<T: Float> {
    /// Number of values handed to the element pass at a time.
    pub chunk_size: usize,

    /// Minimum number of entries for the custom (parallel) pass.
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

impl<T: Float> Default for LabeledCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LabeledCosineBuilder<T> {
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

    /// Set the minimum number of entries for the parallel pass.
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

    /// Build the labeled processor.
    pub fn build(self) -> Result<LabeledCosine<T>, CosineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_chunk_size(self.chunk_size, 1)?;
        Validator::validate_parallel_threshold(self.min_parallel_len, 1)?;

        let config = CosineConfig {
            chunk_size: self.chunk_size,
            min_parallel_len: self.min_parallel_len,
            custom_element_pass: self.custom_element_pass,
            parallel: self.parallel.unwrap_or(false),
        };

        Ok(LabeledCosine {
            executor: CosineExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Labeled Cosine Processor
// ============================================================================

/// Labeled collection cosine processor.
#[derive(Debug, Clone)]
pub struct LabeledCosine<T: Float> {
    executor: CosineExecutor<T>,
}

impl<T: Float> LabeledCosine<T> {
    /// Cosine of every labeled value.
    pub fn evaluate(&self, input: &LabeledMap<T>) -> LabeledMap<T> {
        self.executor.run_labeled(input)
    }

    /// Cosine of every value of a `HashMap`, returning a `HashMap`.
    #[cfg(feature = "std")]
    pub fn evaluate_hashmap<S>(
        &self,
        input: &std::collections::HashMap<std::string::String, T, S>,
    ) -> std::collections::HashMap<std::string::String, T, S>
    where
        S: core::hash::BuildHasher + Default,
    {
        let values: std::vec::Vec<T> = input.values().copied().collect();
        let results = self.executor.run_slice(&values);
        input.keys().cloned().zip(results).collect()
    }

    /// Whether a collection of length `n` would take the custom pass.
    #[doc(hidden)]
    pub fn uses_custom_pass(&self, n: usize) -> bool {
        self.executor.uses_custom_pass(n)
    }
}

impl LabeledCosine<f64> {
    /// Cosine of a dynamic value that must be a mapping of string to number.
    pub fn evaluate_value(&self, value: &Value) -> Result<LabeledMap<f64>, CosineError> {
        let map = Validator::coerce_labeled(value)?;
        Ok(self.evaluate(&map))
    }
}
