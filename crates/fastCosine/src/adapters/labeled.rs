//! Labeled collection adapter with parallel support.
//!
//! ## Purpose
//!
//! This module wraps the `cosine` labeled adapter. Values are gathered into
//! one slice, so large collections go through the same rayon pass as arrays.
//!
//! ## Invariants
//!
//! * The result has exactly the key set of the input.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::element_pass_parallel;

// External dependencies
use log::debug;
use num_traits::Float;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::result::Result;

// Export dependencies from cosine crate
use cosine::internals::adapters::labeled::{LabeledCosine, LabeledCosineBuilder};
use cosine::internals::primitives::errors::CosineError;
use cosine::internals::primitives::shape::LabeledMap;
use cosine::internals::primitives::value::Value;

// ============================================================================
// Extended Labeled Cosine Builder
// ============================================================================

/// Builder for the labeled cosine processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelLabeledCosineBuilder<T: Float> {
    /// Base builder from the cosine crate
    pub base: LabeledCosineBuilder<T>,
}

impl<T: Float> Default for ParallelLabeledCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelLabeledCosineBuilder<T> {
    fn new() -> Self {
        let base = LabeledCosineBuilder::default().parallel(true);
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

    /// Set the minimum number of entries for the parallel pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.base = self.base.min_parallel_len(len);
        self
    }
}

impl<T: Float + Send + Sync> ParallelLabeledCosineBuilder<T> {
    /// Build the labeled processor.
    pub fn build(self) -> Result<ParallelLabeledCosine<T>, CosineError> {
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
            builder.custom_element_pass = None;
        }

        debug!(
            "labeled adapter: parallel={}, min_parallel_len={}",
            parallel && builder.custom_element_pass.is_some(),
            builder.min_parallel_len
        );

        let inner = builder.build()?;
        Ok(ParallelLabeledCosine { inner })
    }
}

// ============================================================================
// Extended Labeled Cosine Processor
// ============================================================================

/// Labeled collection cosine processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelLabeledCosine<T: Float> {
    inner: LabeledCosine<T>,
}

impl<T: Float> ParallelLabeledCosine<T> {
    /// Cosine of every labeled value.
    pub fn evaluate(&self, input: &LabeledMap<T>) -> LabeledMap<T> {
        self.inner.evaluate(input)
    }

    /// Cosine of every value of a `HashMap`, returning a `HashMap`.
    pub fn evaluate_hashmap<S>(&self, input: &HashMap<String, T, S>) -> HashMap<String, T, S>
    where
        S: BuildHasher + Default,
    {
        self.inner.evaluate_hashmap(input)
    }

    /// Whether a collection of `n` entries would take the parallel pass.
    pub fn uses_parallel_pass(&self, n: usize) -> bool {
        self.inner.uses_custom_pass(n)
    }
}

impl ParallelLabeledCosine<f64> {
    /// Cosine of a dynamic value that must be a mapping of string to number.
    pub fn evaluate_value(&self, value: &Value) -> Result<LabeledMap<f64>, CosineError> {
        self.inner.evaluate_value(value)
    }
}
