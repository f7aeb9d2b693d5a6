//! Shape-dispatching adapter with parallel support.
//!
//! ## Purpose
//!
//! This module wraps the `cosine` dynamic adapter, used where the input
//! shape is only known at run time (e.g. from a scripting layer).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::element_pass_parallel;

// External dependencies
use log::debug;
use num_traits::Float;
use std::result::Result;

// Export dependencies from cosine crate
use cosine::internals::adapters::dynamic::{DynamicCosine, DynamicCosineBuilder};
use cosine::internals::engine::output::CosineOutput;
use cosine::internals::primitives::errors::CosineError;
use cosine::internals::primitives::shape::CosineInput;
use cosine::internals::primitives::value::Value;

// ============================================================================
// Extended Dynamic Cosine Builder
// ============================================================================

/// Builder for the shape-dispatching processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelDynamicCosineBuilder<T: Float> {
    /// Base builder from the cosine crate
    pub base: DynamicCosineBuilder<T>,
}

impl<T: Float> Default for ParallelDynamicCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelDynamicCosineBuilder<T> {
    fn new() -> Self {
        let base = DynamicCosineBuilder::default().parallel(true);
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

    /// Set the minimum collection length for the parallel pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.base = self.base.min_parallel_len(len);
        self
    }
}

impl<T: Float + Send + Sync> ParallelDynamicCosineBuilder<T> {
    /// Build the dynamic processor.
    pub fn build(self) -> Result<ParallelDynamicCosine<T>, CosineError> {
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
            "dynamic adapter: parallel={}, min_parallel_len={}",
            parallel && builder.custom_element_pass.is_some(),
            builder.min_parallel_len
        );

        let inner = builder.build()?;
        Ok(ParallelDynamicCosine { inner })
    }
}

// ============================================================================
// Extended Dynamic Cosine Processor
// ============================================================================

/// Shape-dispatching cosine processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelDynamicCosine<T: Float> {
    inner: DynamicCosine<T>,
}

impl<T: Float> ParallelDynamicCosine<T> {
    /// Cosine of a typed input, preserving its shape.
    pub fn evaluate(&self, input: &CosineInput<T>) -> CosineOutput<T> {
        self.inner.evaluate(input)
    }

    /// Whether a collection of length `n` would take the parallel pass.
    pub fn uses_parallel_pass(&self, n: usize) -> bool {
        self.inner.uses_custom_pass(n)
    }
}

impl ParallelDynamicCosine<f64> {
    /// Classify a dynamic value, then evaluate it.
    pub fn evaluate_value(&self, value: &Value) -> Result<CosineOutput<f64>, CosineError> {
        let out = self.inner.evaluate_value(value)?;
        debug!("evaluated {} {} element(s)", out.len(), out.shape().name());
        Ok(out)
    }
}
