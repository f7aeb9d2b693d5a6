//! Execution engine for element-wise cosine evaluation.
//!
//! ## Purpose
//!
//! This module runs the element pass for each input shape. Scalars call the
//! kernel directly; labeled collections and arrays go through a single slice
//! pass so that extension crates can swap in a parallel implementation.
//!
//! ## Design notes
//!
//! * **Pluggable pass**: A custom [`ElementPassFn`] may be injected (e.g. a
//!   rayon pass from an extension crate). It is only used when parallel
//!   execution is enabled and the input is at least `min_parallel_len` long.
//! * **Fresh output**: Every run allocates its output; inputs are borrowed
//!   immutably and never aliased.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output shape equals input shape.
//! * `output[i] == cos(input[i])` regardless of which pass ran.
//!
//! ## Non-goals
//!
//! * This module does not validate dynamic values (see validator).
//! * This module does not manage thread pools.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::CosineOutput;
use crate::math::trig::{cosine, cosine_chunked};
use crate::primitives::shape::{CosineInput, LabeledMap};

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom element pass function
#[doc(hidden)]
pub type ElementPassFn<T> = fn(
    &[T],     // input angles
    &mut [T], // output (same length as input)
    usize,    // chunk_size
);

/// Default chunk size of the element pass.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Default minimum length before a custom (parallel) pass is used.
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for cosine execution.
#[derive(Debug, Clone)]
pub struct CosineConfig<T> {
    /// Number of elements handed to the pass at a time.
    pub chunk_size: usize,

    /// Inputs shorter than this always run sequentially.
    pub min_parallel_len: usize,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom element pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_element_pass: Option<ElementPassFn<T>>,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T> Default for CosineConfig<T> {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            custom_element_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for cosine evaluation.
#[derive(Debug, Clone)]
pub struct CosineExecutor<T: Float> {
    /// Number of elements handed to the pass at a time.
    pub chunk_size: usize,

    /// Inputs shorter than this always run sequentially.
    pub min_parallel_len: usize,

    /// Custom element pass function (e.g., for parallel execution).
    #[doc(hidden)]
    pub custom_element_pass: Option<ElementPassFn<T>>,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for CosineExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CosineExecutor<T> {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
            custom_element_pass: None,
            parallel: false,
        }
    }

    /// Create a new executor from a `CosineConfig`.
    pub fn from_config(config: &CosineConfig<T>) -> Self {
        Self::new()
            .chunk_size(config.chunk_size)
            .min_parallel_len(config.min_parallel_len)
            .custom_element_pass(config.custom_element_pass)
            .parallel(config.parallel)
    }

    /// Set the chunk size of the element pass.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the minimum length for the custom pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Set a custom element pass function.
    #[doc(hidden)]
    pub fn custom_element_pass(mut self, pass: Option<ElementPassFn<T>>) -> Self {
        self.custom_element_pass = pass;
        self
    }

    /// Set parallel execution mode.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Run with a one-off configuration.
    pub fn run_with_config(input: &CosineInput<T>, config: CosineConfig<T>) -> CosineOutput<T> {
        Self::from_config(&config).run(input)
    }

    /// Evaluate an input of any shape.
    pub fn run(&self, input: &CosineInput<T>) -> CosineOutput<T> {
        match input {
            CosineInput::Scalar(x) => CosineOutput::Scalar(self.run_scalar(*x)),
            CosineInput::Labeled(map) => CosineOutput::Labeled(self.run_labeled(map)),
            CosineInput::Array(values) => CosineOutput::Array(self.run_slice(values)),
        }
    }

    /// Evaluate a single angle.
    #[inline]
    pub fn run_scalar(&self, x: T) -> T {
        cosine(x)
    }

    /// Evaluate every element of a slice into a fresh vector.
    pub fn run_slice(&self, input: &[T]) -> Vec<T> {
        let mut output = Vec::with_capacity(input.len());
        output.resize(input.len(), T::zero());
        self.element_pass(input, &mut output);
        output
    }

    /// Evaluate every value of a labeled collection, keeping its keys.
    pub fn run_labeled(&self, input: &LabeledMap<T>) -> LabeledMap<T> {
        let values: Vec<T> = input.values().copied().collect();
        let results = self.run_slice(&values);
        input
            .keys()
            .cloned()
            .zip(results)
            .collect::<LabeledMap<T>>()
    }

    /// Dispatch the element pass: custom when enabled and worthwhile, sequential otherwise.
    pub fn element_pass(&self, input: &[T], output: &mut [T]) {
        match self.custom_element_pass {
            Some(pass) if self.uses_custom_pass(input.len()) => {
                pass(input, output, self.chunk_size)
            }
            _ => cosine_chunked(input, output, self.chunk_size),
        }
    }

    /// Whether an input of length `n` is routed to the custom pass.
    pub fn uses_custom_pass(&self, n: usize) -> bool {
        self.parallel && self.custom_element_pass.is_some() && n >= self.min_parallel_len
    }
}
