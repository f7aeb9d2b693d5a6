//! High-level API for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points:
//!
//! * A fluent builder ([`CosineBuilder`]) that ends in an execution adapter
//!   (Scalar, Labeled, Array, or Dynamic).
//! * An overload set ([`ApplyCosine`] and [`cosine`]) that resolves the
//!   input shape statically from the argument type.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CosineBuilder`] via `Cosine::new()`.
//! 2. Chain configuration methods (`.chunk_size()`, `.min_parallel_len()`).
//! 3. Select an adapter via `.adapter(Array)` to get an execution builder.
//! 4. `.build()` it and call `.evaluate(..)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::array::ArrayCosineBuilder;
use crate::adapters::dynamic::DynamicCosineBuilder;
use crate::adapters::labeled::LabeledCosineBuilder;
use crate::adapters::scalar::ScalarCosineBuilder;
use crate::engine::executor::{CosineExecutor, ElementPassFn};

// Publicly re-exported types
pub use crate::adapters::array::ArrayCosine;
pub use crate::adapters::dynamic::DynamicCosine;
pub use crate::adapters::labeled::LabeledCosine;
pub use crate::adapters::scalar::ScalarCosine;
pub use crate::engine::output::CosineOutput;
pub use crate::math::grid::{arange, full_period};
pub use crate::primitives::errors::CosineError;
pub use crate::primitives::shape::{CosineInput, LabeledMap, Shape};
pub use crate::primitives::value::Value;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Array, Dynamic, Labeled, Scalar};
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring cosine evaluation.
#[derive(Debug, Clone)]
pub struct CosineBuilder<T> {
    /// Chunk size of the element pass.
    pub chunk_size: Option<usize>,

    /// Minimum collection length for the parallel pass.
    pub min_parallel_len: Option<usize>,

    // ======================================
    // DEV
    // ======================================
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

impl<T: Float> Default for CosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CosineBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: CosineAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            chunk_size: None,
            min_parallel_len: None,
            custom_element_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of elements handed to the element pass at a time.
    pub fn chunk_size(mut self, size: usize) -> Self {
        if self.chunk_size.is_some() {
            self.duplicate_param = Some("chunk_size");
        }
        self.chunk_size = Some(size);
        self
    }

    /// Set the minimum collection length for the parallel pass.
    pub fn min_parallel_len(mut self, len: usize) -> Self {
        if self.min_parallel_len.is_some() {
            self.duplicate_param = Some("min_parallel_len");
        }
        self.min_parallel_len = Some(len);
        self
    }

    /// Set parallel execution mode.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom element pass function.
    #[doc(hidden)]
    pub fn custom_element_pass(mut self, pass: ElementPassFn<T>) -> Self {
        self.custom_element_pass = Some(pass);
        self
    }
}

// ============================================================================
// Adapter Selection
// ============================================================================

/// Conversion from the generic builder into a shape-specific execution builder.
pub trait CosineAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`CosineBuilder`] into a specialized execution builder.
    fn convert(builder: CosineBuilder<T>) -> Self::Output;
}

/// Marker for single angles.
#[derive(Debug, Clone, Copy)]
pub struct Scalar;

impl<T: Float> CosineAdapter<T> for Scalar {
    type Output = ScalarCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let mut result = ScalarCosineBuilder::default();
        result.duplicate_param = builder.duplicate_param;
        result
    }
}

/// Marker for mappings of string labels to angles.
#[derive(Debug, Clone, Copy)]
pub struct Labeled;

impl<T: Float> CosineAdapter<T> for Labeled {
    type Output = LabeledCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let mut result = LabeledCosineBuilder::default();

        if let Some(chunk_size) = builder.chunk_size {
            result.chunk_size = chunk_size;
        }
        if let Some(len) = builder.min_parallel_len {
            result.min_parallel_len = len;
        }
        result.custom_element_pass = builder.custom_element_pass;
        result.parallel = builder.parallel;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for ordered arrays of angles.
#[derive(Debug, Clone, Copy)]
pub struct Array;

impl<T: Float> CosineAdapter<T> for Array {
    type Output = ArrayCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let mut result = ArrayCosineBuilder::default();

        if let Some(chunk_size) = builder.chunk_size {
            result.chunk_size = chunk_size;
        }
        if let Some(len) = builder.min_parallel_len {
            result.min_parallel_len = len;
        }
        result.custom_element_pass = builder.custom_element_pass;
        result.parallel = builder.parallel;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for inputs whose shape is only known at run time.
#[derive(Debug, Clone, Copy)]
pub struct Dynamic;

impl<T: Float> CosineAdapter<T> for Dynamic {
    type Output = DynamicCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let mut result = DynamicCosineBuilder::default();

        if let Some(chunk_size) = builder.chunk_size {
            result.chunk_size = chunk_size;
        }
        if let Some(len) = builder.min_parallel_len {
            result.min_parallel_len = len;
        }
        result.custom_element_pass = builder.custom_element_pass;
        result.parallel = builder.parallel;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Overload Set
// ============================================================================

/// Element-wise cosine, resolved by argument type.
///
/// Implemented for scalars, slices, vectors, labeled maps and
/// [`CosineInput`]; the output always has the shape of the input.
pub trait ApplyCosine {
    /// Result type, shaped like `Self`.
    type Output;

    /// Cosine of `self`, element-wise for collections.
    fn apply_cosine(&self) -> Self::Output;
}

impl ApplyCosine for f64 {
    type Output = f64;

    fn apply_cosine(&self) -> f64 {
        CosineExecutor::new().run_scalar(*self)
    }
}

impl ApplyCosine for f32 {
    type Output = f32;

    fn apply_cosine(&self) -> f32 {
        CosineExecutor::new().run_scalar(*self)
    }
}

impl<T: Float> ApplyCosine for [T] {
    type Output = Vec<T>;

    fn apply_cosine(&self) -> Vec<T> {
        CosineExecutor::new().run_slice(self)
    }
}

impl<T: Float> ApplyCosine for Vec<T> {
    type Output = Vec<T>;

    fn apply_cosine(&self) -> Vec<T> {
        CosineExecutor::new().run_slice(self)
    }
}

impl<T: Float> ApplyCosine for LabeledMap<T> {
    type Output = LabeledMap<T>;

    fn apply_cosine(&self) -> LabeledMap<T> {
        CosineExecutor::new().run_labeled(self)
    }
}

#[cfg(feature = "std")]
impl<T, S> ApplyCosine for std::collections::HashMap<std::string::String, T, S>
where
    T: Float,
    S: core::hash::BuildHasher + Default,
{
    type Output = std::collections::HashMap<std::string::String, T, S>;

    fn apply_cosine(&self) -> Self::Output {
        let values: Vec<T> = self.values().copied().collect();
        let results = CosineExecutor::new().run_slice(&values);
        self.keys().cloned().zip(results).collect()
    }
}

impl<T: Float> ApplyCosine for CosineInput<T> {
    type Output = CosineOutput<T>;

    fn apply_cosine(&self) -> CosineOutput<T> {
        CosineExecutor::new().run(self)
    }
}

/// Element-wise cosine of a scalar, labeled map, or array.
///
/// ```rust
/// use cosine::prelude::*;
///
/// assert_eq!(cosine(&0.0_f64), 1.0);
/// assert_eq!(cosine(&vec![0.0_f64, 0.0]), vec![1.0, 1.0]);
/// ```
pub fn cosine<I: ApplyCosine + ?Sized>(input: &I) -> I::Output {
    input.apply_cosine()
}
