//! High-level API for cosine evaluation with parallel execution support.
//!
//! ## Purpose
//!
//! This module extends the `cosine` API with adapters that spread large
//! arrays and labeled collections over all CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `cosine` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution above `min_parallel_len`.
//! * **Transparent**: Marker types (Array, Labeled, Dynamic) select the parallel builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CosineBuilder`] via `Cosine::new()`.
//! 2. Chain configuration methods (`.chunk_size()`, `.min_parallel_len()`).
//! 3. Select an adapter via `.adapter(Array)` to get a parallel execution builder.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::array::ParallelArrayCosineBuilder;
use crate::adapters::dynamic::ParallelDynamicCosineBuilder;
use crate::adapters::labeled::ParallelLabeledCosineBuilder;

// Import base marker types for delegation
use cosine::internals::api::Array as BaseArray;
use cosine::internals::api::Dynamic as BaseDynamic;
use cosine::internals::api::Labeled as BaseLabeled;

// Publicly re-exported types
pub use cosine::internals::api::{
    arange, cosine, full_period, ApplyCosine, CosineAdapter, CosineBuilder, Scalar,
};
pub use cosine::internals::engine::output::CosineOutput;
pub use cosine::internals::primitives::errors::CosineError;
pub use cosine::internals::primitives::shape::{CosineInput, LabeledMap, Shape};
pub use cosine::internals::primitives::value::Value;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Array, Dynamic, Labeled, Scalar};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel array evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Array;

impl<T: Float> CosineAdapter<T> for Array {
    type Output = ParallelArrayCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        // User choice, otherwise parallel
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseArray as CosineAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelArrayCosineBuilder { base }
    }
}

/// Marker for parallel labeled collection evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Labeled;

impl<T: Float> CosineAdapter<T> for Labeled {
    type Output = ParallelLabeledCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseLabeled as CosineAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelLabeledCosineBuilder { base }
    }
}

/// Marker for parallel evaluation of inputs whose shape is known at run time.
#[derive(Debug, Clone, Copy)]
pub struct Dynamic;

impl<T: Float> CosineAdapter<T> for Dynamic {
    type Output = ParallelDynamicCosineBuilder<T>;

    fn convert(builder: CosineBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let mut base = <BaseDynamic as CosineAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        ParallelDynamicCosineBuilder { base }
    }
}
