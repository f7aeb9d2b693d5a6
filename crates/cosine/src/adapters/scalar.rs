//! Scalar adapter for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides the adapter for single angles. It has no tuning
//! parameters: a scalar is never worth splitting.
//!
//! ## Invariants
//!
//! * `evaluate(x) == x.cos()` bit for bit.
//! * Dynamic values other than numbers are rejected with `InvalidInputKind`.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::CosineExecutor;
use crate::engine::validator::Validator;
use crate::primitives::errors::CosineError;
use crate::primitives::value::Value;

// ============================================================================
// Scalar Cosine Builder
// ============================================================================

/// Builder for the scalar cosine processor.
#[derive(Debug, Clone)]
pub struct ScalarCosineBuilder<T: Float> {
    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for ScalarCosineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ScalarCosineBuilder<T> {
    /// Create a new scalar builder.
    fn new() -> Self {
        Self {
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Build the scalar processor.
    pub fn build(self) -> Result<ScalarCosine<T>, CosineError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ScalarCosine {
            executor: CosineExecutor::new(),
        })
    }
}

// ============================================================================
// Scalar Cosine Processor
// ============================================================================

/// Scalar cosine processor.
#[derive(Debug, Clone)]
pub struct ScalarCosine<T: Float> {
    executor: CosineExecutor<T>,
}

impl<T: Float> ScalarCosine<T> {
    /// Cosine of `x` radians.
    pub fn evaluate(&self, x: T) -> T {
        self.executor.run_scalar(x)
    }
}

impl ScalarCosine<f64> {
    /// Cosine of a dynamic value that must be a number.
    pub fn evaluate_value(&self, value: &Value) -> Result<f64, CosineError> {
        let x = Validator::coerce_scalar(value)?;
        Ok(self.evaluate(x))
    }
}
