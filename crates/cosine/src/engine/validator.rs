//! Input validation for cosine configuration and dynamic data.
//!
//! ## Purpose
//!
//! This module classifies loosely-typed [`Value`]s into one of the accepted
//! shapes, coerces their elements to floats, and validates execution
//! parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **All-or-nothing**: The whole value is checked before a typed input is
//!   returned, so no caller ever sees a partially converted collection.
//! * **Shape before element**: Structural problems (nested containers, mixed
//!   sequences, non-string keys) are reported as `InvalidInputKind`; a member
//!   that simply is not a number is reported as `NonNumericElement`.
//!
//! ## Key concepts
//!
//! * **Scalars**: `Float` and `Integer`; booleans are not numbers.
//! * **Labeled collections**: `Map` with `Text` keys and numeric values.
//! * **Arrays**: `List` of numbers.
//!
//! ## Invariants
//!
//! * A successfully coerced input has the same key set or length as the value.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the cosine.
//! * This module does not repair or drop invalid elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::errors::CosineError;
use crate::primitives::shape::{CosineInput, LabeledMap, Shape};
use crate::primitives::value::Value;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for cosine configuration and dynamic input data.
///
/// Provides static methods that return `Result<_, CosineError>` and fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Dynamic Input Validation
    // ========================================================================

    /// Determine the shape of a dynamic value without coercing it.
    pub fn classify(value: &Value) -> Result<Shape, CosineError> {
        match value {
            Value::Float(_) | Value::Integer(_) => Ok(Shape::Scalar),
            Value::Map(_) => Ok(Shape::Labeled),
            Value::List(_) => Ok(Shape::Array),
            other => Err(Self::invalid_kind(other)),
        }
    }

    /// Validate a dynamic value and convert it to a typed input.
    pub fn coerce(value: &Value) -> Result<CosineInput<f64>, CosineError> {
        match Self::classify(value)? {
            Shape::Scalar => Self::coerce_scalar(value).map(CosineInput::Scalar),
            Shape::Labeled => Self::coerce_labeled(value).map(CosineInput::Labeled),
            Shape::Array => Self::coerce_array(value).map(CosineInput::Array),
        }
    }

    /// Coerce a scalar value to `f64`.
    pub fn coerce_scalar(value: &Value) -> Result<f64, CosineError> {
        value.as_f64().ok_or_else(|| Self::invalid_kind(value))
    }

    /// Coerce a mapping of string keys to numbers.
    pub fn coerce_labeled(value: &Value) -> Result<LabeledMap<f64>, CosineError> {
        let Value::Map(entries) = value else {
            return Err(Self::invalid_kind(value));
        };

        // Check 1: All keys are strings
        for (key, _) in entries {
            if !matches!(key, Value::Text(_)) {
                return Err(CosineError::InvalidInputKind(format!(
                    "mapping with {} key",
                    key.kind_name()
                )));
            }
        }

        // Check 2: All values are numbers
        let mut map = LabeledMap::new();
        for (key, item) in entries {
            let Value::Text(label) = key else {
                continue;
            };
            match item.as_f64() {
                Some(v) => {
                    map.insert(label.clone(), v);
                }
                None => {
                    return Err(CosineError::NonNumericElement {
                        location: format!("key {:?}", label),
                        found: item.kind_name(),
                    });
                }
            }
        }

        Ok(map)
    }

    /// Coerce a sequence of numbers.
    pub fn coerce_array(value: &Value) -> Result<Vec<f64>, CosineError> {
        let Value::List(items) = value else {
            return Err(Self::invalid_kind(value));
        };

        // Check 1: No nested containers
        if let Some(nested) = items.iter().find(|item| item.is_container()) {
            return Err(CosineError::InvalidInputKind(format!(
                "sequence containing a nested {}",
                nested.kind_name()
            )));
        }

        // Check 2: Either all numbers or none
        let numeric = items.iter().filter(|item| item.as_f64().is_some()).count();
        if numeric != 0 && numeric != items.len() {
            return Err(CosineError::InvalidInputKind(String::from(
                "mixed-type sequence",
            )));
        }
        if numeric == 0 {
            if let Some(first) = items.first() {
                return Err(CosineError::NonNumericElement {
                    location: String::from("index 0"),
                    found: first.kind_name(),
                });
            }
        }

        Ok(items.iter().filter_map(Value::as_f64).collect())
    }

    fn invalid_kind(value: &Value) -> CosineError {
        match value {
            Value::Other(type_name) => {
                CosineError::InvalidInputKind(format!("object of type {type_name}"))
            }
            other => CosineError::InvalidInputKind(String::from(other.kind_name())),
        }
    }

    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that an input has the shape an adapter expects.
    pub fn validate_shape(expected: Shape, got: Shape) -> Result<(), CosineError> {
        if expected != got {
            return Err(CosineError::InvalidInputKind(format!(
                "{} (this adapter expects a {})",
                got.name(),
                expected.name()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the chunk size of the element pass.
    pub fn validate_chunk_size(chunk_size: usize, min: usize) -> Result<(), CosineError> {
        if chunk_size < min {
            return Err(CosineError::InvalidChunkSize {
                got: chunk_size,
                min,
            });
        }
        Ok(())
    }

    /// Validate the minimum array length for the parallel pass.
    pub fn validate_parallel_threshold(threshold: usize, min: usize) -> Result<(), CosineError> {
        if threshold < min {
            return Err(CosineError::InvalidParallelThreshold {
                got: threshold,
                min,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CosineError> {
        if let Some(param) = duplicate_param {
            return Err(CosineError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
