//! Tests for the public API.
//!
//! These tests exercise the crate only through `cosine::prelude`, the way a
//! downstream user would.
//!
//! ## Test Organization
//!
//! 1. **Overload Set** - Scalars, arrays, labeled collections, typed inputs
//! 2. **Builder** - Adapters, defaults, and parameter validation
//! 3. **Dynamic Values** - Shape and element errors
//! 4. **Helpers** - Grid construction

use approx::assert_abs_diff_eq;
use std::collections::HashMap;
use std::f64::consts::PI;

use cosine::prelude::*;

// ============================================================================
// Overload Set Tests
// ============================================================================

/// Test scalar results against the platform cosine.
#[test]
fn test_cosine_scalar() {
    for x in [0.0_f64, 1.0, PI / 2.0, PI, -3.5, 100.0] {
        assert_abs_diff_eq!(cosine(&x), x.cos(), epsilon = 1e-12);
    }
    assert_eq!(cosine(&0.0_f64), 1.0);
    assert_abs_diff_eq!(cosine(&PI), -1.0, epsilon = 1e-12);
}

/// Test that non-finite scalars produce NaN rather than an error.
#[test]
fn test_cosine_non_finite() {
    assert!(cosine(&f64::NAN).is_nan());
    assert!(cosine(&f64::INFINITY).is_nan());
    assert!(cosine(&f64::NEG_INFINITY).is_nan());
}

/// Test that f32 input yields f32 output.
#[test]
fn test_cosine_f32() {
    let y: f32 = cosine(&0.0_f32);
    assert_eq!(y, 1.0);

    let ys: Vec<f32> = cosine(&vec![0.0_f32, 1.0]);
    assert_eq!(ys[1], 1.0_f32.cos());
}

/// Test the four-key labeled collection.
#[test]
fn test_cosine_labeled_four_keys() {
    let mut angles = LabeledMap::new();
    angles.insert("zero".to_string(), 0.0);
    angles.insert("one".to_string(), 1.0);
    angles.insert("half_pi".to_string(), PI / 2.0);
    angles.insert("pi".to_string(), PI);

    let result = cosine(&angles);

    assert_eq!(result.len(), 4);
    assert!(result.keys().eq(angles.keys()));
    assert_abs_diff_eq!(result["zero"], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result["one"], 1.0_f64.cos(), epsilon = 1e-12);
    assert_abs_diff_eq!(result["half_pi"], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result["pi"], -1.0, epsilon = 1e-12);

    // Input untouched
    assert_eq!(angles["pi"], PI);
}

/// Test HashMap input through the overload set.
#[test]
fn test_cosine_hashmap() {
    let angles: HashMap<String, f64> = [("zero".to_string(), 0.0), ("pi".to_string(), PI)]
        .into_iter()
        .collect();

    let result: HashMap<String, f64> = cosine(&angles);

    assert_eq!(result.len(), 2);
    assert_eq!(result["zero"], 1.0);
    assert_abs_diff_eq!(result["pi"], -1.0, epsilon = 1e-12);
}

/// Test arrays: slices, vectors, and the empty array.
#[test]
fn test_cosine_array() {
    let x = [0.0_f64, PI / 2.0, PI];
    let y = cosine(&x[..]);

    assert_eq!(y.len(), 3);
    assert_abs_diff_eq!(y[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y[1], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y[2], -1.0, epsilon = 1e-12);

    let empty: Vec<f64> = Vec::new();
    assert!(cosine(&empty).is_empty());
}

/// Test that NaN elements do not affect their neighbours.
#[test]
fn test_cosine_array_with_nan() {
    let y = cosine(&vec![0.0_f64, f64::NAN, 0.0]);

    assert_eq!(y[0], 1.0);
    assert!(y[1].is_nan());
    assert_eq!(y[2], 1.0);
}

/// Test that repeated calls give identical results.
#[test]
fn test_cosine_repeatable() {
    let x = full_period(0.1).unwrap();

    let first = cosine(&x);
    let second = cosine(&x);

    assert_eq!(first, second);
}

/// Test typed inputs built from conversions.
#[test]
fn test_cosine_typed_input() {
    let out = cosine(&CosineInput::from(vec![0.0_f64, 0.0]));
    assert_eq!(out, CosineOutput::Array(vec![1.0, 1.0]));

    let out = cosine(&CosineInput::from(0.0_f64));
    assert_eq!(out.as_scalar(), Some(1.0));
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test the array adapter matches the overload set.
#[test]
fn test_builder_array_matches_overload() {
    let x = full_period(0.1).unwrap();
    let model = Cosine::<f64>::new().chunk_size(7).adapter(Array).build().unwrap();

    assert_eq!(model.evaluate(&x), cosine(&x));
}

/// Test the scalar adapter.
#[test]
fn test_builder_scalar() {
    let model = Cosine::<f64>::new().adapter(Scalar).build().unwrap();
    assert_eq!(model.evaluate(0.0), 1.0);
}

/// Test the labeled adapter.
#[test]
fn test_builder_labeled() {
    let model = Cosine::<f64>::new().adapter(Labeled).build().unwrap();
    let input: LabeledMap<f64> = [("x".to_string(), 0.0)].into_iter().collect();

    assert_eq!(model.evaluate(&input)["x"], 1.0);
}

/// Test parameter validation at build time.
#[test]
fn test_builder_validation() {
    assert!(matches!(
        Cosine::<f64>::new().chunk_size(0).adapter(Array).build(),
        Err(CosineError::InvalidChunkSize { .. })
    ));
    assert!(matches!(
        Cosine::<f64>::new().min_parallel_len(0).adapter(Array).build(),
        Err(CosineError::InvalidParallelThreshold { .. })
    ));
    assert!(matches!(
        Cosine::<f64>::new()
            .min_parallel_len(10)
            .min_parallel_len(20)
            .adapter(Dynamic)
            .build(),
        Err(CosineError::DuplicateParameter {
            parameter: "min_parallel_len"
        })
    ));
}

// ============================================================================
// Dynamic Value Tests
// ============================================================================

/// Test that a string is rejected as a whole.
#[test]
fn test_dynamic_string_rejected() {
    let model = Cosine::<f64>::new().adapter(Dynamic).build().unwrap();
    let err = model.evaluate_value(&Value::from("zero")).unwrap_err();

    assert!(matches!(err, CosineError::InvalidInputKind(_)));
    assert!(err.to_string().contains("Invalid input kind"));
}

/// Test that a mapping with a non-numeric value names the key.
#[test]
fn test_dynamic_mapping_non_numeric() {
    let model = Cosine::<f64>::new().adapter(Dynamic).build().unwrap();
    let value = Value::Map(vec![
        (Value::from("zero"), Value::from(0.0)),
        (Value::from("bad"), Value::from("oops")),
    ]);

    let err = model.evaluate_value(&value).unwrap_err();

    assert!(matches!(err, CosineError::NonNumericElement { .. }));
    assert!(err.to_string().contains("bad"));
}

/// Test that nested and mixed sequences are rejected.
#[test]
fn test_dynamic_sequence_errors() {
    let model = Cosine::<f64>::new().adapter(Dynamic).build().unwrap();

    let nested = Value::List(vec![Value::from(vec![0.0])]);
    let mixed = Value::List(vec![Value::from(0.0), Value::Null]);

    assert!(matches!(
        model.evaluate_value(&nested),
        Err(CosineError::InvalidInputKind(_))
    ));
    assert!(matches!(
        model.evaluate_value(&mixed),
        Err(CosineError::InvalidInputKind(_))
    ));
}

/// Test integers are accepted as angles, booleans are not.
#[test]
fn test_dynamic_integers_and_bools() {
    let model = Cosine::<f64>::new().adapter(Dynamic).build().unwrap();

    let out = model.evaluate_value(&Value::from(vec![0_i64, 1])).unwrap();
    assert_eq!(out.as_array().unwrap()[0], 1.0);

    assert!(matches!(
        model.evaluate_value(&Value::from(true)),
        Err(CosineError::InvalidInputKind(_))
    ));
}

// ============================================================================
// Helper Tests
// ============================================================================

/// Test the full-period grid used by the driver.
#[test]
fn test_full_period_grid() {
    let x = full_period(0.1).unwrap();
    let y = cosine(&x);

    assert_eq!(x.len(), 63);
    assert_eq!(x[0], 0.0);
    assert!(*x.last().unwrap() < std::f64::consts::TAU);
    assert_eq!(y[0], 1.0);
}

/// Test arange rejects a non-positive step.
#[test]
fn test_arange_invalid_step() {
    assert!(matches!(
        arange(0.0_f64, 1.0, 0.0),
        Err(CosineError::InvalidInput(_))
    ));
}
