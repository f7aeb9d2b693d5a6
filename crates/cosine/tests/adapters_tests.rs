#![cfg(feature = "dev")]
//! Tests for the shape-specific execution adapters.
//!
//! ## Test Organization
//!
//! 1. **Scalar Adapter**
//! 2. **Array Adapter** - Including custom pass injection
//! 3. **Labeled Adapter** - BTreeMap and HashMap
//! 4. **Dynamic Adapter** - Typed and dynamic inputs
//! 5. **Build Validation**

use approx::assert_abs_diff_eq;
use std::collections::HashMap;
use std::f64::consts::PI;

use cosine::internals::api::{Array, CosineBuilder, Dynamic, Labeled, Scalar};
use cosine::internals::primitives::errors::CosineError;
use cosine::internals::primitives::shape::{CosineInput, LabeledMap, Shape};
use cosine::internals::primitives::value::Value;

// ============================================================================
// Helper Functions
// ============================================================================

fn sentinel_pass(input: &[f64], output: &mut [f64], _chunk_size: usize) {
    for (y, _) in output.iter_mut().zip(input) {
        *y = -7.0;
    }
}

fn labeled(entries: &[(&str, f64)]) -> LabeledMap<f64> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

// ============================================================================
// Scalar Adapter Tests
// ============================================================================

/// Test scalar evaluation at known angles.
#[test]
fn test_scalar_known_angles() {
    let model = CosineBuilder::<f64>::new().adapter(Scalar).build().unwrap();

    assert_eq!(model.evaluate(0.0), 1.0);
    assert_abs_diff_eq!(model.evaluate(PI / 2.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(model.evaluate(PI), -1.0, epsilon = 1e-12);
}

/// Test scalar evaluation of dynamic values.
#[test]
fn test_scalar_evaluate_value() {
    let model = CosineBuilder::<f64>::new().adapter(Scalar).build().unwrap();

    assert_eq!(model.evaluate_value(&Value::Integer(0)).unwrap(), 1.0);
    assert!(matches!(
        model.evaluate_value(&Value::from("0")),
        Err(CosineError::InvalidInputKind(_))
    ));
    assert!(matches!(
        model.evaluate_value(&Value::Bool(true)),
        Err(CosineError::InvalidInputKind(_))
    ));
}

// ============================================================================
// Array Adapter Tests
// ============================================================================

/// Test array evaluation with a small chunk size.
#[test]
fn test_array_chunked() {
    let model = CosineBuilder::<f64>::new().chunk_size(3).adapter(Array).build().unwrap();
    let x: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();

    let y = model.evaluate(&x);

    assert_eq!(y.len(), x.len());
    for (xi, yi) in x.iter().zip(&y) {
        assert_eq!(*yi, xi.cos());
    }
}

/// Test that an injected pass runs only when parallel and long enough.
#[test]
fn test_array_custom_pass() {
    let model = CosineBuilder::<f64>::new()
        .min_parallel_len(4)
        .parallel(true)
        .custom_element_pass(sentinel_pass)
        .adapter(Array)
        .build()
        .unwrap();

    assert!(model.uses_custom_pass(4));
    assert!(!model.uses_custom_pass(3));
    assert_eq!(model.evaluate(&[0.0; 4]), vec![-7.0; 4]);
    assert_eq!(model.evaluate(&[0.0; 3]), vec![1.0; 3]);
}

/// Test that the core crate defaults to sequential.
#[test]
fn test_array_defaults_sequential() {
    let model = CosineBuilder::<f64>::new()
        .min_parallel_len(1)
        .custom_element_pass(sentinel_pass)
        .adapter(Array)
        .build()
        .unwrap();

    assert!(!model.uses_custom_pass(100));
}

/// Test dynamic sequences through the array adapter.
#[test]
fn test_array_evaluate_value() {
    let model = CosineBuilder::<f64>::new().adapter(Array).build().unwrap();

    let y = model.evaluate_value(&Value::from(vec![0.0, PI])).unwrap();
    assert_eq!(y[0], 1.0);
    assert_abs_diff_eq!(y[1], -1.0, epsilon = 1e-12);

    assert!(matches!(
        model.evaluate_value(&Value::Float(0.0)),
        Err(CosineError::InvalidInputKind(_))
    ));
}

/// Test setters on the execution builder.
#[test]
fn test_array_builder_setters() {
    let builder = CosineBuilder::<f64>::new()
        .adapter(Array)
        .chunk_size(16)
        .min_parallel_len(32);

    assert_eq!(builder.chunk_size, 16);
    assert_eq!(builder.min_parallel_len, 32);
}

// ============================================================================
// Labeled Adapter Tests
// ============================================================================

/// Test labeled evaluation keeps keys.
#[test]
fn test_labeled_keys_preserved() {
    let model = CosineBuilder::<f64>::new().adapter(Labeled).build().unwrap();
    let input = labeled(&[("zero", 0.0), ("one", 1.0), ("half_pi", PI / 2.0), ("pi", PI)]);

    let out = model.evaluate(&input);

    assert!(out.keys().eq(input.keys()));
    assert_eq!(out["zero"], 1.0);
    assert_eq!(out["one"], 1.0_f64.cos());
    assert_abs_diff_eq!(out["half_pi"], 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out["pi"], -1.0, epsilon = 1e-12);
}

/// Test HashMap input returns a HashMap with the same keys.
#[test]
fn test_labeled_hashmap() {
    let model = CosineBuilder::<f64>::new().adapter(Labeled).build().unwrap();
    let mut input: HashMap<String, f64> = HashMap::new();
    input.insert("a".to_string(), 0.0);
    input.insert("b".to_string(), PI);

    let out = model.evaluate_hashmap(&input);

    assert_eq!(out.len(), 2);
    assert_eq!(out["a"], 1.0);
    assert_abs_diff_eq!(out["b"], -1.0, epsilon = 1e-12);
}

/// Test the empty labeled collection.
#[test]
fn test_labeled_empty() {
    let model = CosineBuilder::<f64>::new().adapter(Labeled).build().unwrap();
    assert!(model.evaluate(&LabeledMap::new()).is_empty());
}

/// Test dynamic mappings through the labeled adapter.
#[test]
fn test_labeled_evaluate_value() {
    let model = CosineBuilder::<f64>::new().adapter(Labeled).build().unwrap();
    let good = Value::Map(vec![(Value::from("x"), Value::Integer(0))]);
    let bad = Value::Map(vec![(Value::from("x"), Value::Null)]);

    assert_eq!(model.evaluate_value(&good).unwrap()["x"], 1.0);
    assert!(matches!(
        model.evaluate_value(&bad),
        Err(CosineError::NonNumericElement { .. })
    ));
}

// ============================================================================
// Dynamic Adapter Tests
// ============================================================================

/// Test typed inputs of every shape.
#[test]
fn test_dynamic_typed_inputs() {
    let model = CosineBuilder::<f64>::new().adapter(Dynamic).build().unwrap();

    let inputs = [
        CosineInput::Scalar(0.0),
        CosineInput::Array(vec![0.0, 1.0]),
        CosineInput::Labeled(labeled(&[("z", 0.0)])),
    ];
    for input in &inputs {
        let out = model.evaluate(input);
        assert_eq!(out.shape(), input.shape());
        assert_eq!(out.len(), input.len());
    }
}

/// Test dynamic values of every shape.
#[test]
fn test_dynamic_values() {
    let model = CosineBuilder::<f64>::new().adapter(Dynamic).build().unwrap();

    let scalar = model.evaluate_value(&Value::Float(0.0)).unwrap();
    assert_eq!(scalar.as_scalar(), Some(1.0));

    let array = model.evaluate_value(&Value::from(vec![0.0, 0.0])).unwrap();
    assert_eq!(array.shape(), Shape::Array);

    let map = Value::Map(vec![(Value::from("zero"), Value::Float(0.0))]);
    let out = model.evaluate_value(&map).unwrap();
    assert_eq!(out.as_labeled().unwrap()["zero"], 1.0);
}

/// Test that a failed validation yields no output.
#[test]
fn test_dynamic_errors() {
    let model = CosineBuilder::<f64>::new().adapter(Dynamic).build().unwrap();

    assert!(matches!(
        model.evaluate_value(&Value::from("hello")),
        Err(CosineError::InvalidInputKind(_))
    ));
    assert!(matches!(
        model.evaluate_value(&Value::Other("set".to_string())),
        Err(CosineError::InvalidInputKind(_))
    ));

    let map = Value::Map(vec![
        (Value::from("zero"), Value::Float(0.0)),
        (Value::from("bad"), Value::from("oops")),
    ]);
    assert!(matches!(
        model.evaluate_value(&map),
        Err(CosineError::NonNumericElement { .. })
    ));
}

// ============================================================================
// Build Validation Tests
// ============================================================================

/// Test zero chunk size is rejected.
#[test]
fn test_build_zero_chunk_size() {
    let res = CosineBuilder::<f64>::new().chunk_size(0).adapter(Array).build();
    assert_eq!(
        res.unwrap_err(),
        CosineError::InvalidChunkSize { got: 0, min: 1 }
    );
}

/// Test zero parallel threshold is rejected.
#[test]
fn test_build_zero_threshold() {
    let res = CosineBuilder::<f64>::new()
        .min_parallel_len(0)
        .adapter(Labeled)
        .build();
    assert!(matches!(
        res,
        Err(CosineError::InvalidParallelThreshold { got: 0, .. })
    ));
}

/// Test duplicate parameters are rejected by every adapter.
#[test]
fn test_build_duplicate_parameter() {
    let builder = CosineBuilder::<f64>::new().chunk_size(8).chunk_size(16);

    let expected = CosineError::DuplicateParameter {
        parameter: "chunk_size",
    };
    assert_eq!(builder.clone().adapter(Array).build().unwrap_err(), expected);
    assert_eq!(builder.clone().adapter(Labeled).build().unwrap_err(), expected);
    assert_eq!(builder.clone().adapter(Dynamic).build().unwrap_err(), expected);
    assert_eq!(builder.adapter(Scalar).build().unwrap_err(), expected);
}
