#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! These tests verify the executor used for:
//! - Shape-preserving dispatch of scalars, labeled collections and arrays
//! - Routing between the sequential and a custom element pass
//! - Configuration handling
//!
//! ## Test Organization
//!
//! 1. **Dispatch** - Output shape and values per input shape
//! 2. **Custom Pass Routing** - Parallel flag, threshold, and fallback
//! 3. **Configuration** - Defaults and `from_config`

use approx::assert_abs_diff_eq;
use std::f64::consts::PI;

use cosine::internals::engine::executor::{
    CosineConfig, CosineExecutor, DEFAULT_CHUNK_SIZE, DEFAULT_MIN_PARALLEL_LEN,
};
use cosine::internals::engine::output::CosineOutput;
use cosine::internals::primitives::shape::{CosineInput, LabeledMap};

// ============================================================================
// Helper Functions
// ============================================================================

/// Element pass that writes a sentinel, so tests can see which pass ran.
fn sentinel_pass(input: &[f64], output: &mut [f64], _chunk_size: usize) {
    for (y, _) in output.iter_mut().zip(input) {
        *y = 42.0;
    }
}

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 0.01).collect()
}

// ============================================================================
// Dispatch Tests
// ============================================================================

/// Test scalar dispatch.
#[test]
fn test_run_scalar() {
    let executor = CosineExecutor::<f64>::new();

    assert_eq!(executor.run(&CosineInput::Scalar(0.0)), CosineOutput::Scalar(1.0));
    assert_abs_diff_eq!(executor.run_scalar(PI), -1.0, epsilon = 1e-12);
}

/// Test array dispatch keeps length and order.
#[test]
fn test_run_array() {
    let executor = CosineExecutor::<f64>::new();
    let x = vec![0.0, PI / 3.0, PI];

    let out = executor.run(&CosineInput::Array(x.clone()));
    let y = out.as_array().expect("array output");

    assert_eq!(y.len(), 3);
    for (xi, yi) in x.iter().zip(y) {
        assert_eq!(*yi, xi.cos());
    }
}

/// Test that the empty array stays empty.
#[test]
fn test_run_empty_array() {
    let executor = CosineExecutor::<f64>::new();
    assert!(executor.run_slice(&[]).is_empty());
}

/// Test labeled dispatch keeps the key set.
#[test]
fn test_run_labeled() {
    let executor = CosineExecutor::<f64>::new();
    let mut input = LabeledMap::new();
    input.insert("zero".to_string(), 0.0);
    input.insert("pi".to_string(), PI);

    let out = executor.run_labeled(&input);

    assert_eq!(out.len(), 2);
    assert!(out.keys().eq(input.keys()));
    assert_eq!(out["zero"], 1.0);
    assert_abs_diff_eq!(out["pi"], -1.0, epsilon = 1e-12);
}

/// Test that the input is left untouched.
#[test]
fn test_run_does_not_mutate_input() {
    let executor = CosineExecutor::<f64>::new();
    let x = ramp(100);
    let before = x.clone();

    let _ = executor.run_slice(&x);
    assert_eq!(x, before);
}

/// Test f32 stays f32.
#[test]
fn test_run_f32() {
    let executor = CosineExecutor::<f32>::new();
    let y: Vec<f32> = executor.run_slice(&[0.0_f32, 1.0]);
    assert_eq!(y[0], 1.0_f32);
    assert_eq!(y[1], 1.0_f32.cos());
}

// ============================================================================
// Custom Pass Routing Tests
// ============================================================================

/// Test that a custom pass is ignored unless parallel is enabled.
#[test]
fn test_custom_pass_requires_parallel() {
    let executor = CosineExecutor::<f64>::new()
        .min_parallel_len(1)
        .custom_element_pass(Some(sentinel_pass));

    assert!(!executor.uses_custom_pass(10));
    assert_eq!(executor.run_slice(&[0.0])[0], 1.0);
}

/// Test that a custom pass runs at and above the threshold.
#[test]
fn test_custom_pass_above_threshold() {
    let executor = CosineExecutor::<f64>::new()
        .min_parallel_len(8)
        .custom_element_pass(Some(sentinel_pass))
        .parallel(true);

    assert!(executor.uses_custom_pass(8));
    assert!(executor.run_slice(&ramp(8)).iter().all(|&y| y == 42.0));
}

/// Test that short inputs fall back to the sequential pass.
#[test]
fn test_custom_pass_below_threshold() {
    let executor = CosineExecutor::<f64>::new()
        .min_parallel_len(8)
        .custom_element_pass(Some(sentinel_pass))
        .parallel(true);

    assert!(!executor.uses_custom_pass(7));
    let x = ramp(7);
    let y = executor.run_slice(&x);
    for (xi, yi) in x.iter().zip(&y) {
        assert_eq!(*yi, xi.cos());
    }
}

/// Test that parallel without a custom pass is sequential.
#[test]
fn test_parallel_without_custom_pass() {
    let executor = CosineExecutor::<f64>::new().min_parallel_len(1).parallel(true);

    assert!(!executor.uses_custom_pass(100));
    assert_eq!(executor.run_slice(&[0.0])[0], 1.0);
}

/// Test that labeled collections go through the same pass.
#[test]
fn test_custom_pass_labeled() {
    let executor = CosineExecutor::<f64>::new()
        .min_parallel_len(2)
        .custom_element_pass(Some(sentinel_pass))
        .parallel(true);

    let input: LabeledMap<f64> = [("a".to_string(), 0.0), ("b".to_string(), 1.0)]
        .into_iter()
        .collect();
    let out = executor.run_labeled(&input);

    assert_eq!(out["a"], 42.0);
    assert_eq!(out["b"], 42.0);
}

/// Test that scalars never take the custom pass.
#[test]
fn test_custom_pass_skips_scalars() {
    let executor = CosineExecutor::<f64>::new()
        .min_parallel_len(1)
        .custom_element_pass(Some(sentinel_pass))
        .parallel(true);

    assert_eq!(executor.run_scalar(0.0), 1.0);
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test default configuration values.
#[test]
fn test_default_config() {
    let config = CosineConfig::<f64>::default();

    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    assert_eq!(config.min_parallel_len, DEFAULT_MIN_PARALLEL_LEN);
    assert!(config.custom_element_pass.is_none());
    assert!(!config.parallel);
}

/// Test executor construction from a configuration.
#[test]
fn test_from_config() {
    let config = CosineConfig::<f64> {
        chunk_size: 3,
        min_parallel_len: 5,
        custom_element_pass: Some(sentinel_pass),
        parallel: true,
    };
    let executor = CosineExecutor::from_config(&config);

    assert_eq!(executor.chunk_size, 3);
    assert_eq!(executor.min_parallel_len, 5);
    assert!(executor.uses_custom_pass(5));
}

/// Test one-off execution with a configuration.
#[test]
fn test_run_with_config() {
    let config = CosineConfig::<f64> {
        chunk_size: 2,
        ..Default::default()
    };
    let x = ramp(9);
    let out = CosineExecutor::run_with_config(&CosineInput::Array(x.clone()), config);

    let y = out.into_array().expect("array output");
    for (xi, yi) in x.iter().zip(&y) {
        assert_eq!(*yi, xi.cos());
    }
}
