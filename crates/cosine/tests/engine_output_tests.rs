#![cfg(feature = "dev")]
//! Tests for cosine output types.
//!
//! ## Test Organization
//!
//! 1. **Accessors** - Shape, length, and variant accessors
//! 2. **Display** - Summary table formatting

use cosine::internals::engine::output::CosineOutput;
use cosine::internals::primitives::shape::{LabeledMap, Shape};

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test scalar accessors.
#[test]
fn test_scalar_accessors() {
    let out = CosineOutput::Scalar(0.5_f64);

    assert_eq!(out.shape(), Shape::Scalar);
    assert_eq!(out.len(), 1);
    assert!(!out.is_empty());
    assert_eq!(out.as_scalar(), Some(0.5));
    assert!(out.as_array().is_none());
    assert!(out.as_labeled().is_none());
}

/// Test array accessors.
#[test]
fn test_array_accessors() {
    let out = CosineOutput::Array(vec![1.0_f64, 0.0]);

    assert_eq!(out.shape(), Shape::Array);
    assert_eq!(out.len(), 2);
    assert_eq!(out.as_array(), Some(&[1.0, 0.0][..]));
    assert!(out.as_scalar().is_none());
    assert_eq!(out.into_array(), Some(vec![1.0, 0.0]));
}

/// Test labeled accessors.
#[test]
fn test_labeled_accessors() {
    let mut map = LabeledMap::new();
    map.insert("zero".to_string(), 1.0_f64);
    let out = CosineOutput::Labeled(map.clone());

    assert_eq!(out.shape(), Shape::Labeled);
    assert_eq!(out.as_labeled(), Some(&map));
    assert!(out.clone().into_array().is_none());
    assert_eq!(out.into_labeled(), Some(map));
}

/// Test empty outputs.
#[test]
fn test_empty_outputs() {
    assert!(CosineOutput::<f64>::Array(vec![]).is_empty());
    assert!(CosineOutput::<f64>::Labeled(LabeledMap::new()).is_empty());
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary header.
#[test]
fn test_display_summary() {
    let text = CosineOutput::Scalar(1.0_f64).to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("scalar"));
    assert!(text.contains("1.000000"));
}

/// Test that labels are printed.
#[test]
fn test_display_labeled() {
    let mut map = LabeledMap::new();
    map.insert("half_pi".to_string(), 0.0_f64);
    let text = CosineOutput::Labeled(map).to_string();

    assert!(text.contains("labeled collection"));
    assert!(text.contains("half_pi"));
}

/// Test that long arrays are elided in the middle.
#[test]
fn test_display_long_array_elided() {
    let out = CosineOutput::Array(vec![0.25_f64; 63]);
    let text = out.to_string();

    assert!(text.contains("Elements: 63"));
    assert!(text.contains("..."));
    // 10 head rows and 10 tail rows
    let rows = text.lines().filter(|l| l.contains("0.250000")).count();
    assert_eq!(rows, 20);
}

/// Test that short arrays print every row.
#[test]
fn test_display_short_array() {
    let text = CosineOutput::Array(vec![0.25_f64; 5]).to_string();

    assert!(!text.contains("..."));
    assert_eq!(text.lines().filter(|l| l.contains("0.250000")).count(), 5);
}
