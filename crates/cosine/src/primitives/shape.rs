//! Input shapes accepted by the cosine adapter.
//!
//! ## Purpose
//!
//! This module defines the tagged union of typed inputs (scalar, labeled
//! collection, array) and the [`Shape`] discriminant shared with outputs.
//!
//! ## Design notes
//!
//! * **Exhaustive**: Every consumer matches on all three shapes.
//! * **Owned**: Inputs own their data; outputs are always freshly allocated.
//! * **Ordered map**: Labeled collections use `BTreeMap` so they are available
//!   without `std`. Callers must not rely on key order.
//!
//! ## Invariants
//!
//! * Labeled collection keys are unique.
//! * Arrays are homogeneous in their float type `T`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeMap, string::String, vec::Vec};

/// A mapping from unique string labels to scalars.
pub type LabeledMap<T> = BTreeMap<String, T>;

/// Discriminant of an input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single number.
    Scalar,

    /// A mapping of string labels to numbers.
    Labeled,

    /// An ordered sequence of numbers.
    Array,
}

impl Shape {
    /// Human-readable shape name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Labeled => "labeled collection",
            Self::Array => "array",
        }
    }
}

/// A typed input of one of the three accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum CosineInput<T> {
    /// A single angle in radians.
    Scalar(T),

    /// Labeled angles in radians.
    Labeled(LabeledMap<T>),

    /// An ordered array of angles in radians.
    Array(Vec<T>),
}

impl<T> CosineInput<T> {
    /// The shape of this input.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Labeled(_) => Shape::Labeled,
            Self::Array(_) => Shape::Array,
        }
    }

    /// Number of elements (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Labeled(map) => map.len(),
            Self::Array(values) => values.len(),
        }
    }

    /// Whether the input holds no elements. A scalar is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<f64> for CosineInput<f64> {
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}

impl From<f32> for CosineInput<f32> {
    fn from(x: f32) -> Self {
        Self::Scalar(x)
    }
}

impl<T> From<Vec<T>> for CosineInput<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values)
    }
}

impl<T: Copy> From<&[T]> for CosineInput<T> {
    fn from(values: &[T]) -> Self {
        Self::Array(values.to_vec())
    }
}

impl<T> From<LabeledMap<T>> for CosineInput<T> {
    fn from(map: LabeledMap<T>) -> Self {
        Self::Labeled(map)
    }
}

#[cfg(feature = "std")]
impl<T, S> From<std::collections::HashMap<String, T, S>> for CosineInput<T> {
    fn from(map: std::collections::HashMap<String, T, S>) -> Self {
        Self::Labeled(map.into_iter().collect())
    }
}
