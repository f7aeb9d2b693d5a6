//! # cosine: element-wise cosine over scalars, labeled collections and arrays
//!
//! A small, shape-preserving numeric adapter: hand it a single angle, a
//! mapping of string labels to angles, or an array of angles, and it returns
//! the cosine of every element in a result of the same shape.
//!
//! The cosine itself is the platform's (`num_traits::Float::cos`); this crate
//! only supplies dispatch over input shapes, validation of loosely-typed
//! input, and a hook for extension crates to parallelize the element pass.
//!
//! ## Quick Start
//!
//! ### Overload set
//!
//! ```rust
//! use cosine::prelude::*;
//! use std::f64::consts::PI;
//!
//! // Scalar -> scalar
//! assert_eq!(cosine(&0.0_f64), 1.0);
//!
//! // Array -> array of the same length
//! let y = cosine(&vec![0.0, PI]);
//! assert_eq!(y.len(), 2);
//!
//! // Labeled collection -> labeled collection with the same keys
//! let mut angles = LabeledMap::new();
//! angles.insert("zero".to_string(), 0.0);
//! angles.insert("pi".to_string(), PI);
//! let cosines = cosine(&angles);
//! assert_eq!(cosines["zero"], 1.0);
//! ```
//!
//! ### Builder
//!
//! ```rust
//! use cosine::prelude::*;
//!
//! let x = vec![0.0, 0.1, 0.2, 0.3];
//!
//! let model = Cosine::new()
//!     .chunk_size(2)
//!     .adapter(Array)
//!     .build()?;
//!
//! let y = model.evaluate(&x);
//! assert_eq!(y.len(), x.len());
//! # Result::<(), CosineError>::Ok(())
//! ```
//!
//! ### Dynamic input
//!
//! Data coming from a scripting layer arrives as a [`Value`](prelude::Value)
//! and is classified at the call boundary:
//!
//! ```rust
//! use cosine::prelude::*;
//!
//! let model = Cosine::<f64>::new().adapter(Dynamic).build()?;
//!
//! let out = model.evaluate_value(&Value::from(vec![0.0, 1.0]))?;
//! assert_eq!(out.shape(), Shape::Array);
//!
//! let err = model.evaluate_value(&Value::from("zero")).unwrap_err();
//! assert!(matches!(err, CosineError::InvalidInputKind(_)));
//! # Result::<(), CosineError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! cosine = { version = "0.3", default-features = false }
//! ```
//!
//! `HashMap` support requires `std`; everything else works with `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - validation and execution control.
mod engine;

// Layer 4: Adapters - shape-specific execution adapters.
mod adapters;

// High-level fluent API and overload set.
mod api;

// Standard cosine prelude.
pub mod prelude {
    pub use crate::api::{
        arange, cosine, full_period,
        Adapter::{Array, Dynamic, Labeled, Scalar},
        ApplyCosine, CosineBuilder as Cosine, CosineError, CosineInput, CosineOutput,
        LabeledMap, Shape, Value,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
