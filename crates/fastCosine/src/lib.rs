//! # fastCosine: parallel element-wise cosine
//!
//! Extends the [`cosine`](https://docs.rs/cosine) crate with a rayon
//! element pass and `ndarray` input support. The numbers are the same as the
//! core crate's, bit for bit; only the scheduling changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastCosine::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec((0..10_000).map(|i| i as f64 * 1e-3).collect());
//!
//! // Parallel by default; arrays shorter than min_parallel_len stay sequential
//! let model = Cosine::new()
//!     .min_parallel_len(4096)
//!     .adapter(Array)
//!     .build()?;
//!
//! let y = model.evaluate_ndarray(&x)?;
//! assert_eq!(y.len(), x.len());
//! assert_eq!(y[0], 1.0);
//! # Result::<(), CosineError>::Ok(())
//! ```
//!
//! ### Labeled collections
//!
//! ```rust
//! use fastCosine::prelude::*;
//!
//! let mut angles = LabeledMap::new();
//! angles.insert("zero".to_string(), 0.0);
//! angles.insert("pi".to_string(), std::f64::consts::PI);
//!
//! let model = Cosine::new().adapter(Labeled).build()?;
//! let result = model.evaluate(&angles);
//! assert_eq!(result["zero"], 1.0);
//! # Result::<(), CosineError>::Ok(())
//! ```
//!
//! ### Strided views
//!
//! Only contiguous arrays are accepted; a strided view is an error rather
//! than a silent copy:
//!
//! ```rust
//! use fastCosine::prelude::*;
//! use ndarray::{s, Array1};
//!
//! let x = Array1::from_vec(vec![0.0, 1.0, 2.0, 3.0]);
//! let model = Cosine::<f64>::new().adapter(Array).build()?;
//!
//! let err = model.evaluate(&x.slice(s![..;2])).unwrap_err();
//! assert!(matches!(err, CosineError::InvalidInput(_)));
//! # Result::<(), CosineError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): rayon parallel pass. Without it every adapter is sequential.
//! * `dev`: exposes `internals` for testing.
//!
//! ## Logging
//!
//! Adapter configuration and pass selection are reported through the `log`
//! facade at `debug` level; chunking at `trace`. Install any logger (e.g.
//! `env_logger`) to see them.

#![allow(non_snake_case)]

// Layer 3: Engine - parallel element pass.
mod engine;

// Layer 4: Adapters - parallel execution adapters.
mod adapters;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastCosine prelude.
pub mod prelude {
    pub use crate::api::{
        arange, cosine, full_period,
        Adapter::{Array, Dynamic, Labeled, Scalar},
        ApplyCosine, CosineBuilder as Cosine, CosineError, CosineInput, CosineOutput,
        LabeledMap, Shape, Value,
    };
    pub use crate::input::CosineArrayInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
