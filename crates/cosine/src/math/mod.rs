//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions used by the adapter:
//! - The cosine kernel and its sequential element passes
//! - Evenly spaced sample grids for building angle arrays
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cosine kernel and element passes.
pub mod trig;

/// Evenly spaced sample grids.
pub mod grid;
