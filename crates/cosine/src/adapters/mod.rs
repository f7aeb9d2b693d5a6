//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing processors that adapt the engine to each
//! input shape:
//!
//! - **Scalar**: A single angle
//! - **Labeled**: A mapping of string labels to angles
//! - **Array**: An ordered array of angles
//! - **Dynamic**: Any of the above, dispatched at the call boundary
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar adapter.
pub mod scalar;

/// Labeled collection adapter.
pub mod labeled;

/// Array adapter.
pub mod array;

/// Shape-dispatching adapter.
pub mod dynamic;
