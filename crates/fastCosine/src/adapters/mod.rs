//! Layer 4: Adapters
//!
//! Parallel-aware wrappers around the `cosine` execution adapters:
//!
//! - **Array**: Ordered arrays, including `ndarray` 1-D arrays
//! - **Labeled**: Mappings of string labels to angles
//! - **Dynamic**: Any shape, typed or dynamic

// Parallel array adapter.
pub mod array;

// Parallel labeled collection adapter.
pub mod labeled;

// Parallel shape-dispatching adapter.
pub mod dynamic;
