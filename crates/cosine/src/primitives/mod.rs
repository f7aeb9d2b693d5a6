//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures used throughout the
//! crate. It has zero internal dependencies within the crate.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Typed input shapes.
pub mod shape;

/// Dynamic values from scripting layers.
pub mod value;
