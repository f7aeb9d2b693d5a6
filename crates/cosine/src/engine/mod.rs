//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates evaluation:
//! - Validation and coercion of dynamic values
//! - Dispatch of the element pass (sequential or injected)
//! - Shape-preserving output types
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Element pass execution.
pub mod executor;

/// Output types.
pub mod output;

/// Input and parameter validation.
pub mod validator;
