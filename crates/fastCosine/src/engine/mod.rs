//! Layer 3: Engine
//!
//! This layer provides the parallel element pass that is injected into the
//! `cosine` executor.

// Parallel execution engine using CPU threads
pub mod executor;
