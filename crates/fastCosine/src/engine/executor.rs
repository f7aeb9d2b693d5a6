//! Parallel element pass for cosine evaluation.
//!
//! ## Purpose
//!
//! This module provides the chunk-parallel pass that is injected into the
//! `cosine` crate's executor through its `ElementPassFn` hook.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential chunked pass.
//! * **Parallelism**: Uses `rayon` to hand disjoint chunks to the global pool.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `output.len() == input.len()`.
//! * Each output element depends on exactly one input element, so the result
//!   is bitwise identical to the sequential pass.
//!
//! ## Non-goals
//!
//! * This module does not decide when to go parallel (handled by the
//!   `cosine` executor's `min_parallel_len`).
//! * This module does not configure the rayon thread pool.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use log::trace;
use num_traits::Float;

// Export dependencies from cosine crate
use cosine::internals::math::trig::cosine_chunked;

// ============================================================================
// Parallel Element Pass
// ============================================================================

/// Evaluate every element of `input` into `output`, one rayon task per chunk.
#[cfg(feature = "cpu")]
pub fn element_pass_parallel<T>(input: &[T], output: &mut [T], chunk_size: usize)
where
    T: Float + Send + Sync,
{
    let chunk_size = chunk_size.max(1);
    trace!(
        "parallel element pass: {} elements in chunks of {}",
        input.len(),
        chunk_size
    );

    output
        .par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .for_each(|(out, inp)| cosine_chunked(inp, out, chunk_size));
}

/// Sequential fallback with the same signature as the parallel pass.
pub fn element_pass_sequential<T: Float>(input: &[T], output: &mut [T], chunk_size: usize) {
    cosine_chunked(input, output, chunk_size);
}
