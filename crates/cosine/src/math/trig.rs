//! Cosine kernel.
//!
//! ## Purpose
//!
//! This module wraps the platform cosine and applies it element-wise over
//! slices. No numeric algorithm lives here: every value is delegated to
//! [`Float::cos`].
//!
//! ## Design notes
//!
//! * **IEEE-754**: NaN maps to NaN and infinities map to NaN, as the platform does.
//! * **Independent elements**: No state is carried between elements, so any
//!   partition of a slice yields the same result.
//!
//! ## Invariants
//!
//! * `output[i] == input[i].cos()` for every index written.

// External dependencies
use num_traits::Float;

/// Cosine of an angle in radians.
#[inline]
pub fn cosine<T: Float>(x: T) -> T {
    x.cos()
}

/// Write the cosine of each input element into `output`.
///
/// Only `min(input.len(), output.len())` elements are written.
#[inline]
pub fn cosine_into<T: Float>(input: &[T], output: &mut [T]) {
    for (out, &x) in output.iter_mut().zip(input.iter()) {
        *out = cosine(x);
    }
}

/// Sequential element pass over fixed-size chunks.
///
/// Produces the same values as [`cosine_into`]; the chunk size only shapes
/// the loop, matching the signature of the parallel pass.
pub fn cosine_chunked<T: Float>(input: &[T], output: &mut [T], chunk_size: usize) {
    let chunk_size = chunk_size.max(1);
    for (src, dst) in input.chunks(chunk_size).zip(output.chunks_mut(chunk_size)) {
        cosine_into(src, dst);
    }
}
