//! Evenly spaced sample grids.
//!
//! ## Purpose
//!
//! Builds half-open ranges `[start, stop)` sampled every `step`, the usual way
//! an angle array spanning one period is produced before evaluation.
//!
//! ## Invariants
//!
//! * `len == ceil((stop - start) / step)` (zero when `stop <= start`).
//! * `grid[i] == start + i * step`; values are not accumulated, so rounding
//!   error does not grow along the grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CosineError;

/// Values `start, start + step, ...` strictly below `stop`.
pub fn arange<T: Float>(start: T, stop: T, step: T) -> Result<Vec<T>, CosineError> {
    if !start.is_finite() || !stop.is_finite() {
        return Err(CosineError::InvalidInput(format!(
            "range bounds must be finite, got [{}, {})",
            start.to_f64().unwrap_or(f64::NAN),
            stop.to_f64().unwrap_or(f64::NAN)
        )));
    }
    if !step.is_finite() || step <= T::zero() {
        return Err(CosineError::InvalidInput(format!(
            "step must be positive and finite, got {}",
            step.to_f64().unwrap_or(f64::NAN)
        )));
    }

    if stop <= start {
        return Ok(Vec::new());
    }

    let n = ((stop - start) / step).ceil().to_usize().ok_or_else(|| {
        CosineError::InvalidInput(format!(
            "range [{}, {}) with step {} has too many samples",
            start.to_f64().unwrap_or(f64::NAN),
            stop.to_f64().unwrap_or(f64::NAN),
            step.to_f64().unwrap_or(f64::NAN)
        ))
    })?;
    let mut grid = Vec::new();
    grid.try_reserve_exact(n).map_err(|_| {
        CosineError::InvalidInput(format!("cannot allocate {n} grid samples"))
    })?;
    for i in 0..n {
        let offset = T::from(i).unwrap_or(T::zero()) * step;
        grid.push(start + offset);
    }
    Ok(grid)
}

/// One full period `[0, 2*pi)` sampled every `step` radians.
pub fn full_period<T: Float>(step: T) -> Result<Vec<T>, CosineError> {
    let two_pi = T::from(core::f64::consts::TAU).unwrap_or(T::zero());
    arange(T::zero(), two_pi, step)
}
