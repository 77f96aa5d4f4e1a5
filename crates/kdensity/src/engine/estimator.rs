//! Density curve estimation over a sampling grid.
//!
//! ## Purpose
//!
//! This module builds one [`DensityCurve`](crate::engine::output::DensityCurve)
//! per (group, field) task: it samples the resolved extent at the configured
//! stride, builds a continuous density function from the task's sample
//! values, evaluates it at every grid point, and filters out points below
//! the density threshold.
//!
//! ## Design notes
//!
//! * **Pure functions**: estimation is a deterministic function of the
//!   resolved configuration; validation happened upstream.
//! * **Mean formula**: for a named kernel K with bandwidth h,
//!   `density(x) = Σ K((x - s_i) / h) / (n · h)` over the samples `s_i`.
//! * **Custom estimators**: a custom method replaces the whole estimator
//!   builder and is invoked once per task with `(samples, bandwidth)`.
//! * **Filtering, not padding**: grid points with density below `min_size`
//!   are dropped; the output sequences are shorter, never zero-padded.
//!
//! ## Invariants
//!
//! * The pre-filter sampling grid starts exactly at `extent.0`, is strictly
//!   increasing, and never exceeds `extent.1`.
//! * A degenerate extent (`min == max`) yields exactly one grid point.
//! * Zero samples yield density 0 everywhere — never a panic.
//!
//! ## Non-goals
//!
//! * This module does not partition rows or assemble output rows.
//! * This module does not select bandwidths (see
//!   [`crate::engine::resolver`]).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::DensityCurve;
use crate::engine::resolver::ResolvedMethod;
use crate::math::kernel::KernelShape;

// ============================================================================
// Domain Sampling
// ============================================================================

/// Sample the domain from `lo` stepping by `step` while `x <= hi`.
///
/// The first point is exactly `lo`; a degenerate domain (`lo == hi`) yields
/// the single point `lo`. The stride must be positive (guaranteed by the
/// resolver). Sampling stops early if rounding swallows the stride
/// (`x + step == x`), so the grid stays strictly increasing and finite.
pub fn sample_domain<T: Float>(lo: T, hi: T, step: T) -> Vec<T> {
    let mut grid = Vec::new();
    let mut x = lo;
    while x <= hi {
        grid.push(x);
        let next = x + step;
        if next <= x {
            break;
        }
        x = next;
    }
    grid
}

// ============================================================================
// Density Evaluation
// ============================================================================

/// Evaluate the KDE mean formula for a named kernel at one point.
///
/// Returns 0 when there are no samples.
fn kernel_density<T: Float>(shape: KernelShape, samples: &[T], bandwidth: T, x: T) -> T {
    let n = samples.len();
    if n == 0 {
        return T::zero();
    }

    let mut sum = T::zero();
    for &s in samples {
        sum = sum + shape.density((x - s) / bandwidth);
    }
    sum / (T::from(n).unwrap_or_else(T::one) * bandwidth)
}

/// Estimate one density curve for a (group, field) task.
///
/// Builds the continuous density function from `samples` using the resolved
/// method and bandwidth, evaluates it at every grid point, and keeps only
/// points with density `>= min_size`.
pub fn estimate<T: Float>(
    samples: &[T],
    method: &ResolvedMethod<T>,
    bandwidth: T,
    grid: &[T],
    min_size: T,
) -> DensityCurve<T> {
    let mut curve = DensityCurve {
        domain: Vec::with_capacity(grid.len()),
        density: Vec::with_capacity(grid.len()),
    };

    match method {
        ResolvedMethod::Shape(shape) => {
            for &x in grid {
                let d = kernel_density(*shape, samples, bandwidth, x);
                if d >= min_size {
                    curve.domain.push(x);
                    curve.density.push(d);
                }
            }
        }
        ResolvedMethod::Custom(builder) => {
            let density_fn = builder(samples, bandwidth);
            for &x in grid {
                let d = density_fn(x);
                if d >= min_size {
                    curve.domain.push(x);
                    curve.density.push(d);
                }
            }
        }
    }

    curve
}
