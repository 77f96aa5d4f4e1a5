//! Tests for domain sampling and density curve estimation.
//!
//! These tests verify the sampling grid's boundary behavior, the KDE mean
//! formula, custom estimator builders, and density-threshold filtering.

use std::sync::Arc;

use approx::assert_relative_eq;
use kdensity::engine::estimator::{estimate, sample_domain};
use kdensity::engine::resolver::{EstimatorFn, ResolvedMethod};
use kdensity::math::kernel::KernelShape;

// ============================================================================
// Domain Sampling Tests
// ============================================================================

#[test]
fn grid_starts_at_lo_and_never_exceeds_hi() {
    let grid = sample_domain(0.0, 1.0, 0.25);
    assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn degenerate_extent_yields_a_single_point() {
    let grid = sample_domain(2.0, 2.0, 0.5);
    assert_eq!(grid, vec![2.0]);
}

#[test]
fn sampling_terminates_when_rounding_swallows_the_stride() {
    // At 1e20 the f64 ulp is ~1.6e4, so x + 1.0 == x and the grid cannot
    // advance past the first point.
    let grid = sample_domain(1e20, 1e20, 1.0);
    assert_eq!(grid, vec![1e20]);

    let wide = sample_domain(1e20, 2e20, 1.0);
    assert_eq!(wide, vec![1e20]);
}

#[test]
fn non_dividing_stride_stops_inside_the_extent() {
    let grid = sample_domain(0.0, 1.0, 0.3);
    assert_eq!(grid.len(), 4);
    assert_relative_eq!(grid[0], 0.0);
    assert!(*grid.last().unwrap() <= 1.0);
}

// ============================================================================
// Named Kernel Tests
// ============================================================================

#[test]
fn gaussian_curve_matches_the_mean_formula() {
    // One sample at 0, bandwidth 1: density(x) is the standard normal pdf.
    let samples = [0.0];
    let method: ResolvedMethod<f64> = ResolvedMethod::Shape(KernelShape::Gaussian);
    let grid = [0.0, 1.0];
    let curve = estimate(&samples, &method, 1.0, &grid, 0.0);

    assert_eq!(curve.domain, vec![0.0, 1.0]);
    assert_relative_eq!(curve.density[0], 0.3989422804014327, max_relative = 1e-12);
    assert_relative_eq!(curve.density[1], 0.24197072451914337, max_relative = 1e-12);
}

#[test]
fn bandwidth_scales_both_argument_and_normalization() {
    let samples = [0.0];
    let method: ResolvedMethod<f64> = ResolvedMethod::Shape(KernelShape::Gaussian);
    let grid = [0.0];
    let curve = estimate(&samples, &method, 2.0, &grid, 0.0);
    // density(0) = phi(0) / h
    assert_relative_eq!(curve.density[0], 0.3989422804014327 / 2.0, max_relative = 1e-12);
}

#[test]
fn zero_samples_yield_zero_density_everywhere() {
    let samples: [f64; 0] = [];
    let method: ResolvedMethod<f64> = ResolvedMethod::Shape(KernelShape::Gaussian);
    let grid = [0.0, 1.0, 2.0];

    // At threshold 0 the zero curve is retained in full...
    let curve = estimate(&samples, &method, 1.0, &grid, 0.0);
    assert_eq!(curve.domain, vec![0.0, 1.0, 2.0]);
    assert!(curve.density.iter().all(|&d| d == 0.0));

    // ...and the default threshold filters every point out.
    let filtered = estimate(&samples, &method, 1.0, &grid, 0.01);
    assert!(filtered.is_empty());
}

// ============================================================================
// Custom Estimator Tests
// ============================================================================

#[test]
fn custom_estimator_replaces_the_kernel_formula() {
    let builder: EstimatorFn<f64> = Arc::new(|samples: &[f64], bandwidth: f64| {
        let offset = samples.len() as f64 * bandwidth;
        Arc::new(move |x: f64| x + offset)
    });
    let method = ResolvedMethod::Custom(builder);
    let grid = [0.0, 1.0];
    let curve = estimate(&[5.0, 6.0], &method, 2.0, &grid, 0.0);

    assert_eq!(curve.domain, vec![0.0, 1.0]);
    assert_relative_eq!(curve.density[0], 4.0);
    assert_relative_eq!(curve.density[1], 5.0);
}

// ============================================================================
// Threshold Filtering Tests
// ============================================================================

#[test]
fn points_below_the_threshold_are_dropped_in_both_sequences() {
    let samples = [0.0];
    let method: ResolvedMethod<f64> = ResolvedMethod::Shape(KernelShape::Gaussian);
    let grid = [0.0, 1.0, 2.0, 3.0];
    // phi(0) = 0.399, phi(1) = 0.242, phi(2) = 0.054, phi(3) = 0.0044.
    let curve = estimate(&samples, &method, 1.0, &grid, 0.1);

    assert_eq!(curve.domain, vec![0.0, 1.0]);
    assert_eq!(curve.density.len(), curve.domain.len());
    assert!(curve.density.iter().all(|&d| d >= 0.1));
}
