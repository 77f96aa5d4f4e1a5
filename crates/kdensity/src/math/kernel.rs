//! Kernel shape functions for density estimation.
//!
//! ## Purpose
//!
//! This module provides the closed registry of kernel shapes used to build
//! continuous density functions from discrete samples. Each kernel is a
//! normalized probability density K: ℝ → [0, ∞) with ∫ K(u) du = 1, so the
//! KDE mean formula yields a proper density without extra scaling.
//!
//! ## Design notes
//!
//! * **Closed registry**: kernels are enum variants resolved by name once at
//!   configuration time, not a mutable global dictionary.
//! * **Normalization**: unlike regression weight kernels, density kernels
//!   carry their normalization constants in the formula.
//! * **Support**: all kernels except Gaussian are bounded on [-1, 1] and
//!   return exactly zero outside their support.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not perform bandwidth selection.
//! * This module does not evaluate densities over a sampling grid
//!   (see [`crate::engine::estimator`]).

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Square root of 2*pi, used in Gaussian kernel normalization.
const SQRT_2PI: f64 = 2.5066282746310005024157652848110452530069867406099_f64;

/// pi/2, used in cosine kernel calculations.
const PI_OVER_2: f64 = PI / 2.0;

/// pi/4, the cosine kernel normalization constant.
const PI_OVER_4: f64 = PI / 4.0;

/// Cutoff for Gaussian kernel evaluation.
///
/// Beyond this normalized distance, the Gaussian kernel value is effectively
/// zero (exp(-6^2/2) approx 6.9e-9). This prevents numerical underflow.
const GAUSSIAN_CUTOFF: f64 = 6.0;

// ============================================================================
// Kernel Shape Enum
// ============================================================================

/// Kernel shape for density estimation.
///
/// Each kernel defines a normalized density K: ℝ → [0, ∞). Bounded kernels
/// have support on [-1, 1], while the Gaussian kernel has unbounded support.
///
/// # Mathematical Properties
///
/// | Kernel       | Formula                       | Support  |
/// |--------------|-------------------------------|----------|
/// | Gaussian     | exp(-u^2 / 2) / sqrt(2*pi)    | ℝ        |
/// | Epanechnikov | (3/4) * (1 - u^2)             | [-1, 1]  |
/// | Uniform      | 1/2                           | [-1, 1]  |
/// | Triangular   | 1 - |u|                       | [-1, 1]  |
/// | Quartic      | (15/16) * (1 - u^2)^2         | [-1, 1]  |
/// | Tricube      | (70/81) * (1 - |u|^3)^3       | [-1, 1]  |
/// | Cosine       | (pi/4) * cos(pi * u / 2)      | [-1, 1]  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelShape {
    /// Gaussian kernel: K(u) = exp(-u^2 / 2) / sqrt(2*pi).
    ///
    /// This is the default kernel choice.
    #[default]
    Gaussian,

    /// Epanechnikov kernel: K(u) = (3/4)(1 - u^2) for |u| < 1.
    Epanechnikov,

    /// Uniform (rectangular) kernel: K(u) = 1/2 for |u| < 1.
    Uniform,

    /// Triangular kernel: K(u) = 1 - |u| for |u| < 1.
    Triangular,

    /// Quartic (biweight) kernel: K(u) = (15/16)(1 - u^2)^2 for |u| < 1.
    Quartic,

    /// Tricube kernel: K(u) = (70/81)(1 - |u|^3)^3 for |u| < 1.
    Tricube,

    /// Cosine kernel: K(u) = (pi/4) cos(pi * u / 2) for |u| < 1.
    Cosine,
}

impl KernelShape {
    // ========================================================================
    // Registry Lookup
    // ========================================================================

    /// All registered kernel shapes.
    pub const ALL: [KernelShape; 7] = [
        KernelShape::Gaussian,
        KernelShape::Epanechnikov,
        KernelShape::Uniform,
        KernelShape::Triangular,
        KernelShape::Quartic,
        KernelShape::Tricube,
        KernelShape::Cosine,
    ];

    /// Get the registry name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelShape::Gaussian => "gaussian",
            KernelShape::Epanechnikov => "epanechnikov",
            KernelShape::Uniform => "uniform",
            KernelShape::Triangular => "triangular",
            KernelShape::Quartic => "quartic",
            KernelShape::Tricube => "tricube",
            KernelShape::Cosine => "cosine",
        }
    }

    /// Resolve a kernel by registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }

    // ========================================================================
    // Support Methods
    // ========================================================================

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            KernelShape::Gaussian => None, // Unbounded
            _ => Some((-1.0, 1.0)),        // All others are bounded on [-1, 1]
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Density Computation
    // ========================================================================

    /// Evaluate the normalized kernel density K(u) at a normalized distance.
    #[inline]
    pub fn density<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        // Fast path for bounded kernels: zero outside support
        if self.is_bounded() && abs_u >= T::one() {
            return T::zero();
        }

        match self {
            KernelShape::Gaussian => {
                let u_f64 = abs_u.to_f64().unwrap_or(f64::INFINITY);
                if u_f64 > GAUSSIAN_CUTOFF {
                    return T::zero();
                }
                let val = (-0.5 * u_f64 * u_f64).exp() / SQRT_2PI;
                T::from(val).unwrap_or_else(T::zero)
            }

            KernelShape::Epanechnikov => {
                let c = T::from(0.75).unwrap_or_else(T::one);
                c * (T::one() - abs_u * abs_u)
            }

            KernelShape::Uniform => T::from(0.5).unwrap_or_else(T::one),

            KernelShape::Triangular => T::one() - abs_u,

            KernelShape::Quartic => {
                let c = T::from(15.0 / 16.0).unwrap_or_else(T::one);
                let tmp = T::one() - abs_u * abs_u;
                c * tmp * tmp
            }

            KernelShape::Tricube => {
                let c = T::from(70.0 / 81.0).unwrap_or_else(T::one);
                let tmp = T::one() - abs_u * abs_u * abs_u;
                c * tmp * tmp * tmp
            }

            KernelShape::Cosine => {
                let c = T::from(PI_OVER_4).unwrap_or_else(T::one);
                let arg = T::from(PI_OVER_2).unwrap_or_else(T::one) * abs_u;
                c * arg.cos()
            }
        }
    }
}
