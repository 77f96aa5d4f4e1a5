//! Bandwidth selection rules.
//!
//! ## Purpose
//!
//! This module provides the closed registry of bandwidth rules of thumb used
//! when the caller does not supply a fixed bandwidth or a custom selector.
//! Both rules follow R's `bw.nrd` / `bw.nrd0`:
//!
//! ```text
//! nrd  = 1.06 * min(sd, IQR / 1.34) * n^(-1/5)
//! nrd0 = 0.90 * min(sd, IQR / 1.34) * n^(-1/5)
//! ```
//!
//! ## Design notes
//!
//! * **Closed registry**: rules are enum variants resolved by name, not a
//!   mutable global dictionary.
//! * **Always positive**: degenerate columns (zero spread, fewer than 2
//!   values) fall through R's fallback chain (spread → sd → |x₀| → 1) so the
//!   result is always positive and finite. The resolved bandwidth doubles as
//!   the default sampling stride, so zero is never acceptable.
//! * **Quantiles**: IQR uses type-7 (linear interpolation) quantiles on a
//!   sorted copy, matching R's default.
//!
//! ## Non-goals
//!
//! * This module does not decide between named rules, fixed values, and
//!   custom callables (see [`crate::engine::resolver`]).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Bandwidth Rule Enum
// ============================================================================

/// Named bandwidth rule of thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandwidthRule {
    /// Scott's variation (R's `bw.nrd`): `1.06 * min(sd, IQR/1.34) * n^-1/5`.
    ///
    /// This is the default rule.
    #[default]
    Nrd,

    /// Silverman's rule of thumb (R's `bw.nrd0`):
    /// `0.9 * min(sd, IQR/1.34) * n^-1/5`.
    Nrd0,
}

impl BandwidthRule {
    /// All registered bandwidth rules.
    pub const ALL: [BandwidthRule; 2] = [BandwidthRule::Nrd, BandwidthRule::Nrd0];

    /// Get the registry name of the rule.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            BandwidthRule::Nrd => "nrd",
            BandwidthRule::Nrd0 => "nrd0",
        }
    }

    /// Resolve a rule by registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    /// Compute the bandwidth for a column of sample values.
    ///
    /// Columns with fewer than 2 values yield 1. The result is always
    /// positive and finite.
    pub fn compute<T: Float>(&self, values: &[T]) -> T {
        let n = values.len();
        if n < 2 {
            return T::one();
        }

        let sd = sample_sd(values);
        let iqr_scaled = iqr(values) / T::from(1.34).unwrap_or_else(T::one);

        // R's fallback chain for degenerate spreads: spread → sd → |x₀| → 1.
        let mut spread = if sd > T::zero() && iqr_scaled > T::zero() {
            sd.min(iqr_scaled)
        } else {
            sd
        };
        if spread <= T::zero() || !spread.is_finite() {
            spread = values[0].abs();
        }
        if spread <= T::zero() || !spread.is_finite() {
            spread = T::one();
        }

        let factor = match self {
            BandwidthRule::Nrd => 1.06,
            BandwidthRule::Nrd0 => 0.9,
        };
        let factor = T::from(factor).unwrap_or_else(T::one);
        let n_pow = T::from(n)
            .unwrap_or_else(T::one)
            .powf(T::from(-0.2).unwrap_or_else(T::zero));

        let bw = factor * spread * n_pow;
        if bw.is_finite() && bw > T::zero() {
            bw
        } else {
            T::one()
        }
    }
}

// ============================================================================
// Column Statistics
// ============================================================================

/// Sample standard deviation (n - 1 denominator).
fn sample_sd<T: Float>(values: &[T]) -> T {
    let n = values.len();
    if n < 2 {
        return T::zero();
    }
    let count = T::from(n).unwrap_or_else(T::one);
    let mut sum = T::zero();
    for &v in values {
        sum = sum + v;
    }
    let mean = sum / count;

    let mut ss = T::zero();
    for &v in values {
        let d = v - mean;
        ss = ss + d * d;
    }
    (ss / (count - T::one())).sqrt()
}

/// Interquartile range via type-7 quantiles on a sorted copy.
fn iqr<T: Float>(values: &[T]) -> T {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25)
}

/// Type-7 quantile of a sorted slice: linear interpolation at h = (n-1)p.
fn quantile_sorted<T: Float>(sorted: &[T], p: f64) -> T {
    let n = sorted.len();
    if n == 0 {
        return T::zero();
    }
    if n == 1 {
        return sorted[0];
    }

    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = T::from(h - lo as f64).unwrap_or_else(T::zero);

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
