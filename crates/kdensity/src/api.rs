//! High-level API for the KDE transform.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: configure a
//! [`KdeOptions`] record, then apply [`kde`] to a mutable [`DataView`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: fluent setters over sensible defaults for every option.
//! * **Validated**: configuration errors surface from [`kde`] before the
//!   view is touched.
//! * **Type-Safe**: generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: build `KdeOptions` with chained setters, then
//!   call `kde(&mut view, &options)`.
//! * **In-place mutation**: the view's row sequence is replaced wholesale;
//!   there is no separate result object.
//!
//! ```rust
//! use kdensity::prelude::*;
//!
//! let mut view = DataView::from_rows(vec![
//!     Row::new().with("v", Value::Num(1.0)),
//!     Row::new().with("v", Value::Num(2.0)),
//!     Row::new().with("v", Value::Num(2.5)),
//! ]);
//!
//! let options = KdeOptions::new().fields(["v"]).min_size(0.0);
//! kde(&mut view, &options)?;
//!
//! assert_eq!(view.rows().len(), 1);
//! # Result::<(), KdeError>::Ok(())
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor;

// Publicly re-exported types
pub use crate::engine::output::DensityCurve;
pub use crate::engine::resolver::{
    Bandwidth, BandwidthFn, DensityFn, EstimatorFn, KdeOptions, KernelMethod,
};
pub use crate::math::bandwidth::BandwidthRule;
pub use crate::math::kernel::KernelShape;
pub use crate::primitives::errors::KdeError;
pub use crate::primitives::value::{Row, Value};
pub use crate::primitives::view::DataView;

/// Apply the KDE transform to a view.
///
/// Computes one density curve per (group, field) pair and replaces the
/// view's rows with the assembled output rows. On configuration error the
/// view is left untouched.
pub fn kde<T: Float + Send + Sync>(
    view: &mut DataView<T>,
    options: &KdeOptions<T>,
) -> Result<(), KdeError> {
    executor::run(view, options)
}
