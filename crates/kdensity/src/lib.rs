//! # kdensity — Kernel density estimation for tabular views
//!
//! This crate computes 1-D kernel density estimates (KDE) over tabular data
//! and reshapes the result into plot-ready rows. Given a view of records,
//! one or more numeric fields, and optional grouping keys, it produces —
//! per group and per field — a sampled probability-density curve suitable
//! for ridge, violin, and density plots.
//!
//! ## What is KDE?
//!
//! Kernel density estimation builds a continuous probability density from
//! discrete samples by summing smoothed contributions ("kernels") centered
//! at each sample:
//!
//! ```text
//! density(x) = (1 / (n * h)) * Σ K((x - s_i) / h)
//! ```
//!
//! where `K` is a normalized kernel shape and `h` the bandwidth controlling
//! how far each sample's influence spreads.
//!
//! ## Quick Start
//!
//! ```rust
//! use kdensity::prelude::*;
//!
//! let mut view = DataView::from_rows(vec![
//!     Row::new().with("v", Value::Num(1.0)),
//!     Row::new().with("v", Value::Num(1.0)),
//!     Row::new().with("v", Value::Num(2.0)),
//!     Row::new().with("v", Value::Num(3.0)),
//!     Row::new().with("v", Value::Num(3.0)),
//!     Row::new().with("v", Value::Num(3.0)),
//! ]);
//!
//! let options = KdeOptions::new()
//!     .fields(["v"])          // estimate density for field "v"
//!     .fixed_bandwidth(1.0)   // fixed smoothing width
//!     .step(1.0)              // sample the domain at stride 1
//!     .min_size(0.0);         // keep every sampled point
//!
//! kde(&mut view, &options)?;
//!
//! // One output row per (group, field): key, y (domain), size (density).
//! let row = &view.rows()[0];
//! assert_eq!(row.get("key").and_then(|v| v.as_str()), Some("v"));
//! assert_eq!(row.get("y").and_then(|v| v.as_series()).map(<[f64]>::len),
//!            Some(3));
//! # Result::<(), KdeError>::Ok(())
//! ```
//!
//! ## Grouped estimation
//!
//! With `group_by`, the rows are partitioned by the grouping fields in
//! first-seen order and one curve is produced per group × field:
//!
//! ```rust
//! use kdensity::prelude::*;
//!
//! let mut view = DataView::from_rows(vec![
//!     Row::new().with("g", Value::from("a")).with("v", Value::Num(1.0)),
//!     Row::new().with("g", Value::from("b")).with("v", Value::Num(5.0)),
//!     Row::new().with("g", Value::from("a")).with("v", Value::Num(2.0)),
//! ]);
//!
//! let options = KdeOptions::new().fields(["v"]).group_by(["g"]);
//! kde(&mut view, &options)?;
//!
//! assert_eq!(view.rows().len(), 2); // one row per group
//! # Result::<(), KdeError>::Ok(())
//! ```
//!
//! ## Host registration
//!
//! Hosts that dispatch transforms by name can use
//! [`TransformRegistry`](registry::TransformRegistry), which registers the
//! KDE transform under `"kernel-density-estimate"`, `"kde"`, and
//! `"density"`.
//!
//! ## Parallelism
//!
//! Each group × field estimation is independent. The optional `parallel`
//! cargo feature evaluates them with `rayon`; output order and values are
//! identical to the sequential path.

// Layer 1: Primitives - data structures and basic utilities.
pub mod primitives;

// Layer 2: Math - kernel shapes and bandwidth rules.
pub mod math;

// Layer 3: Engine - resolution, partitioning, estimation, orchestration.
pub mod engine;

// High-level entry point for the KDE transform.
pub mod api;

// Host-facing named transform registry.
pub mod registry;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        kde, Bandwidth, BandwidthRule, DataView, DensityCurve, KdeError, KdeOptions, KernelMethod,
        KernelShape, Row, Value,
    };
    pub use crate::registry::{TransformRegistry, KDE_ALIASES, KDE_NAME};
}
