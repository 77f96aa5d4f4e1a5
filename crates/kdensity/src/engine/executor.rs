//! Pipeline orchestration for the KDE transform.
//!
//! ## Purpose
//!
//! This module coordinates the full estimation pipeline: resolve options,
//! partition rows, estimate one density curve per (group, field) task,
//! assemble output rows, and replace the view's row sequence in a single
//! assignment.
//!
//! ## Design notes
//!
//! * **Validate before mutate**: resolution surfaces every configuration
//!   error before the view is touched; a failed invocation leaves the view
//!   unchanged.
//! * **Atomic replacement**: the complete output row sequence is built in
//!   local scope and swapped in with one `replace_rows` call — never
//!   incrementally.
//! * **Data parallelism**: the group × field tasks are independent. With the
//!   `parallel` feature, curves are evaluated with `rayon` and collected in
//!   task order, so output is identical to the sequential path.
//!
//! ## Invariants
//!
//! * Output rows appear in (group order, field order).
//! * The number of output rows is `groups × fields`.
//!
//! ## Non-goals
//!
//! * This module does not validate options (see [`crate::engine::resolver`]).
//! * This module does not implement the estimation math (see
//!   [`crate::engine::estimator`]).

// External dependencies
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::engine::estimator::{estimate, sample_domain};
use crate::engine::output::{assemble_row, DensityCurve};
use crate::engine::partition::{partition, Group};
use crate::engine::resolver::{resolve, KdeOptions, ResolvedKde};
use crate::primitives::errors::KdeError;
use crate::primitives::value::Row;
use crate::primitives::view::DataView;

// ============================================================================
// Executor
// ============================================================================

/// Run the KDE transform against a view, replacing its rows with one
/// plot-ready row per (group, field) pair.
pub fn run<T: Float + Send + Sync>(
    view: &mut DataView<T>,
    options: &KdeOptions<T>,
) -> Result<(), KdeError> {
    let config = resolve(options, view)?;

    let groups = partition(view.rows(), &config.group_by);
    let grid = sample_domain(config.extent.0, config.extent.1, config.step);

    // One task per (group, field), in group-then-field order.
    let columns: Vec<Vec<T>> = groups
        .iter()
        .flat_map(|group| {
            config
                .fields
                .iter()
                .map(|field| group.column(view.rows(), field))
        })
        .collect();

    let curves = estimate_tasks(&columns, &config, &grid);

    let rows = assemble_all(&groups, &config, curves);
    view.replace_rows(rows);
    Ok(())
}

/// Estimate every task's curve, preserving task order.
#[cfg(not(feature = "parallel"))]
fn estimate_tasks<T: Float>(
    columns: &[Vec<T>],
    config: &ResolvedKde<T>,
    grid: &[T],
) -> Vec<DensityCurve<T>> {
    columns
        .iter()
        .map(|samples| {
            estimate(
                samples,
                &config.method,
                config.bandwidth,
                grid,
                config.min_size,
            )
        })
        .collect()
}

/// Estimate every task's curve in parallel; ordered collection reconstructs
/// task order regardless of completion order.
#[cfg(feature = "parallel")]
fn estimate_tasks<T: Float + Send + Sync>(
    columns: &[Vec<T>],
    config: &ResolvedKde<T>,
    grid: &[T],
) -> Vec<DensityCurve<T>> {
    columns
        .par_iter()
        .map(|samples| {
            estimate(
                samples,
                &config.method,
                config.bandwidth,
                grid,
                config.min_size,
            )
        })
        .collect()
}

/// Assemble output rows in (group order, field order).
fn assemble_all<T: Float>(
    groups: &[Group<T>],
    config: &ResolvedKde<T>,
    curves: Vec<DensityCurve<T>>,
) -> Vec<Row<T>> {
    let mut rows = Vec::with_capacity(curves.len());
    let mut curves = curves.into_iter();
    for group in groups {
        for field in &config.fields {
            // The task list was built in the same group-then-field order.
            if let Some(curve) = curves.next() {
                rows.push(assemble_row(group, field, curve, &config.output));
            }
        }
    }
    rows
}
