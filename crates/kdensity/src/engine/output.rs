//! Output curve container and row assembly.
//!
//! ## Purpose
//!
//! This module defines the [`DensityCurve`] result container and converts
//! each (group, field) curve into one output row, renaming channels per the
//! configured output-field triple.
//!
//! ## Design notes
//!
//! * **No computation**: this module only shapes results; estimation happens
//!   in [`crate::engine::estimator`].
//! * **Deterministic order**: output rows are appended in (group order,
//!   field order) — no reordering or sorting pass.
//!
//! ## Invariants
//!
//! * `domain` and `density` always have equal length.
//! * Every output row carries the group's key values verbatim, then the
//!   output triple: `key` = field name, `y` = domain series, `size` =
//!   density series.
//!
//! ## Non-goals
//!
//! * This module does not mutate the view (see [`crate::engine::executor`]).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::partition::Group;
use crate::primitives::value::{Row, Value};

// ============================================================================
// Density Curve
// ============================================================================

/// One sampled density curve: parallel domain/density sequences for a
/// single (group, field) pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DensityCurve<T> {
    /// Ordered, strictly increasing domain samples.
    pub domain: Vec<T>,

    /// Density values parallel to `domain`, each `>= min_size`.
    pub density: Vec<T>,
}

impl<T: Float> DensityCurve<T> {
    /// Number of retained sample points.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether every sampled point was filtered out.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

// ============================================================================
// Row Assembly
// ============================================================================

/// Assemble one output row for a (group, field) curve.
///
/// The row lists the group's key values first, then the output triple.
pub fn assemble_row<T: Float>(
    group: &Group<T>,
    field: &str,
    curve: DensityCurve<T>,
    output: &[String; 3],
) -> Row<T> {
    let mut row = Row::new();
    for (name, value) in &group.key_fields {
        row.set(name.clone(), value.clone());
    }
    row.set(output[0].clone(), Value::Str(field.to_string()));
    row.set(output[1].clone(), Value::Series(curve.domain));
    row.set(output[2].clone(), Value::Series(curve.density));
    row
}
