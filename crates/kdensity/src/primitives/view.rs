//! In-memory tabular view.
//!
//! ## Purpose
//!
//! This module provides [`DataView`], the tabular collaborator the KDE
//! transform reads from and writes back into: an ordered row sequence with
//! column extraction, range queries, and wholesale row replacement.
//!
//! ## Design notes
//!
//! * **Ordered**: rows keep their insertion order; column extraction
//!   preserves row order.
//! * **Numeric columns**: `column` yields only finite numeric values, so
//!   downstream estimation never sees NaN/Inf or string cells.
//! * **Atomic replacement**: `replace_rows` swaps the entire row sequence in
//!   one assignment; the transform never mutates rows incrementally.
//!
//! ## Invariants
//!
//! * `range(field)` is `None` exactly when `column(field)` is empty.
//! * `replace_rows` leaves no trace of the previous row set.
//!
//! ## Non-goals
//!
//! * This module does not index, sort, or type-check rows.
//! * This module is not a general dataframe; it is the minimal surface the
//!   transform pipeline needs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::value::{Row, Value};

// ============================================================================
// Data View
// ============================================================================

/// An ordered, mutable sequence of rows with column access.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataView<T> {
    rows: Vec<Row<T>>,
}

impl<T: Float> DataView<T> {
    /// Create an empty view.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a view from an existing row sequence.
    pub fn from_rows(rows: Vec<Row<T>>) -> Self {
        Self { rows }
    }

    /// The current row sequence, in order.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row to the view.
    pub fn push(&mut self, row: Row<T>) {
        self.rows.push(row);
    }

    /// Extract the ordered finite numeric values of one field.
    ///
    /// Rows where the field is missing, non-numeric, or non-finite are
    /// skipped.
    pub fn column(&self, field: &str) -> Vec<T> {
        self.rows
            .iter()
            .filter_map(|row| row.get(field).and_then(Value::as_num))
            .filter(|v| v.is_finite())
            .collect()
    }

    /// The `(min, max)` of one field's finite numeric values, or `None`
    /// when the field has no such values.
    pub fn range(&self, field: &str) -> Option<(T, T)> {
        let mut bounds: Option<(T, T)> = None;
        for row in &self.rows {
            if let Some(v) = row.get(field).and_then(Value::as_num) {
                if !v.is_finite() {
                    continue;
                }
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(v), hi.max(v)),
                    None => (v, v),
                });
            }
        }
        bounds
    }

    /// Replace the entire row sequence in a single assignment.
    pub fn replace_rows(&mut self, rows: Vec<Row<T>>) {
        self.rows = rows;
    }
}
