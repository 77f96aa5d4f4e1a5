//! Row partitioning by group keys.
//!
//! ## Purpose
//!
//! This module splits the view's rows into ordered groups keyed by the
//! configured grouping fields.
//!
//! ## Design notes
//!
//! * **First-seen order**: groups are emitted in the order their key is
//!   first encountered while scanning the input; rows keep their relative
//!   input order within a group.
//! * **Structural keys**: keys are ordered tuples of [`KeyAtom`]s — numbers
//!   compare by bit pattern, strings by content, absent fields by a
//!   dedicated atom — so equality is deterministic (including NaN).
//! * **Implicit group**: an empty `group_by` yields exactly one group
//!   containing every row, even when there are no rows at all.
//!
//! ## Invariants
//!
//! * Every input row belongs to exactly one group.
//! * Group key values are taken verbatim from the group's first row.
//!
//! ## Non-goals
//!
//! * This module does not sort groups or rows.
//! * This module does not extract numeric columns (see
//!   [`crate::primitives::view`]).

// External dependencies
use num_traits::Float;
use std::collections::HashMap;

// Internal dependencies
use crate::primitives::value::{KeyAtom, Row, Value};

// ============================================================================
// Group
// ============================================================================

/// One partition of the input rows, in first-seen key order.
#[derive(Debug, Clone)]
pub struct Group<T> {
    /// The grouping field values of the group's first row, in `group_by`
    /// order. Copied verbatim into every output row for this group.
    pub key_fields: Vec<(String, Value<T>)>,

    /// Indices into the input row slice, in input order.
    pub rows: Vec<usize>,
}

impl<T: Float> Group<T> {
    /// Extract the ordered finite numeric values of one field within this
    /// group.
    pub fn column(&self, rows: &[Row<T>], field: &str) -> Vec<T> {
        self.rows
            .iter()
            .filter_map(|&i| rows[i].get(field).and_then(Value::as_num))
            .filter(|v| v.is_finite())
            .collect()
    }
}

// ============================================================================
// Partitioner
// ============================================================================

/// Partition rows into groups by the `group_by` field tuple.
pub fn partition<T: Float>(rows: &[Row<T>], group_by: &[String]) -> Vec<Group<T>> {
    if group_by.is_empty() {
        // One implicit group holding every row (possibly none).
        return vec![Group {
            key_fields: Vec::new(),
            rows: (0..rows.len()).collect(),
        }];
    }

    let mut slots: HashMap<Vec<KeyAtom>, usize> = HashMap::new();
    let mut groups: Vec<Group<T>> = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let key: Vec<KeyAtom> = group_by
            .iter()
            .map(|field| {
                row.get(field)
                    .map(Value::key_atom)
                    .unwrap_or(KeyAtom::Absent)
            })
            .collect();

        let slot = match slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                slots.insert(key, slot);
                // Absent grouping fields stay absent in the output rows.
                groups.push(Group {
                    key_fields: group_by
                        .iter()
                        .filter_map(|field| {
                            row.get(field).cloned().map(|value| (field.clone(), value))
                        })
                        .collect(),
                    rows: Vec::new(),
                });
                slot
            }
        };
        groups[slot].rows.push(index);
    }

    groups
}
