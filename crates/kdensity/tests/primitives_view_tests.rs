//! Tests for the tabular view primitives.
//!
//! These tests verify the row/value data model and the view's column
//! extraction, range queries, and wholesale row replacement.

use kdensity::primitives::value::{KeyAtom, Row, Value};
use kdensity::primitives::view::DataView;

// ============================================================================
// Row Tests
// ============================================================================

#[test]
fn row_preserves_insertion_order_and_replaces_on_set() {
    let mut row: Row<f64> = Row::new()
        .with("a", Value::Num(1.0))
        .with("b", Value::from("x"));
    row.set("a", Value::Num(2.0));

    let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(row.get("a").and_then(Value::as_num), Some(2.0));
    assert_eq!(row.len(), 2);
}

#[test]
fn value_accessors_reject_mismatched_variants() {
    let num: Value<f64> = Value::Num(1.5);
    let text: Value<f64> = Value::from("hello");
    let series: Value<f64> = Value::Series(vec![1.0, 2.0]);

    assert_eq!(num.as_num(), Some(1.5));
    assert_eq!(num.as_str(), None);
    assert_eq!(text.as_str(), Some("hello"));
    assert_eq!(text.as_series(), None);
    assert_eq!(series.as_series(), Some(&[1.0, 2.0][..]));
    assert_eq!(series.as_num(), None);
}

// ============================================================================
// Key Atom Tests
// ============================================================================

#[test]
fn key_atoms_use_structural_equality() {
    let a: Value<f64> = Value::Num(1.0);
    let b: Value<f64> = Value::Num(1.0);
    assert_eq!(a.key_atom(), b.key_atom());

    // NaN groups with NaN thanks to bit-pattern keys.
    let nan: Value<f64> = Value::Num(f64::NAN);
    assert_eq!(nan.key_atom(), nan.key_atom());

    let text: Value<f64> = Value::from("a");
    assert_eq!(text.key_atom(), KeyAtom::Text("a".to_string()));

    // Series values do not participate in grouping.
    let series: Value<f64> = Value::Series(vec![1.0]);
    assert_eq!(series.key_atom(), KeyAtom::Absent);
}

// ============================================================================
// View Tests
// ============================================================================

fn sample_view() -> DataView<f64> {
    DataView::from_rows(vec![
        Row::new().with("v", Value::Num(3.0)).with("g", Value::from("a")),
        Row::new().with("v", Value::Num(1.0)),
        Row::new().with("v", Value::from("oops")),
        Row::new().with("v", Value::Num(f64::NAN)),
        Row::new().with("v", Value::Num(2.0)),
    ])
}

#[test]
fn column_skips_missing_non_numeric_and_non_finite_cells() {
    let view = sample_view();
    assert_eq!(view.column("v"), vec![3.0, 1.0, 2.0]);
    assert_eq!(view.column("g"), Vec::<f64>::new());
    assert_eq!(view.column("absent"), Vec::<f64>::new());
}

#[test]
fn range_unions_finite_values_only() {
    let view = sample_view();
    assert_eq!(view.range("v"), Some((1.0, 3.0)));
    assert_eq!(view.range("g"), None);
    assert_eq!(view.range("absent"), None);
}

#[test]
fn replace_rows_swaps_the_whole_sequence() {
    let mut view = sample_view();
    let replacement = vec![Row::new().with("k", Value::from("done"))];
    view.replace_rows(replacement.clone());
    assert_eq!(view.rows(), &replacement[..]);
    assert_eq!(view.len(), 1);
}
