//! Tests for option, extent, and bandwidth resolution.
//!
//! These tests verify configuration validation, default merging, extent
//! derivation, and the lenient bandwidth fallback chain.

use std::sync::Arc;

use approx::assert_relative_eq;
use kdensity::engine::resolver::{resolve, resolve_extent, select_bandwidth};
use kdensity::prelude::*;

fn numeric_view(values: &[f64]) -> DataView<f64> {
    DataView::from_rows(
        values
            .iter()
            .map(|&v| Row::new().with("v", Value::Num(v)))
            .collect(),
    )
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn missing_fields_is_an_error() {
    let view = numeric_view(&[1.0, 2.0]);
    let options: KdeOptions<f64> = KdeOptions::new();
    assert!(matches!(
        resolve(&options, &view),
        Err(KdeError::MissingFields)
    ));
}

#[test]
fn output_must_name_exactly_three_fields() {
    let view = numeric_view(&[1.0, 2.0]);
    let options: KdeOptions<f64> = KdeOptions::new().fields(["v"]).output(["key", "y"]);
    assert!(matches!(
        resolve(&options, &view),
        Err(KdeError::InvalidOutputFields { got: 2 })
    ));
}

#[test]
fn unknown_kernel_name_is_an_error() {
    let view = numeric_view(&[1.0, 2.0]);
    let options: KdeOptions<f64> = KdeOptions::new().fields(["v"]).method("banana");
    match resolve(&options, &view) {
        Err(KdeError::UnknownKernel(name)) => assert_eq!(name, "banana"),
        other => panic!("expected UnknownKernel, got {:?}", other),
    }
}

#[test]
fn defaults_cover_the_unset_options() {
    let options: KdeOptions<f64> = KdeOptions::new();
    assert_eq!(options.output, vec!["key", "y", "size"]);
    assert_relative_eq!(options.min_size, 0.01);
    assert_eq!(options.step, 0.0);
    assert!(options.group_by.is_empty());
    assert!(options.extent.is_none());
}

// ============================================================================
// Extent Tests
// ============================================================================

#[test]
fn explicit_extent_is_used_verbatim() {
    let view = numeric_view(&[1.0, 100.0]);
    let extent = resolve_extent(Some((-5.0, 5.0)), &["v".to_string()], &view);
    assert_eq!(extent, (-5.0, 5.0));
}

#[test]
fn derived_extent_unions_all_configured_fields() {
    let view = DataView::from_rows(vec![
        Row::new().with("u", Value::Num(1.0)).with("v", Value::Num(10.0)),
        Row::new().with("u", Value::Num(3.0)).with("v", Value::Num(12.0)),
    ]);
    let fields = vec!["u".to_string(), "v".to_string()];
    assert_eq!(resolve_extent(None, &fields, &view), (1.0, 12.0));
}

#[test]
fn derived_extent_degenerates_when_no_field_has_data() {
    let view: DataView<f64> = DataView::new();
    let extent = resolve_extent(None, &["v".to_string()], &view);
    assert_eq!(extent, (0.0, 0.0));
}

// ============================================================================
// Bandwidth Selection Tests
// ============================================================================

#[test]
fn fixed_bandwidth_is_used_when_positive_and_finite() {
    let column = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(select_bandwidth(&Bandwidth::Fixed(2.0), &column), 2.0);
}

#[test]
fn unusable_fixed_bandwidth_falls_back_to_the_default_rule() {
    let column = [1.0, 2.0, 3.0, 4.0, 5.0];
    let expected = BandwidthRule::Nrd.compute(&column);

    assert_relative_eq!(select_bandwidth(&Bandwidth::Fixed(-1.0), &column), expected);
    assert_relative_eq!(select_bandwidth(&Bandwidth::Fixed(0.0), &column), expected);
    assert_relative_eq!(
        select_bandwidth(&Bandwidth::Fixed(f64::NAN), &column),
        expected
    );
}

#[test]
fn unknown_rule_name_falls_back_to_the_default_rule() {
    let column = [1.0, 2.0, 3.0, 4.0, 5.0];
    let expected = BandwidthRule::Nrd.compute(&column);
    assert_relative_eq!(
        select_bandwidth(&Bandwidth::Rule("nope".to_string()), &column),
        expected
    );
}

#[test]
fn named_rules_resolve_by_name() {
    let column = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_relative_eq!(
        select_bandwidth(&Bandwidth::Rule("nrd0".to_string()), &column),
        BandwidthRule::Nrd0.compute(&column)
    );
}

#[test]
fn custom_selector_returning_unusable_values_falls_back() {
    let column = [1.0, 2.0, 3.0, 4.0, 5.0];
    let zero: Bandwidth<f64> = Bandwidth::Custom(Arc::new(|_| 0.0));
    assert_relative_eq!(
        select_bandwidth(&zero, &column),
        BandwidthRule::Nrd.compute(&column)
    );

    let chosen: Bandwidth<f64> = Bandwidth::Custom(Arc::new(|vals: &[f64]| vals.len() as f64));
    assert_relative_eq!(select_bandwidth(&chosen, &column), 5.0);
}

// ============================================================================
// Step Tests
// ============================================================================

#[test]
fn unset_step_inherits_the_resolved_bandwidth() {
    let view = numeric_view(&[1.0, 2.0, 3.0]);
    let options: KdeOptions<f64> = KdeOptions::new().fields(["v"]).fixed_bandwidth(0.5);
    let resolved = resolve(&options, &view).unwrap();
    assert_relative_eq!(resolved.bandwidth, 0.5);
    assert_relative_eq!(resolved.step, 0.5);
}

#[test]
fn positive_step_overrides_the_bandwidth() {
    let view = numeric_view(&[1.0, 2.0, 3.0]);
    let options: KdeOptions<f64> = KdeOptions::new()
        .fields(["v"])
        .fixed_bandwidth(0.5)
        .step(0.25);
    let resolved = resolve(&options, &view).unwrap();
    assert_relative_eq!(resolved.step, 0.25);
}

#[test]
fn bandwidth_comes_from_the_first_field_only() {
    let view = DataView::from_rows(vec![
        Row::new().with("u", Value::Num(1.0)).with("v", Value::Num(0.0)),
        Row::new().with("u", Value::Num(2.0)).with("v", Value::Num(100.0)),
        Row::new().with("u", Value::Num(3.0)).with("v", Value::Num(200.0)),
        Row::new().with("u", Value::Num(4.0)).with("v", Value::Num(300.0)),
        Row::new().with("u", Value::Num(5.0)).with("v", Value::Num(400.0)),
    ]);
    let options: KdeOptions<f64> = KdeOptions::new().fields(["u", "v"]);
    let resolved = resolve(&options, &view).unwrap();
    let expected = BandwidthRule::Nrd.compute(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_relative_eq!(resolved.bandwidth, expected);
}
