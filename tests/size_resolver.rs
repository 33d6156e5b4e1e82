//! Size resolution tests
//!
//! Literal and element-relative sizes, clamping order, nested bounds and
//! configuration errors.

mod common;

use common::measure;
use inline_edit::config::EditorConfig;
use inline_edit::size::{resolve, Axis, SizeError, SizeSpec, SizeValue};

// ========================================================================
// Literals and expressions
// ========================================================================

#[test]
fn test_literal_sizes_resolve_unchanged() {
    for value in [0.0, 1.0, 17.5, 320.0, 1e6] {
        let spec = SizeSpec::new(value, value);
        let size = resolve(&spec, measure(999.0, 999.0)).unwrap();
        assert_eq!(size.width.value, value);
        assert_eq!(size.height.value, value);
        assert_eq!(size.width.min, None);
        assert_eq!(size.width.max, None);
    }
}

#[test]
fn test_literal_strings_parse_as_numbers() {
    let spec = SizeSpec::new("120", " 30.5 ");
    let size = resolve(&spec, measure(0.0, 0.0)).unwrap();
    assert_eq!(size.width.value, 120.0);
    assert_eq!(size.height.value, 30.5);
}

#[test]
fn test_element_expressions() {
    let m = 40.0;
    let cases = [
        ("element", m),
        ("element+10", m + 10.0),
        ("element-10", m - 10.0),
        ("element*3", m * 3.0),
        ("element/4", m / 4.0),
        ("element + 2.5", m + 2.5),
    ];
    for (expr, expected) in cases {
        let spec = SizeSpec::new(expr, expr);
        let size = resolve(&spec, measure(m, m)).unwrap();
        assert_eq!(size.width.value, expected, "width for {}", expr);
        assert_eq!(size.height.value, expected, "height for {}", expr);
    }
}

#[test]
fn test_axes_measure_independently() {
    let spec = SizeSpec::new("element+1", "element*2");
    let size = resolve(&spec, measure(100.0, 7.0)).unwrap();
    assert_eq!(size.width.value, 101.0);
    assert_eq!(size.height.value, 14.0);
}

// ========================================================================
// Clamping
// ========================================================================

#[test]
fn test_min_applied_before_max() {
    let below = SizeSpec::new(50u32, 10u32)
        .with_min(Axis::Width, 80u32)
        .with_max(Axis::Width, 120u32);
    assert_eq!(resolve(&below, measure(0.0, 0.0)).unwrap().width.value, 80.0);

    let above = SizeSpec::new(150u32, 10u32)
        .with_min(Axis::Width, 80u32)
        .with_max(Axis::Width, 120u32);
    assert_eq!(resolve(&above, measure(0.0, 0.0)).unwrap().width.value, 120.0);
}

#[test]
fn test_min_above_max_pins_to_max() {
    let spec = SizeSpec::new(10u32, 10u32)
        .with_min(Axis::Height, 200u32)
        .with_max(Axis::Height, 50u32);
    let size = resolve(&spec, measure(0.0, 0.0)).unwrap();
    assert_eq!(size.height.value, 50.0);
    assert_eq!(size.height.min, Some(200.0));
    assert_eq!(size.height.max, Some(50.0));
}

#[test]
fn test_bounds_can_be_expressions() {
    let spec = SizeSpec::new(500u32, 10u32)
        .with_min(Axis::Width, "element/2")
        .with_max(Axis::Width, "element+20");
    let size = resolve(&spec, measure(100.0, 0.0)).unwrap();
    assert_eq!(size.width.value, 120.0);
    assert_eq!(size.width.min, Some(50.0));
    assert_eq!(size.width.max, Some(120.0));
}

#[test]
fn test_resolved_bounds_are_reported() {
    let spec = SizeSpec::default();
    let size = resolve(&spec, measure(300.0, 20.0)).unwrap();
    assert_eq!(size.width.value, 300.0);
    assert_eq!(size.width.min, Some(100.0));
    assert_eq!(size.height.min, Some(15.0));
    assert_eq!(size.width.max, None);
    assert_eq!(
        size.style_declarations(),
        vec![
            ("width".to_string(), 300.0),
            ("min-width".to_string(), 100.0),
            ("height".to_string(), 20.0),
            ("min-height".to_string(), 15.0),
        ]
    );
}

// ========================================================================
// Nested configuration
// ========================================================================

#[test]
fn test_end_to_end_min_boundary() {
    let config =
        EditorConfig::from_yaml("sizes:\n  width: element+10\n  min:\n    width: 50\n").unwrap();
    let size = resolve(&config.sizes, measure(40.0, 18.0)).unwrap();
    assert_eq!(size.width.value, 50.0);
    assert_eq!(size.width.min, Some(50.0));
    assert_eq!(size.height.value, 18.0);
}

#[test]
fn test_null_bound_is_unbounded_not_zero() {
    let config =
        EditorConfig::from_yaml("sizes:\n  width: 30\n  min:\n    width: null\n  max:\n    width: null\n")
            .unwrap();
    let size = resolve(&config.sizes, measure(0.0, 0.0)).unwrap();
    assert_eq!(size.width.value, 30.0);
    assert_eq!(size.width.min, None);
    assert_eq!(size.width.max, None);
}

#[test]
fn test_zero_max_is_respected() {
    let spec = SizeSpec::new(30u32, 30u32).with_max(Axis::Width, 0u32);
    let size = resolve(&spec, measure(0.0, 0.0)).unwrap();
    assert_eq!(size.width.value, 0.0);
}

// ========================================================================
// Configuration errors
// ========================================================================

#[test]
fn test_division_by_zero_is_reported() {
    let spec = SizeSpec::new("element/0", 10u32);
    let err = resolve(&spec, measure(40.0, 0.0)).unwrap_err();
    assert!(matches!(err.cause(), SizeError::DivisionByZero(_)));
    assert!(err.to_string().starts_with("width:"));
}

#[test]
fn test_malformed_string_is_reported() {
    let spec = SizeSpec::new(10u32, 10u32).with_min(Axis::Height, "abc");
    let err = resolve(&spec, measure(40.0, 0.0)).unwrap_err();
    assert_eq!(err, SizeError::Malformed("abc".into()).at("min.height"));
}

#[test]
fn test_negative_literal_is_reported() {
    let spec = SizeSpec::new(SizeValue::Number(-5.0), 10u32);
    let err = resolve(&spec, measure(40.0, 0.0)).unwrap_err();
    assert_eq!(err.cause(), &SizeError::Negative(-5.0));
}

#[test]
fn test_no_nan_ever_escapes() {
    let spec = SizeSpec::new("element*2", "element");
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(resolve(&spec, measure(bad, 10.0)).is_err());
    }
}

#[test]
fn test_negative_relative_result_is_allowed() {
    // Only literals must be non-negative; a min bound is how callers floor it
    let spec = SizeSpec::new("element-50", 10u32).with_min(Axis::Width, 0u32);
    let size = resolve(&spec, measure(20.0, 0.0)).unwrap();
    assert_eq!(size.width.value, 0.0);
}
