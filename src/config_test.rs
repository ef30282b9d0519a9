#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_documented_constants() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.min_scale, 0.5);
    assert_eq!(cfg.max_scale, 2.0);
    assert_eq!(cfg.move_min, 20.0);
    assert_eq!(cfg.move_max, 280.0);
    assert_eq!(cfg.default_position, Point::new(150.0, 150.0));
    assert_eq!(cfg.nudge_step, 5.0);
    assert_eq!(cfg.zoom_step, 0.1);
    assert_eq!(cfg.large_footprint, Size::new(60.0, 60.0));
    assert_eq!(cfg.small_footprint, Size::new(40.0, 40.0));
    assert!(cfg.validate().is_ok());
}

#[test]
fn footprint_by_class() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.footprint(PositionClass::ChestLeft), cfg.large_footprint);
    assert_eq!(cfg.footprint(PositionClass::Pants), cfg.small_footprint);
    assert_eq!(cfg.footprint(PositionClass::SleeveRight), cfg.small_footprint);
}

#[test]
fn clamp_helpers() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.clamp_scale(0.1), 0.5);
    assert_eq!(cfg.clamp_scale(9.0), 2.0);
    assert_eq!(cfg.clamp_scale(1.25), 1.25);
    assert_eq!(cfg.clamp_axis(-5.0), 20.0);
    assert_eq!(cfg.clamp_axis(500.0), 280.0);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn partial_json_keeps_defaults() {
    let cfg = EngineConfig::from_json(r#"{"nudge_step": 2.5}"#).unwrap();
    assert_eq!(cfg.nudge_step, 2.5);
    assert_eq!(cfg.max_scale, 2.0);
}

#[test]
fn nested_sizes_parse() {
    let cfg = EngineConfig::from_json(r#"{"small_footprint": {"width": 30, "height": 20}}"#).unwrap();
    assert_eq!(cfg.small_footprint, Size::new(30.0, 20.0));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EngineConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn inverted_scale_range_rejected() {
    let err = EngineConfig::from_json(r#"{"min_scale": 3.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidScaleRange { .. }));
}

#[test]
fn zero_min_scale_rejected() {
    let err = EngineConfig::from_json(r#"{"min_scale": 0.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidScaleRange { .. }));
}

#[test]
fn inverted_bounds_rejected() {
    let err = EngineConfig::from_json(r#"{"move_min": 300.0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBounds { .. }));
}

#[test]
fn zero_footprint_rejected() {
    let err = EngineConfig::from_json(r#"{"large_footprint": {"width": 0, "height": 10}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveFootprint { which: "large" }));
}

#[test]
fn negative_zoom_step_rejected() {
    let err = EngineConfig::from_json(r#"{"zoom_step": -0.1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveStep { which: "zoom" }));
}

#[test]
fn error_messages_are_readable() {
    let err = ConfigError::NonPositiveStep { which: "nudge" };
    assert_eq!(err.to_string(), "nudge step must be positive");
}

// =============================================================
// Fallback
// =============================================================

#[test]
fn valid_config_survives_or_default() {
    let cfg = EngineConfig { nudge_step: 2.0, ..EngineConfig::default() };
    assert_eq!(cfg.clone().or_default(), cfg);
}

#[test]
fn invalid_config_becomes_default() {
    let cfg = EngineConfig { min_scale: f64::NAN, ..EngineConfig::default() };
    assert_eq!(cfg.or_default(), EngineConfig::default());
    let cfg = EngineConfig { move_min: 300.0, move_max: 10.0, ..EngineConfig::default() };
    assert_eq!(cfg.or_default(), EngineConfig::default());
}
