//! Configuration tests
//!
//! Tests for defaults, JSON decoding, validation and per-root overrides.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use landing_carousel::{CarouselConfig, CarouselError};
use test_case::test_case;

#[test]
fn test_defaults_match_landing_page() {
    let config = CarouselConfig::default();
    assert_eq!(config.scroll_step, 420.0);
    assert_eq!(config.cooldown_ms, 300.0);
    assert_eq!(config.swipe_threshold, 50.0);
    assert_eq!(config.drag_multiplier, 2.0);
    assert_eq!(config.disabled_opacity, 0.5);
    assert_eq!(config.selectors.root, "[data-carousel]");
    assert_eq!(config.selectors.track, ".landing-hero__carousel-track");
    assert_eq!(config.selectors.card, ".landing-hero__carousel-card");
    assert_eq!(config.selectors.prev, "[data-carousel-prev]");
    assert_eq!(config.selectors.next, "[data-carousel-next]");
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_uses_camel_case() {
    let config = CarouselConfig::from_json(
        r#"{"scrollStep": 360, "cooldownMs": 450, "selectors": {"track": ".rail"}}"#,
    )
    .unwrap();
    assert_eq!(config.scroll_step, 360.0);
    assert_eq!(config.cooldown_ms, 450.0);
    assert_eq!(config.selectors.track, ".rail");
    assert_eq!(config.selectors.card, ".landing-hero__carousel-card");
    assert_eq!(config.swipe_threshold, 50.0);
}

#[test]
fn test_malformed_json_is_an_error() {
    let err = CarouselConfig::from_json("{scrollStep: }").unwrap_err();
    assert!(matches!(err, CarouselError::Json(_)));
}

#[test_case(r#"{"scrollStep": 0}"# ; "zero step")]
#[test_case(r#"{"scrollStep": -420}"# ; "negative step")]
#[test_case(r#"{"cooldownMs": -1}"# ; "negative cooldown")]
#[test_case(r#"{"swipeThreshold": -5}"# ; "negative threshold")]
#[test_case(r#"{"dragMultiplier": 0}"# ; "zero multiplier")]
#[test_case(r#"{"disabledOpacity": 1.5}"# ; "opacity above one")]
#[test_case(r#"{"selectors": {"track": "  "}}"# ; "blank track selector")]
fn test_out_of_range_values_are_rejected(json: &str) {
    let err = CarouselConfig::from_json(json).unwrap_err();
    assert!(matches!(err, CarouselError::Config(_)), "{err}");
}

#[test]
fn test_error_names_the_field() {
    let err = CarouselConfig::from_json(r#"{"dragMultiplier": -2}"#).unwrap_err();
    assert!(err.to_string().contains("dragMultiplier"));
}

#[test]
fn test_root_attribute_overrides_page_config() {
    let page = CarouselConfig {
        scroll_step: 360.0,
        ..CarouselConfig::default()
    };
    let config = page.for_root(Some(r#"{"swipeThreshold": 80}"#));
    assert_eq!(config.swipe_threshold, 80.0);
    assert_eq!(config.scroll_step, 360.0);
}

#[test]
fn test_invalid_root_attribute_falls_back() {
    let page = CarouselConfig {
        scroll_step: 360.0,
        ..CarouselConfig::default()
    };
    assert_eq!(page.for_root(Some("not json")), page);
    assert_eq!(page.for_root(Some(r#"{"scrollStep": -1}"#)), page);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = CarouselConfig {
        cooldown_ms: 250.0,
        ..CarouselConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"cooldownMs\":250"));
    assert_eq!(CarouselConfig::from_json(&json).unwrap(), config);
}
