//! Navigation enablement tests
//!
//! Tests for previous/next control state at the track bounds and in between.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use landing_carousel::{ButtonState, Carousel, CarouselConfig, NavState, TrackMetrics};

/// Track 5 cards wide (2100px) in an 800px viewport: max scroll 1300.
fn metrics_at(scroll_left: f64) -> TrackMetrics {
    TrackMetrics::new(scroll_left, 2100.0, 800.0)
}

#[test]
fn test_max_scroll() {
    assert_eq!(metrics_at(0.0).max_scroll(), 1300.0);
}

#[test]
fn test_start_disables_prev() {
    let nav = NavState::from_metrics(metrics_at(0.0));
    assert_eq!(nav.prev, ButtonState::Disabled);
    assert_eq!(nav.next, ButtonState::Enabled);
}

#[test]
fn test_end_disables_next() {
    let nav = NavState::from_metrics(metrics_at(1300.0));
    assert_eq!(nav.prev, ButtonState::Enabled);
    assert_eq!(nav.next, ButtonState::Disabled);
}

#[test]
fn test_middle_enables_both() {
    for offset in [1.0, 420.0, 840.0, 1299.5] {
        let nav = NavState::from_metrics(metrics_at(offset));
        assert!(nav.prev.is_enabled(), "prev at {offset}");
        assert!(nav.next.is_enabled(), "next at {offset}");
    }
}

#[test]
fn test_overscroll_counts_as_bound() {
    // Elastic scrolling can report offsets past either end.
    assert_eq!(
        NavState::from_metrics(metrics_at(-12.0)).prev,
        ButtonState::Disabled
    );
    assert_eq!(
        NavState::from_metrics(metrics_at(1320.0)).next,
        ButtonState::Disabled
    );
}

#[test]
fn test_update_navigation_is_idempotent() {
    let carousel = Carousel::new(5, CarouselConfig::default());
    let first = carousel.update_navigation(metrics_at(420.0));
    let second = carousel.update_navigation(metrics_at(420.0));
    assert_eq!(first, second);
}

#[test]
fn test_navigation_ignores_busy_state() {
    let mut carousel = Carousel::new(5, CarouselConfig::default());
    let before = carousel.update_navigation(metrics_at(0.0));
    assert!(carousel.scroll_next(0.0).is_some());
    assert_eq!(carousel.update_navigation(metrics_at(0.0)), before);
}

#[test]
fn test_disabled_opacity_from_config() {
    let config = CarouselConfig {
        disabled_opacity: 0.3,
        ..CarouselConfig::default()
    };
    assert_eq!(ButtonState::Disabled.opacity(config.disabled_opacity), "0.3");
    assert_eq!(ButtonState::Enabled.opacity(config.disabled_opacity), "1");
}
