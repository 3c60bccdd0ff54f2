//! Carousel configuration.
//!
//! Every field has a default matching the landing page markup, so an empty
//! JSON object (or no options at all) yields a working carousel. Values can be
//! supplied from JavaScript as an options object or per root through a
//! `data-carousel-config` attribute holding JSON.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, Result};

/// Attribute holding a per-root JSON configuration override.
pub const CONFIG_ATTRIBUTE: &str = "data-carousel-config";

/// Tunables for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Distance advanced per navigation action (card width + gap).
    pub scroll_step: f64,
    /// How long the busy guard holds after a programmatic scroll.
    pub cooldown_ms: f64,
    /// Minimum horizontal travel for a touch gesture to count as a swipe.
    pub swipe_threshold: f64,
    /// Amplification applied to pointer drag displacement.
    pub drag_multiplier: f64,
    /// Opacity of a disabled navigation control.
    pub disabled_opacity: f64,
    pub selectors: Selectors,
}

/// CSS selectors locating the carousel and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Marks a carousel root for auto-discovery.
    pub root: String,
    /// Scrollable track, relative to the root.
    pub track: String,
    /// Card elements, relative to the root.
    pub card: String,
    /// Optional "previous" control, relative to the root.
    pub prev: String,
    /// Optional "next" control, relative to the root.
    pub next: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: 420.0,
            cooldown_ms: 300.0,
            swipe_threshold: 50.0,
            drag_multiplier: 2.0,
            disabled_opacity: 0.5,
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            root: "[data-carousel]".to_string(),
            track: ".landing-hero__carousel-track".to_string(),
            card: ".landing-hero__carousel-card".to_string(),
            prev: "[data-carousel-prev]".to_string(),
            next: "[data-carousel-next]".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can drive a carousel.
    ///
    /// # Errors
    /// Returns `CarouselError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.scroll_step.is_finite() || self.scroll_step <= 0.0 {
            return Err(invalid("scrollStep", self.scroll_step));
        }
        if !self.cooldown_ms.is_finite() || self.cooldown_ms < 0.0 {
            return Err(invalid("cooldownMs", self.cooldown_ms));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(invalid("swipeThreshold", self.swipe_threshold));
        }
        if !self.drag_multiplier.is_finite() || self.drag_multiplier <= 0.0 {
            return Err(invalid("dragMultiplier", self.drag_multiplier));
        }
        if !(0.0..=1.0).contains(&self.disabled_opacity) {
            return Err(invalid("disabledOpacity", self.disabled_opacity));
        }
        let selectors = [
            ("selectors.root", &self.selectors.root),
            ("selectors.track", &self.selectors.track),
            ("selectors.card", &self.selectors.card),
            ("selectors.prev", &self.selectors.prev),
            ("selectors.next", &self.selectors.next),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(CarouselError::Config(format!("{name} must not be empty")));
        }
        Ok(())
    }

    /// Resolve the configuration for one root.
    ///
    /// `attribute` is the raw `data-carousel-config` value, if present. It
    /// overrides `self` field by field; a malformed or invalid attribute is
    /// rejected and `self` is used unchanged.
    pub fn for_root(&self, attribute: Option<&str>) -> Self {
        let Some(raw) = attribute.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return self.clone();
        };
        match self.merged_with(raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring {CONFIG_ATTRIBUTE}");
                self.clone()
            }
        }
    }

    fn merged_with(&self, raw: &str) -> Result<Self> {
        let mut base = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(raw)?;
        merge_json(&mut base, overrides);
        let config: Self = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }
}

fn invalid(field: &str, value: f64) -> CarouselError {
    CarouselError::Config(format!("{field} out of range: {value}"))
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
