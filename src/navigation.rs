//! Navigation control enablement.
//!
//! Enablement is recomputed from the track's scroll metrics every time it is
//! needed and never cached, so it always matches the real scroll position.

/// Snapshot of the track's horizontal scroll geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackMetrics {
    /// Current horizontal offset (`scrollLeft`).
    pub scroll_left: f64,
    /// Full content width (`scrollWidth`).
    pub scroll_width: f64,
    /// Visible width (`clientWidth`).
    pub client_width: f64,
}

impl TrackMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// Largest reachable offset.
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// Visual state of one navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
}

impl ButtonState {
    fn from_disabled(disabled: bool) -> Self {
        if disabled {
            Self::Disabled
        } else {
            Self::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }

    /// CSS `opacity` value for this state.
    pub fn opacity(self, disabled_opacity: f64) -> String {
        match self {
            Self::Enabled => "1".to_string(),
            Self::Disabled => disabled_opacity.to_string(),
        }
    }

    /// CSS `pointer-events` value for this state.
    pub fn pointer_events(self) -> &'static str {
        match self {
            Self::Enabled => "auto",
            Self::Disabled => "none",
        }
    }
}

/// Enablement of both controls for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub prev: ButtonState,
    pub next: ButtonState,
}

impl NavState {
    /// Previous is disabled at or before the start, next at or past the end.
    pub fn from_metrics(metrics: TrackMetrics) -> Self {
        Self {
            prev: ButtonState::from_disabled(metrics.scroll_left <= 0.0),
            next: ButtonState::from_disabled(metrics.scroll_left >= metrics.max_scroll()),
        }
    }
}
