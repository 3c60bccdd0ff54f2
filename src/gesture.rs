//! Gesture tracking for touch swipes and pointer drags.
//!
//! One tracker serves both input sources. A gesture runs
//! `Idle -> Active -> Idle`; the source recorded at `press` decides how moves
//! and the release are interpreted:
//!
//! - Touch: moves only ask to suppress the page's vertical scroll while the
//!   gesture is mostly horizontal; the release may classify a swipe.
//! - Pointer: moves jump the track directly by the amplified displacement;
//!   the release never navigates.
//!
//! Events from a source other than the active one are ignored, so emulated
//! mouse events after a touch cannot disturb a touch gesture.

/// Where a gesture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Pointer,
}

/// Position of an input in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Navigation direction of a classified swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged right: go back.
    Prev,
    /// Content dragged left: go forward.
    Next,
}

/// Thresholds shared by every gesture on one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePolicy {
    pub swipe_threshold: f64,
    pub drag_multiplier: f64,
}

/// What the widget should do after a move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveOutcome {
    /// Call `preventDefault` on the event.
    pub suppress_default: bool,
    /// Set the track offset immediately (pointer drag).
    pub jump_to: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    source: InputSource,
    start: Point,
    delta: Point,
    start_scroll: f64,
}

/// Transient gesture state for one carousel.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the gesture in progress, if any.
    pub fn active_source(&self) -> Option<InputSource> {
        self.active.map(|g| g.source)
    }

    /// Begin a gesture of `source`.
    ///
    /// A second press of the same source replaces its unfinished gesture. A
    /// press while the other source is mid-gesture is ignored and returns
    /// `false`.
    pub fn press(&mut self, source: InputSource, at: Point, scroll_left: f64) -> bool {
        if self.active.is_some_and(|g| g.source != source) {
            return false;
        }
        self.active = Some(ActiveGesture {
            source,
            start: at,
            delta: Point::default(),
            start_scroll: scroll_left,
        });
        true
    }

    /// Track a move of `source` to `at`.
    pub fn moved(&mut self, source: InputSource, at: Point, policy: GesturePolicy) -> MoveOutcome {
        let Some(gesture) = self.active.as_mut().filter(|g| g.source == source) else {
            return MoveOutcome::default();
        };
        gesture.delta = Point::new(at.x - gesture.start.x, at.y - gesture.start.y);
        match source {
            InputSource::Touch => MoveOutcome {
                suppress_default: gesture.delta.x.abs() > gesture.delta.y.abs(),
                jump_to: None,
            },
            InputSource::Pointer => MoveOutcome {
                suppress_default: true,
                jump_to: Some(gesture.start_scroll - gesture.delta.x * policy.drag_multiplier),
            },
        }
    }

    /// End the gesture of `source` and classify it.
    ///
    /// Returns `None` when no gesture of that source was active. The tracker
    /// is back to idle afterwards regardless of the classification.
    pub fn release(&mut self, source: InputSource, policy: GesturePolicy) -> Option<Release> {
        let gesture = self.active.filter(|g| g.source == source)?;
        self.active = None;
        let swipe = match source {
            InputSource::Touch => classify_swipe(gesture.delta, policy.swipe_threshold),
            InputSource::Pointer => None,
        };
        Some(Release {
            delta: gesture.delta,
            swipe,
        })
    }
}

/// A finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub delta: Point,
    pub swipe: Option<SwipeDirection>,
}

/// Classify a displacement as a swipe.
///
/// The horizontal travel must exceed both `threshold` and the vertical travel.
pub fn classify_swipe(delta: Point, threshold: f64) -> Option<SwipeDirection> {
    let dx = delta.x.abs();
    if dx <= threshold || dx <= delta.y.abs() {
        return None;
    }
    if delta.x > 0.0 {
        Some(SwipeDirection::Prev)
    } else {
        Some(SwipeDirection::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: GesturePolicy = GesturePolicy {
        swipe_threshold: 50.0,
        drag_multiplier: 2.0,
    };

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        let outcome = tracker.moved(InputSource::Touch, Point::new(10.0, 0.0), POLICY);
        assert_eq!(outcome, MoveOutcome::default());
        assert!(tracker.release(InputSource::Touch, POLICY).is_none());
    }

    #[test]
    fn test_press_of_other_source_is_refused() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.press(InputSource::Pointer, Point::new(300.0, 0.0), 0.0));
        assert!(!tracker.press(InputSource::Touch, Point::new(10.0, 10.0), 0.0));
        assert_eq!(tracker.active_source(), Some(InputSource::Pointer));
        assert!(tracker.press(InputSource::Pointer, Point::new(100.0, 0.0), 0.0));
    }

    #[test]
    fn test_exact_threshold_is_not_a_swipe() {
        assert_eq!(classify_swipe(Point::new(-50.0, 0.0), 50.0), None);
        assert_eq!(
            classify_swipe(Point::new(-50.5, 0.0), 50.0),
            Some(SwipeDirection::Next)
        );
    }

    #[test]
    fn test_diagonal_tie_is_not_a_swipe() {
        assert_eq!(classify_swipe(Point::new(80.0, -80.0), 50.0), None);
    }
}
