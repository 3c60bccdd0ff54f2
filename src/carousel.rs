//! Carousel controller state machine.
//!
//! `Carousel` owns everything about one carousel except the DOM: the busy
//! guard, the gesture tracker and the card count. Each operation takes the
//! current time and, where needed, the track's scroll metrics, and returns a
//! [`ScrollCommand`] for the caller to apply. Nothing here touches the page,
//! which keeps the borrow of the shared state short in the wasm event
//! handlers and makes every rule testable natively.

use crate::busy::BusyGuard;
use crate::config::CarouselConfig;
use crate::gesture::{
    GesturePolicy, GestureTracker, InputSource, MoveOutcome, Point, SwipeDirection,
};
use crate::navigation::{NavState, TrackMetrics};

/// Track cursor while idle.
pub const CURSOR_IDLE: &str = "grab";
/// Track cursor while a pointer drag is in progress.
pub const CURSOR_DRAGGING: &str = "grabbing";

/// A scroll the caller must perform on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Animated scroll relative to the current offset.
    SmoothBy(f64),
    /// Animated scroll to an absolute offset.
    SmoothTo(f64),
    /// Immediate offset change.
    Jump(f64),
}

/// Result of a pointer or touch event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureResponse {
    /// Call `preventDefault` on the event.
    pub suppress_default: bool,
    /// Scroll to perform, if any.
    pub command: Option<ScrollCommand>,
    /// New track cursor, if it changes.
    pub cursor: Option<&'static str>,
}

/// One carousel instance.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    card_count: usize,
    busy: BusyGuard,
    gesture: GestureTracker,
}

impl Carousel {
    pub fn new(card_count: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            card_count,
            busy: BusyGuard::new(),
            gesture: GestureTracker::new(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn is_busy(&self, now_ms: f64) -> bool {
        self.busy.is_busy(now_ms)
    }

    /// Scroll back one step unless a programmatic scroll is in flight.
    pub fn scroll_prev(&mut self, now_ms: f64) -> Option<ScrollCommand> {
        self.guarded(now_ms, ScrollCommand::SmoothBy(-self.config.scroll_step))
    }

    /// Scroll forward one step unless a programmatic scroll is in flight.
    pub fn scroll_next(&mut self, now_ms: f64) -> Option<ScrollCommand> {
        self.guarded(now_ms, ScrollCommand::SmoothBy(self.config.scroll_step))
    }

    /// Scroll so card `index` sits at the start of the track.
    ///
    /// Out-of-range indices are ignored. The jump shares the busy guard with
    /// `scroll_prev`/`scroll_next` so two animations never overlap.
    #[allow(clippy::cast_precision_loss)]
    pub fn scroll_to_card(&mut self, index: usize, now_ms: f64) -> Option<ScrollCommand> {
        if index >= self.card_count {
            tracing::debug!(index, card_count = self.card_count, "card index out of range");
            return None;
        }
        let target = index as f64 * self.config.scroll_step;
        self.guarded(now_ms, ScrollCommand::SmoothTo(target))
    }

    /// Enablement of the navigation controls for `metrics`.
    pub fn update_navigation(&self, metrics: TrackMetrics) -> NavState {
        NavState::from_metrics(metrics)
    }

    /// The track finished its animated scroll.
    pub fn scroll_settled(&mut self) {
        self.busy.release();
    }

    /// Map a keydown on the root to navigation.
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> Option<ScrollCommand> {
        match key {
            "ArrowLeft" => self.scroll_prev(now_ms),
            "ArrowRight" => self.scroll_next(now_ms),
            _ => None,
        }
    }

    /// A finger touched the track. Ignored during a pointer drag.
    pub fn touch_start(&mut self, at: Point) {
        if !self.gesture.press(InputSource::Touch, at, 0.0) {
            tracing::debug!("touch during pointer drag ignored");
        }
    }

    /// A finger moved over the track.
    pub fn touch_move(&mut self, at: Point) -> GestureResponse {
        let policy = self.policy();
        let MoveOutcome {
            suppress_default, ..
        } = self.gesture.moved(InputSource::Touch, at, policy);
        GestureResponse {
            suppress_default,
            ..GestureResponse::default()
        }
    }

    /// The finger lifted; a swipe navigates one step.
    pub fn touch_end(&mut self, now_ms: f64) -> GestureResponse {
        let policy = self.policy();
        let command = self
            .gesture
            .release(InputSource::Touch, policy)
            .and_then(|release| {
                tracing::debug!(
                    dx = release.delta.x,
                    dy = release.delta.y,
                    swipe = ?release.swipe,
                    "touch released"
                );
                release.swipe
            })
            .and_then(|direction| match direction {
                SwipeDirection::Prev => self.scroll_prev(now_ms),
                SwipeDirection::Next => self.scroll_next(now_ms),
            });
        GestureResponse {
            command,
            ..GestureResponse::default()
        }
    }

    /// The platform aborted the touch; the gesture never navigates.
    pub fn touch_cancel(&mut self) {
        let policy = self.policy();
        self.gesture.release(InputSource::Touch, policy);
    }

    /// The pointer was pressed on the track at offset `scroll_left`.
    ///
    /// Ignored while a touch gesture is in progress.
    pub fn pointer_down(&mut self, at: Point, scroll_left: f64) -> GestureResponse {
        if !self.gesture.press(InputSource::Pointer, at, scroll_left) {
            return GestureResponse::default();
        }
        GestureResponse {
            cursor: Some(CURSOR_DRAGGING),
            ..GestureResponse::default()
        }
    }

    /// The pointer moved; while pressed the track follows it.
    pub fn pointer_move(&mut self, at: Point) -> GestureResponse {
        let policy = self.policy();
        let outcome = self.gesture.moved(InputSource::Pointer, at, policy);
        GestureResponse {
            suppress_default: outcome.suppress_default,
            command: outcome.jump_to.map(ScrollCommand::Jump),
            cursor: None,
        }
    }

    /// The pointer was released or left the track.
    ///
    /// The cursor is always reset to idle, whether or not a drag was active.
    pub fn pointer_up(&mut self) -> GestureResponse {
        let policy = self.policy();
        self.gesture.release(InputSource::Pointer, policy);
        GestureResponse {
            cursor: Some(CURSOR_IDLE),
            ..GestureResponse::default()
        }
    }

    pub fn gesture_source(&self) -> Option<InputSource> {
        self.gesture.active_source()
    }

    fn policy(&self) -> GesturePolicy {
        GesturePolicy {
            swipe_threshold: self.config.swipe_threshold,
            drag_multiplier: self.config.drag_multiplier,
        }
    }

    fn guarded(&mut self, now_ms: f64, command: ScrollCommand) -> Option<ScrollCommand> {
        if !self.busy.try_acquire(now_ms, self.config.cooldown_ms) {
            tracing::debug!(?command, "carousel busy, dropping scroll");
            return None;
        }
        tracing::debug!(?command, "carousel scroll");
        Some(command)
    }
}
