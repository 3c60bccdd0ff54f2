//! DOM access for one carousel: locating parts, reading scroll metrics,
//! applying scroll commands and painting the navigation controls.

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::carousel::ScrollCommand;
use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::navigation::{NavState, TrackMetrics};

fn selector_error(selector: &str) -> CarouselError {
    CarouselError::Selector(selector.to_string())
}

/// Handles to the elements of one carousel.
#[derive(Clone)]
pub(crate) struct TrackDom {
    pub(crate) track: HtmlElement,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    disabled_opacity: f64,
}

impl TrackDom {
    /// Find the track, cards and controls under `root`.
    ///
    /// Returns the handles and the card count. Only the track is required.
    pub(crate) fn locate(root: &Element, config: &CarouselConfig) -> Result<(Self, usize)> {
        let selectors = &config.selectors;
        let track = root
            .query_selector(&selectors.track)
            .map_err(|_| selector_error(&selectors.track))?
            .ok_or(CarouselError::MissingElement("track"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CarouselError::Dom("track is not an HTML element".to_string()))?;
        let card_count = root
            .query_selector_all(&selectors.card)
            .map_err(|_| selector_error(&selectors.card))?
            .length();
        let prev = Self::control(root, &selectors.prev)?;
        let next = Self::control(root, &selectors.next)?;
        if prev.is_none() || next.is_none() {
            tracing::debug!(
                has_prev = prev.is_some(),
                has_next = next.is_some(),
                "carousel mounted without both controls"
            );
        }
        let dom = Self {
            track,
            prev,
            next,
            disabled_opacity: config.disabled_opacity,
        };
        Ok((dom, usize::try_from(card_count).unwrap_or_default()))
    }

    fn control(root: &Element, selector: &str) -> Result<Option<HtmlElement>> {
        let found = root
            .query_selector(selector)
            .map_err(|_| selector_error(selector))?;
        Ok(found.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
    }

    pub(crate) fn prev(&self) -> Option<&HtmlElement> {
        self.prev.as_ref()
    }

    pub(crate) fn next(&self) -> Option<&HtmlElement> {
        self.next.as_ref()
    }

    /// Unrounded track offset. The `Element::scroll_left` getter is integral
    /// and only serves as the fallback.
    pub(crate) fn scroll_left(&self) -> f64 {
        Reflect::get(self.track.as_ref(), &JsValue::from_str("scrollLeft"))
            .ok()
            .and_then(|offset| offset.as_f64())
            .unwrap_or_else(|| f64::from(self.track.scroll_left()))
    }

    pub(crate) fn metrics(&self) -> TrackMetrics {
        TrackMetrics::new(
            self.scroll_left(),
            f64::from(self.track.scroll_width()),
            f64::from(self.track.client_width()),
        )
    }

    /// Perform a scroll produced by the carousel state.
    pub(crate) fn apply(&self, command: ScrollCommand) {
        match command {
            ScrollCommand::SmoothBy(delta) => {
                let options = smooth_options(delta);
                self.track.scroll_by_with_scroll_to_options(&options);
            }
            ScrollCommand::SmoothTo(left) => {
                let options = smooth_options(left);
                self.track.scroll_to_with_scroll_to_options(&options);
            }
            ScrollCommand::Jump(left) => {
                let _ = Reflect::set(
                    self.track.as_ref(),
                    &JsValue::from_str("scrollLeft"),
                    &JsValue::from_f64(left),
                );
            }
        }
    }

    /// Apply the visual state of both controls. Missing controls are skipped.
    pub(crate) fn paint(&self, nav: NavState) {
        let controls = [(&self.prev, nav.prev), (&self.next, nav.next)];
        for (control, state) in controls {
            let Some(control) = control else {
                continue;
            };
            let style = control.style();
            let _ = style.set_property("opacity", &state.opacity(self.disabled_opacity));
            let _ = style.set_property("pointer-events", state.pointer_events());
        }
    }

    pub(crate) fn set_cursor(&self, cursor: &str) {
        let _ = self.track.style().set_property("cursor", cursor);
    }
}

fn smooth_options(left: f64) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    options
}
