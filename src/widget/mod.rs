//! DOM binding for one carousel root, plus the `Carousel` class exported to
//! JavaScript.
//!
//! `CarouselWidget` owns the listener closures and shares the core
//! [`Carousel`] state with them through `Rc<RefCell<_>>`. The closures hold
//! the state but never the widget, so dropping the widget after
//! [`CarouselWidget::destroy`] frees everything.

mod dom;
pub(crate) mod events;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::carousel::{Carousel, ScrollCommand};
use crate::config::{CarouselConfig, CONFIG_ATTRIBUTE};
use crate::error::Result;
use dom::TrackDom;
use events::Listener;

/// Clock for busy-guard deadlines, in milliseconds.
///
/// Monotonic `performance.now()` where available, wall clock otherwise. Every
/// deadline of a page is compared against the same source.
pub(crate) fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or_else(js_sys::Date::now, |performance| performance.now())
}

/// One mounted carousel.
pub(crate) struct CarouselWidget {
    root: Element,
    dom: TrackDom,
    state: Rc<RefCell<Carousel>>,
    listeners: RefCell<Vec<Listener>>,
}

impl CarouselWidget {
    /// Bind a carousel to `root` and paint its initial navigation state.
    ///
    /// A per-root `data-carousel-config` attribute overrides `config`.
    pub(crate) fn mount(root: &Element, config: &CarouselConfig) -> Result<Self> {
        let config = config.for_root(root.get_attribute(CONFIG_ATTRIBUTE).as_deref());
        let (dom, card_count) = TrackDom::locate(root, &config)?;
        let state = Rc::new(RefCell::new(Carousel::new(card_count, config)));
        let listeners = events::bind(root, &dom, &state);
        let widget = Self {
            root: root.clone(),
            dom,
            state,
            listeners: RefCell::new(listeners),
        };
        widget.update_navigation();
        tracing::debug!(card_count, "carousel mounted");
        Ok(widget)
    }

    pub(crate) fn root(&self) -> &Element {
        &self.root
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.root.is_connected()
    }

    pub(crate) fn update_navigation(&self) {
        let metrics = self.dom.metrics();
        let nav = self.state.borrow().update_navigation(metrics);
        self.dom.paint(nav);
    }

    pub(crate) fn scroll_prev(&self) -> bool {
        let command = self.state.borrow_mut().scroll_prev(now_ms());
        self.apply(command)
    }

    pub(crate) fn scroll_next(&self) -> bool {
        let command = self.state.borrow_mut().scroll_next(now_ms());
        self.apply(command)
    }

    pub(crate) fn scroll_to_card(&self, index: usize) -> bool {
        let command = self.state.borrow_mut().scroll_to_card(index, now_ms());
        self.apply(command)
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.state.borrow().is_busy(now_ms())
    }

    pub(crate) fn card_count(&self) -> usize {
        self.state.borrow().card_count()
    }

    /// Remove every listener this widget added. Safe to call twice.
    pub(crate) fn destroy(&self) {
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in &listeners {
            listener.detach();
        }
        if !listeners.is_empty() {
            tracing::debug!(count = listeners.len(), "carousel listeners removed");
        }
    }

    fn apply(&self, command: Option<ScrollCommand>) -> bool {
        match command {
            Some(command) => {
                self.dom.apply(command);
                true
            }
            None => false,
        }
    }
}

/// Handle to a mounted carousel, exported to JavaScript as `Carousel`.
#[wasm_bindgen(js_name = Carousel)]
pub struct CarouselHandle {
    widget: Rc<CarouselWidget>,
}

impl CarouselHandle {
    pub(crate) fn new(widget: Rc<CarouselWidget>) -> Self {
        Self { widget }
    }
}

#[wasm_bindgen(js_class = Carousel)]
impl CarouselHandle {
    /// Scroll back one step. Returns `false` while a previous scroll is running.
    #[wasm_bindgen(js_name = scrollPrev)]
    pub fn scroll_prev(&self) -> bool {
        self.widget.scroll_prev()
    }

    /// Scroll forward one step. Returns `false` while a previous scroll is running.
    #[wasm_bindgen(js_name = scrollNext)]
    pub fn scroll_next(&self) -> bool {
        self.widget.scroll_next()
    }

    /// Scroll to card `index`. Returns `false` when out of range or busy.
    #[wasm_bindgen(js_name = scrollToCard)]
    pub fn scroll_to_card(&self, index: usize) -> bool {
        self.widget.scroll_to_card(index)
    }

    #[wasm_bindgen(js_name = updateNavigation)]
    pub fn update_navigation(&self) {
        self.widget.update_navigation();
    }

    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.widget.is_busy()
    }

    #[wasm_bindgen(js_name = cardCount)]
    pub fn card_count(&self) -> usize {
        self.widget.card_count()
    }

    /// Unbind the carousel and forget it.
    pub fn destroy(&self) {
        crate::boot::unregister(self.widget.root());
        self.widget.destroy();
    }
}
