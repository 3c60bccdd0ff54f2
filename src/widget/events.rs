//! Event listeners for one carousel.
//!
//! Every handler borrows the shared `Carousel` only long enough to compute a
//! response, then releases it before touching the DOM. Scrolling the track can
//! dispatch further events whose handlers need the same state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent,
};

use super::dom::TrackDom;
use super::now_ms;
use crate::carousel::{Carousel, GestureResponse, ScrollCommand};
use crate::gesture::Point;

/// A listener added by the carousel, kept so it can be removed again.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Add `handler` for `kind` events on `target`.
    ///
    /// `passive` is forwarded to the listener options when set. Events that
    /// are not of type `E` are ignored.
    pub(crate) fn attach<E>(
        target: &EventTarget,
        kind: &'static str,
        passive: Option<bool>,
        mut handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        }) as Box<dyn FnMut(Event)>);
        let callback = closure.as_ref().unchecked_ref();
        let added = match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind, callback, &options,
                )
            }
            None => target.add_event_listener_with_callback(kind, callback),
        };
        if added.is_err() {
            tracing::warn!(kind, "failed to add event listener");
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    pub(crate) fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Wire every carousel listener and return them for later removal.
pub(crate) fn bind(
    root: &Element,
    dom: &TrackDom,
    state: &Rc<RefCell<Carousel>>,
) -> Vec<Listener> {
    let mut listeners = Vec::new();
    let track: &EventTarget = &dom.track;

    // Navigation buttons
    if let Some(prev) = dom.prev() {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(prev, "click", None, move |_: Event| {
            let command = state.borrow_mut().scroll_prev(now_ms());
            apply(&dom, command);
        }));
    }
    if let Some(next) = dom.next() {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(next, "click", None, move |_: Event| {
            let command = state.borrow_mut().scroll_next(now_ms());
            apply(&dom, command);
        }));
    }

    // Arrow keys while focus is inside the widget
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(root, "keydown", None, move |event: KeyboardEvent| {
            let command = state.borrow_mut().key_down(&event.key(), now_ms());
            apply(&dom, command);
        }));
    }

    // Scroll position drives the controls; `scrollend` frees the busy guard
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, "scroll", None, move |_: Event| {
            let metrics = dom.metrics();
            let nav = state.borrow().update_navigation(metrics);
            dom.paint(nav);
        }));
    }
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(track, "scrollend", None, move |_: Event| {
            state.borrow_mut().scroll_settled();
        }));
    }

    // Touch swipe
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(track, "touchstart", Some(true), move |event: TouchEvent| {
            if let Some(at) = first_touch(&event) {
                state.borrow_mut().touch_start(at);
            }
        }));
    }
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, "touchmove", Some(false), move |event: TouchEvent| {
            let Some(at) = first_touch(&event) else {
                return;
            };
            let response = state.borrow_mut().touch_move(at);
            respond(&dom, &event, response);
        }));
    }
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, "touchend", Some(true), move |event: TouchEvent| {
            let response = state.borrow_mut().touch_end(now_ms());
            respond(&dom, &event, response);
        }));
    }
    {
        let state = Rc::clone(state);
        listeners.push(Listener::attach(track, "touchcancel", Some(true), move |_: Event| {
            state.borrow_mut().touch_cancel();
        }));
    }

    // Desktop drag
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, "mousedown", None, move |event: MouseEvent| {
            let at = track_point(&dom, &event);
            let scroll_left = dom.scroll_left();
            let response = state.borrow_mut().pointer_down(at, scroll_left);
            respond(&dom, &event, response);
        }));
    }
    {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, "mousemove", None, move |event: MouseEvent| {
            let at = track_point(&dom, &event);
            let response = state.borrow_mut().pointer_move(at);
            respond(&dom, &event, response);
        }));
    }
    for kind in ["mouseup", "mouseleave"] {
        let (dom, state) = (dom.clone(), Rc::clone(state));
        listeners.push(Listener::attach(track, kind, None, move |event: MouseEvent| {
            let response = state.borrow_mut().pointer_up();
            respond(&dom, &event, response);
        }));
    }

    listeners
}

fn apply(dom: &TrackDom, command: Option<ScrollCommand>) {
    if let Some(command) = command {
        dom.apply(command);
    }
}

fn respond(dom: &TrackDom, event: &Event, response: GestureResponse) {
    if response.suppress_default {
        event.prevent_default();
    }
    if let Some(cursor) = response.cursor {
        dom.set_cursor(cursor);
    }
    apply(dom, response.command);
}

fn first_touch(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

// Horizontal position relative to the track's layout offset.
fn track_point(dom: &TrackDom, event: &MouseEvent) -> Point {
    Point::new(
        f64::from(event.page_x()) - f64::from(dom.track.offset_left()),
        f64::from(event.page_y()),
    )
}
