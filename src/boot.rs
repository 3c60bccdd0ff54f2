//! Page-level bootstrapping: auto-discovery, the instance registry and the
//! window resize broadcast.
//!
//! Every mounted carousel lives in a single registry keyed by its root
//! element, so a root is never bound twice and resize can reach every
//! instance. Widgets whose root has left the document are destroyed on the
//! next resize or refresh.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::logging;
use crate::registry::Registry;
use crate::widget::events::Listener;
use crate::widget::{CarouselHandle, CarouselWidget};

thread_local! {
    static REGISTRY: RefCell<Registry<Element, Rc<CarouselWidget>>> =
        RefCell::new(Registry::new());
    static PAGE_CONFIG: RefCell<CarouselConfig> = RefCell::new(CarouselConfig::default());
    static RESIZE_LISTENER: RefCell<Option<Listener>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(logging::DEFAULT_LEVEL);
    install_resize_listener();

    let Some(document) = document() else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(mount_discovered);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        mount_discovered();
    }
}

/// Mount every root on the page with the page configuration, logging failures.
fn mount_discovered() {
    let config = PAGE_CONFIG.with(|config| config.borrow().clone());
    match mount_matching(&config) {
        Ok(mounted) => tracing::debug!(mounted, "carousel discovery finished"),
        Err(err) => tracing::warn!(error = %err, "carousel discovery failed"),
    }
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Mount every element matching the root selector. Returns how many were new.
fn mount_matching(config: &CarouselConfig) -> Result<u32> {
    let document = document().ok_or_else(|| CarouselError::Dom("no document".to_string()))?;
    let roots = document
        .query_selector_all(&config.selectors.root)
        .map_err(|_| CarouselError::Selector(config.selectors.root.clone()))?;
    let mut mounted = 0;
    for index in 0..roots.length() {
        let Some(root) = roots.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        match register(root, config) {
            Ok((_, true)) => mounted += 1,
            Ok((_, false)) => {}
            Err(err) => tracing::warn!(error = %err, "skipping carousel root"),
        }
    }
    Ok(mounted)
}

/// Return the widget for `root`, mounting it on first sight.
fn register(root: Element, config: &CarouselConfig) -> Result<(Rc<CarouselWidget>, bool)> {
    // Mounting only touches the root's subtree, never the registry.
    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .get_or_try_insert_with(root, |root| CarouselWidget::mount(root, config).map(Rc::new))
    })
}

pub(crate) fn unregister(root: &Element) {
    REGISTRY.with(|registry| registry.borrow_mut().remove(root));
}

fn install_resize_listener() {
    let Some(window) = web_sys::window() else {
        return;
    };
    RESIZE_LISTENER.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(Listener::attach(&window, "resize", None, |_: Event| refresh()));
        }
    });
}

/// Drop widgets whose root left the page, then recompute navigation for the rest.
fn refresh() {
    let (stale, live) = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let stale = registry.drain_unless(|_, widget| widget.is_connected());
        let live: Vec<_> = registry.values().map(Rc::clone).collect();
        (stale, live)
    });
    for widget in &stale {
        widget.destroy();
    }
    if !stale.is_empty() {
        tracing::debug!(count = stale.len(), "detached carousels removed");
    }
    for widget in &live {
        widget.update_navigation();
    }
}

fn options_config(options: JsValue) -> Result<Option<CarouselConfig>> {
    if options.is_undefined() || options.is_null() {
        return Ok(None);
    }
    let config: CarouselConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|err| CarouselError::Config(err.to_string()))?;
    config.validate()?;
    Ok(Some(config))
}

/// Mount every carousel root on the page.
///
/// `options` (optional) replaces the page configuration used for this and
/// later discovery. Roots that are already mounted are left alone; roots that
/// cannot be mounted are logged and skipped. Returns the number of new
/// carousels.
///
/// # Errors
/// Returns an error if `options` is invalid or the root selector is rejected.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all(options: JsValue) -> std::result::Result<u32, JsValue> {
    if let Some(config) = options_config(options)? {
        PAGE_CONFIG.with(|page| *page.borrow_mut() = config);
    }
    let config = PAGE_CONFIG.with(|config| config.borrow().clone());
    Ok(mount_matching(&config)?)
}

/// Mount a single root, or return the existing carousel for it.
///
/// # Errors
/// Returns an error if `options` is invalid or the root has no track.
#[wasm_bindgen]
pub fn mount(root: Element, options: JsValue) -> std::result::Result<CarouselHandle, JsValue> {
    let config = match options_config(options)? {
        Some(config) => config,
        None => PAGE_CONFIG.with(|config| config.borrow().clone()),
    };
    let (widget, _) = register(root, &config)?;
    Ok(CarouselHandle::new(widget))
}

/// The carousel mounted on `root`, if any.
#[wasm_bindgen(js_name = carouselFor)]
pub fn carousel_for(root: &Element) -> Option<CarouselHandle> {
    REGISTRY
        .with(|registry| registry.borrow().get(root).map(Rc::clone))
        .map(CarouselHandle::new)
}

/// Recompute navigation for every carousel, as on window resize.
#[wasm_bindgen(js_name = refreshAll)]
pub fn refresh_all() {
    refresh();
}

/// Unbind and forget every carousel.
#[wasm_bindgen(js_name = destroyAll)]
pub fn destroy_all() {
    let widgets = REGISTRY.with(|registry| registry.borrow_mut().drain());
    for widget in &widgets {
        widget.destroy();
    }
}

/// Number of mounted carousels.
#[wasm_bindgen(js_name = carouselCount)]
pub fn carousel_count() -> usize {
    REGISTRY.with(|registry| registry.borrow().len())
}

/// Change the console log level (`"off"`, `"error"`, `"warn"`, `"info"`,
/// `"debug"`, `"trace"`).
///
/// # Errors
/// Returns an error for an unknown level name.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> std::result::Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level: {level}")))?;
    logging::init(filter);
    Ok(())
}
