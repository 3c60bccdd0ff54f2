//! landing-carousel - horizontal card carousel for landing pages
//!
//! Drives the bundle carousel on a landing page from WebAssembly:
//! - Previous/next buttons, arrow keys and touch swipes step one card
//! - Desktop click-and-drag scrolls the track directly
//! - Navigation buttons dim at either end of the track
//! - Every `[data-carousel]` root is discovered and mounted on page load
//!
//! The state machine in [`carousel`] is plain Rust and runs natively; the DOM
//! binding is only compiled for `wasm32`.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { mountAll, carouselFor } from 'landing-carousel';
//! await init(); // mounts every [data-carousel] root
//! mountAll({ scrollStep: 360 }); // optional: re-scan with other settings
//! carouselFor(document.querySelector('[data-carousel]')).scrollToCard(2);
//! ```

pub mod busy;
pub mod carousel;
pub mod config;
pub mod error;
pub mod gesture;
pub mod logging;
pub mod navigation;
pub mod registry;

// DOM binding (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub mod boot;
#[cfg(target_arch = "wasm32")]
pub mod widget;

use wasm_bindgen::prelude::*;

pub use carousel::{Carousel, GestureResponse, ScrollCommand};
pub use config::{CarouselConfig, Selectors};
pub use error::{CarouselError, Result};
pub use navigation::{ButtonState, NavState, TrackMetrics};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
