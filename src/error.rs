//! Structured error types for landing-carousel.
//!
//! The host page never sees these during auto-discovery; they are logged and
//! the affected root is skipped. The explicit JS API converts them to thrown
//! strings.

/// All errors that can occur while configuring or mounting a carousel.
#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    /// A required structural element was not found under the root.
    #[error("Missing element: {0}")]
    MissingElement(&'static str),

    /// The browser rejected a CSS selector.
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration JSON could not be decoded.
    #[error("Configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A DOM call failed or no document is available.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CarouselError>;

#[cfg(target_arch = "wasm32")]
impl From<CarouselError> for wasm_bindgen::JsValue {
    fn from(e: CarouselError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
