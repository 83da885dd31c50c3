//! Error type for the portal behaviors.
//!
//! Core logic is infallible; errors arise from the browser environment and
//! from the optional configuration block.

/// Failures surfaced while wiring behaviors to the page.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// No `window` or `document` is available.
    #[error("browser environment unavailable: no {0}")]
    NoEnvironment(&'static str),

    /// An element exists but is not of the type the behavior needs.
    #[error("element #{id} is not a {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    /// A call into JavaScript threw.
    #[error("javascript error: {0}")]
    Js(String),

    /// The configuration block could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PortalError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
