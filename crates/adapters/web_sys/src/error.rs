//! Browser adapter error types.

use wasm_bindgen::JsValue;

/// The page is missing something every adapter needs.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// Not running on a browser main thread.
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no root element.
    #[error("document has no root element")]
    NoRootElement,
}

/// Human readable form of a value thrown by a browser API.
pub(crate) fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
