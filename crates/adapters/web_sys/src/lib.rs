//! # sitetheme-adapter-web-sys
//!
//! Browser implementations of the `sitetheme-app` ports, built on `web-sys`.
//!
//! | Port | Adapter | Browser API |
//! |------|---------|-------------|
//! | `ThemeStore` | [`LocalStorageThemeStore`] | `window.localStorage` |
//! | `ThemeTarget` | [`DocumentThemeTarget`] | attribute on `<html>` |
//! | `SystemScheme` | [`MediaQuerySystemScheme`] | `(prefers-color-scheme: dark)` |
//! | `ToggleMount` | [`DomToggleMount`] | masthead navigation list |
//!
//! ## Dependency rule
//!
//! Depends on `sitetheme-app` (port traits) and `sitetheme-domain` only.

pub mod document;
pub mod error;
pub mod media_query;
pub mod storage;
pub mod toggle_button;

pub use document::DocumentThemeTarget;
pub use error::DomError;
pub use media_query::MediaQuerySystemScheme;
pub use storage::LocalStorageThemeStore;
pub use toggle_button::{DomToggleButton, DomToggleMount, ToggleSelectors};

/// The global window and its document.
///
/// # Errors
///
/// Returns [`DomError`] outside of a browser main thread.
pub fn browser() -> Result<(web_sys::Window, web_sys::Document), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    Ok((window, document))
}
