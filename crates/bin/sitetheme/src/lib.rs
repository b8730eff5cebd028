//! # sitetheme — light/dark switcher for static sites
//!
//! Composition root that wires the browser adapters into the theme
//! controller and exports the entry point to JavaScript.
//!
//! ## Responsibilities
//! - Read the inline configuration
//! - Install the console `tracing` subscriber
//! - Construct the adapters and the `ThemeController`
//! - Run the page-load sequence once and hand a [`ThemeHandle`] to the host
//!
//! ## Usage
//! ```js
//! import init, { initialize } from "./sitetheme.js";
//! await init();
//! const theme = initialize();
//! ```
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no theme logic belongs here.

pub mod config;
pub mod logging;

use std::cell::Cell;
use std::rc::Rc;

use sitetheme_adapter_web_sys::{
    DocumentThemeTarget, DomToggleMount, LocalStorageThemeStore, MediaQuerySystemScheme,
};
use sitetheme_app::controller::ThemeController;
use sitetheme_app::ports::Subscription;
use wasm_bindgen::prelude::*;

use crate::config::Config;

type BrowserController = ThemeController<
    LocalStorageThemeStore,
    DocumentThemeTarget,
    MediaQuerySystemScheme,
    DomToggleMount,
>;

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Apply the theme, watch the system scheme and insert the toggle button.
///
/// Call once per page, after the masthead is in the document. Keep the
/// returned handle for as long as the page should react to clicks and
/// system changes.
///
/// # Errors
///
/// Fails when called twice, outside of a browser main thread, or with an
/// invalid inline configuration.
#[wasm_bindgen]
pub fn initialize() -> Result<ThemeHandle, JsError> {
    if INITIALIZED.get() {
        return Err(JsError::new("sitetheme is already initialized on this page"));
    }

    let (window, document) = sitetheme_adapter_web_sys::browser()?;
    let config = Config::from_document(&document)?;
    logging::init(&config.logging.filter);

    let store = LocalStorageThemeStore::new(config.storage.key);
    let target = DocumentThemeTarget::new(&document, config.document.attribute)?;
    let system = MediaQuerySystemScheme::new(&window);
    let mount = DomToggleMount::new(
        document,
        config.toggle.selectors,
        config.toggle.focus_release_ms,
    );

    let controller = Rc::new(ThemeController::new(store, target, system, mount));
    let subscription = controller.start();
    INITIALIZED.set(true);
    tracing::info!(
        theme = %controller.current_theme(),
        toggle = controller.has_toggle(),
        "sitetheme initialized"
    );

    Ok(ThemeHandle {
        controller,
        subscription: Some(subscription),
    })
}

/// Host-side handle on the running controller.
///
/// Freeing the handle (or calling [`dispose`](Self::dispose)) stops
/// following the system scheme.
#[wasm_bindgen]
pub struct ThemeHandle {
    controller: Rc<BrowserController>,
    subscription: Option<Subscription>,
}

#[wasm_bindgen]
impl ThemeHandle {
    /// The active theme, `"light"` or `"dark"`.
    #[must_use]
    pub fn theme(&self) -> String {
        self.controller.current_theme().to_string()
    }

    /// Switch theme as if the toggle button was clicked.
    pub fn toggle(&self) -> String {
        self.controller.toggle_theme().to_string()
    }

    /// Forget the stored choice and follow the system scheme again.
    #[wasm_bindgen(js_name = clearPreference)]
    pub fn clear_preference(&self) -> String {
        self.controller.clear_preference().to_string()
    }

    /// Whether the toggle button was inserted into the page.
    #[wasm_bindgen(js_name = hasToggle)]
    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.controller.has_toggle()
    }

    /// Stop following system scheme changes.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            tracing::debug!("stopped following the system color scheme");
        }
    }
}
