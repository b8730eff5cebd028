//! Masthead toggle button.
//!
//! The button is appended as a new item of the masthead navigation list:
//!
//! ```html
//! <div class="masthead__inner-wrap">
//!   <nav>
//!     <ul class="visible-links">
//!       …
//!       <li class="masthead__menu-item">
//!         <button type="button" class="theme-toggle" aria-label="테마 전환" title="…">🌙</button>
//!       </li>
//!     </ul>
//!   </nav>
//! </div>
//! ```

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use sitetheme_app::ports::{ActivationHandler, ToggleControl, ToggleMount};
use sitetheme_domain::error::ToggleError;
use sitetheme_domain::toggle::ToggleDisplay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement};

use crate::error::js_reason;

const CLICK_EVENT: &str = "click";

/// Delay before the button gives up keyboard focus after a click.
pub const DEFAULT_FOCUS_RELEASE_MS: u32 = 100;

/// Where the button goes and which classes it carries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleSelectors {
    /// Selector of the masthead container.
    pub container: String,
    /// Selector of the navigation list, relative to the container.
    pub nav_list: String,
    /// Class of the list item wrapping the button.
    pub item_class: String,
    /// Class of the button itself.
    pub button_class: String,
}

impl Default for ToggleSelectors {
    fn default() -> Self {
        Self {
            container: ".masthead__inner-wrap".to_string(),
            nav_list: "nav ul.visible-links".to_string(),
            item_class: "masthead__menu-item".to_string(),
            button_class: "theme-toggle".to_string(),
        }
    }
}

/// Inserts the toggle button into the masthead navigation.
#[derive(Debug, Clone)]
pub struct DomToggleMount {
    document: Document,
    selectors: ToggleSelectors,
    focus_release_ms: u32,
}

impl DomToggleMount {
    #[must_use]
    pub fn new(document: Document, selectors: ToggleSelectors, focus_release_ms: u32) -> Self {
        Self {
            document,
            selectors,
            focus_release_ms,
        }
    }

    fn nav_list(&self) -> Option<Element> {
        let container = self
            .document
            .query_selector(&self.selectors.container)
            .ok()
            .flatten()?;
        container
            .query_selector(&self.selectors.nav_list)
            .ok()
            .flatten()
    }

    fn create(&self, tag: &'static str) -> Result<Element, ToggleError> {
        self.document
            .create_element(tag)
            .map_err(|err| ToggleError::Build(format!("<{tag}>: {}", js_reason(&err))))
    }

    fn build_button(&self, label: &str) -> Result<HtmlElement, ToggleError> {
        let button: HtmlElement = self
            .create("button")?
            .dyn_into()
            .map_err(|_| ToggleError::Build("<button> is not an HTML element".to_string()))?;
        button.set_class_name(&self.selectors.button_class);
        for (name, value) in [("type", "button"), ("aria-label", label)] {
            button
                .set_attribute(name, value)
                .map_err(|err| ToggleError::Build(format!("{name}: {}", js_reason(&err))))?;
        }
        Ok(button)
    }
}

impl ToggleMount for DomToggleMount {
    type Control = DomToggleButton;

    fn mount(
        &self,
        label: &str,
        on_activate: ActivationHandler,
    ) -> Result<Option<Self::Control>, ToggleError> {
        let Some(list) = self.nav_list() else {
            return Ok(None);
        };

        let item = self.create("li")?;
        item.set_class_name(&self.selectors.item_class);
        let button = self.build_button(label)?;

        let on_click = {
            let button = button.clone();
            let delay = self.focus_release_ms;
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                on_activate();
                let button = button.clone();
                Timeout::new(delay, move || {
                    let _ = button.blur();
                })
                .forget();
            })
        };
        button
            .add_event_listener_with_callback(CLICK_EVENT, on_click.as_ref().unchecked_ref())
            .map_err(insert_error)?;

        item.append_child(&button).map_err(insert_error)?;
        list.append_child(&item).map_err(insert_error)?;
        tracing::debug!(container = %self.selectors.container, "theme toggle inserted");

        Ok(Some(DomToggleButton { button, on_click }))
    }
}

fn insert_error(err: JsValue) -> ToggleError {
    ToggleError::Insert(js_reason(&err))
}

/// The inserted button. Dropping it takes the button and its list item off
/// the page.
pub struct DomToggleButton {
    button: HtmlElement,
    on_click: Closure<dyn FnMut(Event)>,
}

impl DomToggleButton {
    #[must_use]
    pub fn element(&self) -> &HtmlElement {
        &self.button
    }
}

impl Drop for DomToggleButton {
    fn drop(&mut self) {
        let callback = self.on_click.as_ref().unchecked_ref();
        let _ = self
            .button
            .remove_event_listener_with_callback(CLICK_EVENT, callback);
        if let Some(item) = self.button.parent_element() {
            item.remove();
        }
    }
}

impl ToggleControl for DomToggleButton {
    fn is_attached(&self) -> bool {
        self.button.is_connected()
    }

    fn render(&self, display: ToggleDisplay) {
        self.button.set_text_content(Some(display.icon));
        self.button.set_title(display.title);
    }
}
