//! `prefers-color-scheme` watcher.

use sitetheme_app::ports::{SchemeListener, Subscription, SystemScheme};
use sitetheme_domain::theme::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::error::js_reason;

/// Media query matching a dark system color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

const CHANGE_EVENT: &str = "change";

/// System scheme read from the dark color-scheme media query.
///
/// Browsers without media query support report light and never change.
#[derive(Debug, Clone)]
pub struct MediaQuerySystemScheme {
    query: Option<MediaQueryList>,
}

impl MediaQuerySystemScheme {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let query = match window.match_media(DARK_SCHEME_QUERY) {
            Ok(query) => query,
            Err(err) => {
                tracing::warn!(reason = %js_reason(&err), "color scheme media query rejected");
                None
            }
        };
        Self { query }
    }
}

impl SystemScheme for MediaQuerySystemScheme {
    fn preferred(&self) -> Theme {
        Theme::from_dark(self.query.as_ref().is_some_and(MediaQueryList::matches))
    }

    fn subscribe(&self, mut listener: SchemeListener) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::inactive();
        };

        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| listener(Theme::from_dark(event.matches())),
        );
        if let Err(err) =
            query.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref())
        {
            tracing::warn!(reason = %js_reason(&err), "cannot watch system color scheme");
            return Subscription::inactive();
        }

        Subscription::new(move || {
            let function = callback.as_ref().unchecked_ref();
            if let Err(err) = query.remove_event_listener_with_callback(CHANGE_EVENT, function) {
                tracing::warn!(
                    reason = %js_reason(&err),
                    "cannot stop watching system color scheme"
                );
            }
        })
    }
}
