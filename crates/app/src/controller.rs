//! Theme controller — resolves, applies, toggles and persists the site theme.
//!
//! The controller is the single writer of the document theme attribute and
//! of the stored preference. Callbacks registered with the browser only hold
//! a weak reference to it, so dropping the last [`Rc`] tears everything down.

use std::cell::RefCell;
use std::rc::Rc;

use sitetheme_domain::theme::Theme;
use sitetheme_domain::toggle::{ACCESSIBLE_LABEL, ToggleDisplay};

use crate::ports::{
    ActivationHandler, Subscription, SystemScheme, ThemeStore, ThemeTarget, ToggleControl,
    ToggleMount,
};

/// Use-case keeping the document attribute, the stored preference and the
/// toggle control consistent.
pub struct ThemeController<S, T, Q, M: ToggleMount> {
    store: S,
    target: T,
    system: Q,
    mount: M,
    control: RefCell<Option<M::Control>>,
}

impl<S, T, Q, M> ThemeController<S, T, Q, M>
where
    S: ThemeStore,
    T: ThemeTarget,
    Q: SystemScheme,
    M: ToggleMount,
{
    /// Create a controller over the given ports. Nothing is applied until
    /// [`initialize`](Self::initialize) or [`start`](Self::start) runs.
    #[must_use]
    pub fn new(store: S, target: T, system: Q, mount: M) -> Self {
        Self {
            store,
            target,
            system,
            mount,
            control: RefCell::new(None),
        }
    }

    /// The user's explicit choice. Store failures count as "no choice".
    #[must_use]
    pub fn stored_preference(&self) -> Option<Theme> {
        match self.store.load() {
            Ok(preference) => preference,
            Err(err) => {
                tracing::warn!(%err, "ignoring stored theme preference");
                None
            }
        }
    }

    /// The stored preference if any, the system preference otherwise.
    #[must_use]
    pub fn resolve(&self) -> Theme {
        self.stored_preference()
            .unwrap_or_else(|| self.system.preferred())
    }

    /// The theme currently applied to the document.
    #[must_use]
    pub fn current_theme(&self) -> Theme {
        self.target.current().unwrap_or_else(|| self.resolve())
    }

    /// Whether a toggle control was inserted into the page.
    #[must_use]
    pub fn has_toggle(&self) -> bool {
        self.control.borrow().is_some()
    }

    /// Apply the resolved theme to the document. Never writes the store.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&self) -> Theme {
        let theme = self.resolve();
        self.target.apply(theme);
        tracing::debug!(%theme, "applied initial theme");
        theme
    }

    /// Switch to the opposite theme and remember it as the user's choice.
    ///
    /// A failed store write is logged; the document and the control are
    /// updated regardless.
    #[tracing::instrument(skip(self))]
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current_theme().opposite();
        self.target.apply(next);
        if let Err(err) = self.store.save(next) {
            tracing::warn!(%err, theme = %next, "failed to persist theme preference");
        }
        self.update_toggle_icon(next);
        tracing::debug!(theme = %next, "toggled theme");
        next
    }

    /// Show `theme` on the toggle control, if one is in the document.
    pub fn update_toggle_icon(&self, theme: Theme) {
        let control = self.control.borrow();
        if let Some(control) = control.as_ref().filter(|control| control.is_attached()) {
            control.render(ToggleDisplay::for_theme(theme));
        }
    }

    /// Forget the user's choice and follow the system preference again.
    #[tracing::instrument(skip(self))]
    pub fn clear_preference(&self) -> Theme {
        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "failed to clear theme preference");
        }
        let theme = self.resolve();
        self.target.apply(theme);
        self.update_toggle_icon(theme);
        theme
    }

    /// React to a change of the system color scheme.
    ///
    /// Ignored while the user has an explicit choice stored.
    #[tracing::instrument(skip(self))]
    pub fn handle_system_change(&self, theme: Theme) {
        if let Some(preference) = self.stored_preference() {
            tracing::debug!(%preference, "stored preference wins over system change");
            return;
        }
        self.target.apply(theme);
        self.update_toggle_icon(theme);
    }
}

impl<S, T, Q, M> ThemeController<S, T, Q, M>
where
    S: ThemeStore + 'static,
    T: ThemeTarget + 'static,
    Q: SystemScheme + 'static,
    M: ToggleMount + 'static,
{
    /// Run the whole page-load sequence: apply the initial theme, watch the
    /// system scheme and insert the toggle control.
    pub fn start(self: &Rc<Self>) -> Subscription {
        self.initialize();
        let subscription = self.watch_system_scheme();
        self.create_toggle_button();
        subscription
    }

    /// Follow system scheme changes until the returned handle is cancelled.
    pub fn watch_system_scheme(self: &Rc<Self>) -> Subscription {
        let controller = Rc::downgrade(self);
        self.system.subscribe(Box::new(move |theme| {
            if let Some(controller) = controller.upgrade() {
                controller.handle_system_change(theme);
            }
        }))
    }

    /// Build and insert the toggle control.
    ///
    /// Returns whether a control is now present. At most one control is
    /// created; a page without an insertion point is silently skipped.
    pub fn create_toggle_button(self: &Rc<Self>) -> bool {
        if self.has_toggle() {
            return true;
        }

        let controller = Rc::downgrade(self);
        let on_activate: ActivationHandler = Rc::new(move || {
            if let Some(controller) = controller.upgrade() {
                controller.toggle_theme();
            }
        });

        match self.mount.mount(ACCESSIBLE_LABEL, on_activate) {
            Ok(Some(control)) => {
                control.render(ToggleDisplay::for_theme(self.current_theme()));
                *self.control.borrow_mut() = Some(control);
                true
            }
            Ok(None) => {
                tracing::debug!("no insertion point for the theme toggle");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "theme toggle not inserted");
                false
            }
        }
    }
}
