//! Toggle ports — creation and refresh of the theme switch button.

use std::rc::Rc;

use sitetheme_domain::error::ToggleError;
use sitetheme_domain::toggle::ToggleDisplay;

/// Callback run when the user activates the control.
pub type ActivationHandler = Rc<dyn Fn()>;

/// A toggle control that was inserted into the page.
pub trait ToggleControl {
    /// Whether the control is still part of the document.
    fn is_attached(&self) -> bool;

    /// Show `display` as the control's content and title.
    fn render(&self, display: ToggleDisplay);
}

/// Builds the toggle control and inserts it into the page.
pub trait ToggleMount {
    /// Control type produced by this mount.
    type Control: ToggleControl;

    /// Build a control labelled `label` whose activation runs `on_activate`,
    /// and insert it.
    ///
    /// Returns `Ok(None)` when the page has no place for the control.
    ///
    /// # Errors
    ///
    /// Returns a [`ToggleError`] when the insertion point exists but the
    /// control could not be built or attached.
    fn mount(
        &self,
        label: &str,
        on_activate: ActivationHandler,
    ) -> Result<Option<Self::Control>, ToggleError>;
}

impl<T: ToggleMount + ?Sized> ToggleMount for Rc<T> {
    type Control = T::Control;

    fn mount(
        &self,
        label: &str,
        on_activate: ActivationHandler,
    ) -> Result<Option<Self::Control>, ToggleError> {
        (**self).mount(label, on_activate)
    }
}
