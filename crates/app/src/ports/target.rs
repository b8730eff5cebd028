//! Document target port — where the active theme is rendered.

use std::rc::Rc;

use sitetheme_domain::theme::Theme;

/// The document root attribute that stylesheets key off.
pub trait ThemeTarget {
    /// Make `theme` the active theme.
    fn apply(&self, theme: Theme);

    /// The active theme, `None` when the attribute is missing or holds
    /// something else.
    fn current(&self) -> Option<Theme>;
}

impl<T: ThemeTarget + ?Sized> ThemeTarget for Rc<T> {
    fn apply(&self, theme: Theme) {
        (**self).apply(theme);
    }

    fn current(&self) -> Option<Theme> {
        (**self).current()
    }
}
