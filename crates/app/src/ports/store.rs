//! Preference store port — persistence of the explicit theme choice.

use std::rc::Rc;

use sitetheme_domain::error::StoreError;
use sitetheme_domain::theme::Theme;

/// Origin-scoped key-value store holding the user's explicit choice.
pub trait ThemeStore {
    /// Read the stored preference, `None` when the user never chose one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store is unavailable, refuses the
    /// read, or holds something that is not a theme.
    fn load(&self) -> Result<Option<Theme>, StoreError>;

    /// Persist `theme` as the user's choice.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store is unavailable or refuses the
    /// write.
    fn save(&self, theme: Theme) -> Result<(), StoreError>;

    /// Forget the stored choice.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the store is unavailable or refuses the
    /// removal.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Rc<T> {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        (**self).load()
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        (**self).save(theme)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}
