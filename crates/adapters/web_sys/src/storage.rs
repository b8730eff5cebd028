//! `localStorage` preference store.

use sitetheme_app::ports::ThemeStore;
use sitetheme_domain::error::StoreError;
use sitetheme_domain::theme::Theme;
use web_sys::Storage;

use crate::error::js_reason;

/// Key the preference is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "theme";

/// Stores the preference as `"light"` / `"dark"` under a single key.
///
/// The storage object is looked up on every call: browsers may disable it
/// at any time, and a failed lookup must never stop the page from theming.
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    key: String,
}

impl LocalStorageThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::Unavailable),
            Err(err) => Err(StoreError::Access {
                operation: "open",
                reason: js_reason(&err),
            }),
        }
    }
}

impl Default for LocalStorageThemeStore {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|err| StoreError::Access {
                operation: "read",
                reason: js_reason(&err),
            })?;
        parse_stored(raw)
    }

    fn save(&self, theme: Theme) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(&self.key, theme.as_str())
            .map_err(|err| StoreError::Access {
                operation: "write",
                reason: js_reason(&err),
            })
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|err| StoreError::Access {
                operation: "remove",
                reason: js_reason(&err),
            })
    }
}

/// Interpret the raw stored string.
fn parse_stored(raw: Option<String>) -> Result<Option<Theme>, StoreError> {
    match raw {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}
