//! Document root attribute target.

use sitetheme_app::ports::ThemeTarget;
use sitetheme_domain::theme::Theme;
use web_sys::{Document, Element};

use crate::error::{DomError, js_reason};

/// Attribute stylesheets key off unless configured otherwise.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Writes the active theme to an attribute of `<html>`.
#[derive(Debug, Clone)]
pub struct DocumentThemeTarget {
    root: Element,
    attribute: String,
}

impl DocumentThemeTarget {
    /// Target the root element of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NoRootElement`] for an empty document.
    pub fn new(document: &Document, attribute: impl Into<String>) -> Result<Self, DomError> {
        let root = document
            .document_element()
            .ok_or(DomError::NoRootElement)?;
        Ok(Self {
            root,
            attribute: attribute.into(),
        })
    }
}

impl ThemeTarget for DocumentThemeTarget {
    fn apply(&self, theme: Theme) {
        if let Err(err) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            tracing::warn!(
                reason = %js_reason(&err),
                attribute = %self.attribute,
                "failed to set theme attribute"
            );
        }
    }

    fn current(&self) -> Option<Theme> {
        self.root.get_attribute(&self.attribute)?.parse().ok()
    }
}
