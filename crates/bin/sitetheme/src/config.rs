//! Configuration loading — inline TOML embedded in the page.
//!
//! Looks for `<script type="application/toml" id="sitetheme-config">` in the
//! document. Every field has a sensible default so the element is optional.

use serde::Deserialize;
use sitetheme_adapter_web_sys::document::DEFAULT_ATTRIBUTE;
use sitetheme_adapter_web_sys::storage::DEFAULT_KEY;
use sitetheme_adapter_web_sys::toggle_button::DEFAULT_FOCUS_RELEASE_MS;
use sitetheme_adapter_web_sys::ToggleSelectors;
use tracing_subscriber::EnvFilter;

/// Id of the element holding the inline configuration.
pub const CONFIG_ELEMENT_ID: &str = "sitetheme-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preference store settings.
    pub storage: StorageConfig,
    /// Document attribute settings.
    pub document: DocumentConfig,
    /// Toggle button placement.
    pub toggle: ToggleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// `localStorage` configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key holding the preference.
    pub key: String,
}

/// Root element configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Attribute carrying the active theme.
    pub attribute: String,
}

/// Toggle button configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Selectors and classes.
    #[serde(flatten)]
    pub selectors: ToggleSelectors,
    /// Delay before the button releases keyboard focus after a click.
    pub focus_release_ms: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the inline config element, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the element exists but holds malformed or
    /// invalid TOML.
    pub fn from_document(document: &web_sys::Document) -> Result<Self, ConfigError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        {
            Some(content) => Self::from_toml(&content),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or fails validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "storage key must not be empty".to_string(),
            ));
        }
        if !self.document.attribute.starts_with("data-")
            || self.document.attribute.len() == "data-".len()
        {
            return Err(ConfigError::Validation(format!(
                "document attribute {:?} must be a data-* attribute",
                self.document.attribute
            )));
        }
        let selectors = &self.toggle.selectors;
        for (name, value) in [
            ("container", &selectors.container),
            ("nav_list", &selectors.nav_list),
            ("item_class", &selectors.item_class),
            ("button_class", &selectors.button_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "toggle {name} must not be empty"
                )));
            }
        }
        if let Err(err) = EnvFilter::try_new(&self.logging.filter) {
            return Err(ConfigError::Validation(format!(
                "invalid logging filter: {err}"
            )));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            attribute: DEFAULT_ATTRIBUTE.to_string(),
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            selectors: ToggleSelectors::default(),
            focus_release_ms: DEFAULT_FOCUS_RELEASE_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse inline config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
