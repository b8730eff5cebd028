//! Error types shared across the workspace.
//!
//! Each boundary gets its own typed error. None of them is fatal: the
//! application layer logs them and falls back to the system color scheme.

/// A string that is neither `"light"` nor `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {value:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    /// The rejected input.
    pub value: String,
}

/// Failures of the persistent preference store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store does not exist in this environment (disabled storage,
    /// sandboxed iframe, no window).
    #[error("preference store is unavailable")]
    Unavailable,

    /// The store exists but the operation was refused.
    #[error("preference store {operation} failed: {reason}")]
    Access {
        /// Which operation failed (`read`, `write`, `remove`).
        operation: &'static str,
        /// Message reported by the environment.
        reason: String,
    },

    /// The stored value is not a theme.
    #[error("stored preference is not a theme")]
    Corrupt(#[from] ParseThemeError),
}

/// Failures while building or inserting the toggle control.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// An element could not be created or configured.
    #[error("failed to build toggle control: {0}")]
    Build(String),

    /// The control could not be attached to its container.
    #[error("failed to insert toggle control: {0}")]
    Insert(String),
}
