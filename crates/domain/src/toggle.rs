//! What the toggle control shows for the active theme.
//!
//! The control always advertises the action a click performs: in dark mode it
//! offers to switch to light and the other way round.

use crate::theme::Theme;

/// Accessible label of the toggle control ("switch theme").
pub const ACCESSIBLE_LABEL: &str = "테마 전환";

/// Icon shown while the dark theme is active.
pub const SUN_ICON: &str = "☀️";

/// Icon shown while the light theme is active.
pub const MOON_ICON: &str = "🌙";

/// Icon and title of the toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleDisplay {
    /// Visible content of the control.
    pub icon: &'static str,
    /// Title describing the action a click performs.
    pub title: &'static str,
}

impl ToggleDisplay {
    /// Display for a control while `theme` is active.
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                icon: SUN_ICON,
                title: "라이트 모드로 전환",
            },
            Theme::Light => Self {
                icon: MOON_ICON,
                title: "다크 모드로 전환",
            },
        }
    }
}

impl From<Theme> for ToggleDisplay {
    fn from(theme: Theme) -> Self {
        Self::for_theme(theme)
    }
}
