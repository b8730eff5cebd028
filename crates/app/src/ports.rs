//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the theme use-cases and the browser.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod store;
pub mod system;
pub mod target;
pub mod toggle;

pub use store::ThemeStore;
pub use system::{SchemeListener, Subscription, SystemScheme};
pub use target::ThemeTarget;
pub use toggle::{ActivationHandler, ToggleControl, ToggleMount};
