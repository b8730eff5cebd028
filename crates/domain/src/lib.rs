//! # sitetheme-domain
//!
//! Pure domain model for the sitetheme light/dark switcher.
//!
//! ## Responsibilities
//! - Define the [`Theme`](theme::Theme) value and its text form
//! - Define what the toggle control shows for a given theme
//!   ([`ToggleDisplay`](toggle::ToggleDisplay))
//! - Define the typed errors shared by the other layers
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
pub mod toggle;
