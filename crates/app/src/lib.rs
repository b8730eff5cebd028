//! # sitetheme-app
//!
//! Application layer — the theme use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ThemeStore` — read, write and clear the persisted preference
//!   - `ThemeTarget` — apply and read the document theme attribute
//!   - `SystemScheme` — query and watch the system color scheme
//!   - `ToggleMount` / `ToggleControl` — insert and refresh the toggle button
//! - Provide the `ThemeController` use-case that keeps all of them consistent
//!
//! ## Dependency rule
//! Depends on `sitetheme-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod controller;
pub mod ports;

#[cfg(test)]
mod fakes;
