//! Talangin Theme
//!
//! Dark/light color scheme for the page, stored as `data-theme` on the root
//! element and persisted in the preference store.
//!
//! The initial scheme is the stored preference, else the system's
//! `prefers-color-scheme`. System changes are followed only while the user
//! has not picked a scheme.

mod controller;
mod scheme;

pub use controller::{ThemeConfig, ThemeController};
pub use scheme::{ColorScheme, ParseColorSchemeError};
