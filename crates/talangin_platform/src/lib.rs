//! Talangin Platform Abstraction Layer
//!
//! This crate provides platform-agnostic traits and types for the page
//! runtime: element queries and mutation, viewport and scroll access,
//! persisted preferences, and page events.
//!
//! # Architecture
//!
//! - [`Document`] - Element tree access
//! - [`Window`] - Scroll position, viewport, history, media queries
//! - [`PreferenceStore`] - Persisted string preferences
//! - [`Host`] - All of the above
//!
//! # Host Implementations
//!
//! - [`HeadlessPage`] - In-memory page (tests, tooling)
//! - `talangin_platform_web` - Browsers via `web-sys`

mod document;
mod error;
mod event;
mod headless;
mod input;
mod media;
mod selector;
mod storage;

// Re-export all public types
pub use document::{Document, Host, PreferenceStore, Window};
pub use error::{PlatformError, Result};
pub use event::{EventResponse, PageEvent};
pub use headless::{element, ElementSpec, HeadlessPage};
pub use input::{Key, KeyboardEvent, Modifiers};
pub use media::{Capabilities, MediaQuery, ScrollBehavior};
pub use selector::{ElementView, Selector};
pub use storage::MemoryStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::document::{Document, Host, PreferenceStore, Window};
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{EventResponse, PageEvent};
    pub use crate::input::{Key, KeyboardEvent, Modifiers};
    pub use crate::media::{Capabilities, MediaQuery, ScrollBehavior};
    pub use crate::selector::Selector;
}
