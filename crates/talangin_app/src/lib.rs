//! Talangin App
//!
//! The landing page runtime: theme, language, navigation and motion wired
//! to a [`Host`](talangin_platform::Host) page.
//!
//! # Example
//!
//! ```rust
//! use talangin_app::{SiteConfig, TalanginApp};
//! use talangin_core::Size;
//! use talangin_platform::{element, Document, HeadlessPage, PageEvent};
//!
//! let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
//! let body = page.body();
//! let nav = page.append(body, element("nav").class("nav"));
//!
//! let mut app = TalanginApp::start(page, SiteConfig::default()).unwrap();
//! app.host_mut().set_scroll_y(200.0);
//! app.handle_event(PageEvent::Scroll);
//! app.tick(16.0);
//! assert!(app.host().has_class(nav, "nav--scrolled"));
//! ```

mod app;
mod config;
mod context;
mod error;
pub mod menu;
pub mod nav;
pub mod scroll;
pub mod sections;

pub use app::{TalanginApp, VERSION};
pub use config::{NavigationConfig, SiteConfig};
pub use context::PageContext;
pub use error::{AppError, Result};
pub use menu::{FocusTrap, MobileMenu};
pub use nav::Navbar;
pub use scroll::SmoothScroll;
pub use sections::{LazyImages, SectionObserver};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::TalanginApp;
    pub use crate::config::SiteConfig;
    pub use crate::error::{AppError, Result};
    pub use talangin_content::Language;
    pub use talangin_platform::{EventResponse, Host, PageEvent};
    pub use talangin_theme::ColorScheme;
}
