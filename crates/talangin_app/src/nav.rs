//! Navbar scroll state

use talangin_core::NodeId;
use talangin_platform::{Document, Selector, Window};

pub const NAV_CLASS: &str = "nav";
pub const SCROLLED_CLASS: &str = "nav--scrolled";

/// Marks `.nav` as scrolled once the page leaves the top
#[derive(Debug)]
pub struct Navbar {
    nav: Option<NodeId>,
    threshold: f32,
    scrolled: bool,
}

impl Navbar {
    /// Find the navbar and set its initial state
    pub fn init<H: Document + Window + ?Sized>(host: &mut H, threshold: f32) -> Self {
        let mut navbar = Self {
            nav: host.query(&Selector::class(NAV_CLASS)),
            threshold,
            scrolled: false,
        };
        navbar.update(host);
        navbar
    }

    pub fn element(&self) -> Option<NodeId> {
        self.nav
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Sync the class with the current scroll position
    pub fn update<H: Document + Window + ?Sized>(&mut self, host: &mut H) {
        let Some(nav) = self.nav else {
            return;
        };
        self.scrolled = host.scroll_y() > self.threshold;
        if self.scrolled {
            host.add_class(nav, SCROLLED_CLASS);
        } else {
            host.remove_class(nav, SCROLLED_CLASS);
        }
    }
}
