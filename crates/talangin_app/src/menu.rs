//! Mobile menu and its focus trap

use talangin_core::NodeId;
use talangin_platform::{Document, EventResponse, Key, KeyboardEvent, Selector};

pub const TOGGLE_CLASS: &str = "nav__mobile-toggle";
pub const MENU_CLASS: &str = "mobile-menu";
pub const LINK_CLASS: &str = "mobile-menu__link";

/// Full-screen menu opened from the navbar on small screens
///
/// Open state lives in the toggle's `aria-expanded`, so markup that
/// starts expanded is respected.
#[derive(Debug)]
pub struct MobileMenu {
    toggle: NodeId,
    menu: NodeId,
    desktop_min_width: f32,
}

impl MobileMenu {
    /// `None` when the page has no toggle or no menu
    pub fn init<D: Document + ?Sized>(doc: &D, desktop_min_width: f32) -> Option<Self> {
        let toggle = doc.query(&Selector::class(TOGGLE_CLASS))?;
        let menu = doc.query(&Selector::class(MENU_CLASS))?;
        Some(Self {
            toggle,
            menu,
            desktop_min_width,
        })
    }

    pub fn toggle_button(&self) -> NodeId {
        self.toggle
    }

    pub fn element(&self) -> NodeId {
        self.menu
    }

    pub fn is_open<D: Document + ?Sized>(&self, doc: &D) -> bool {
        doc.attribute(self.toggle, "aria-expanded").as_deref() == Some("true")
    }

    pub fn open<D: Document + ?Sized>(&self, doc: &mut D) {
        doc.set_attribute(self.toggle, "aria-expanded", "true");
        doc.set_attribute(self.menu, "aria-hidden", "false");
        let body = doc.body();
        doc.set_style(body, "overflow", "hidden");
    }

    pub fn close<D: Document + ?Sized>(&self, doc: &mut D) {
        doc.set_attribute(self.toggle, "aria-expanded", "false");
        doc.set_attribute(self.menu, "aria-hidden", "true");
        let body = doc.body();
        doc.set_style(body, "overflow", "");
    }

    pub fn toggle<D: Document + ?Sized>(&self, doc: &mut D) {
        if self.is_open(doc) {
            self.close(doc);
        } else {
            self.open(doc);
        }
    }

    /// Toggle on the button, close on any menu link
    pub fn handle_click<D: Document + ?Sized>(&self, doc: &mut D, target: NodeId) -> bool {
        if doc.closest(target, &Selector::class(TOGGLE_CLASS)) == Some(self.toggle) {
            self.toggle(doc);
            return true;
        }
        if doc.closest(target, &Selector::class(LINK_CLASS)).is_some() {
            self.close(doc);
            return true;
        }
        false
    }

    /// Escape closes an open menu and returns focus to the toggle
    pub fn handle_key<D: Document + ?Sized>(&self, doc: &mut D, event: &KeyboardEvent) -> bool {
        if event.key != Key::Escape || !self.is_open(doc) {
            return false;
        }
        self.close(doc);
        doc.focus(self.toggle);
        true
    }

    /// Widening to desktop closes the menu
    pub fn on_resize<D: Document + ?Sized>(&self, doc: &mut D, width: f32) {
        if width >= self.desktop_min_width && self.is_open(doc) {
            self.close(doc);
        }
    }
}

/// Keeps Tab cycling inside the mobile menu
#[derive(Debug)]
pub struct FocusTrap {
    menu: NodeId,
    first: NodeId,
    last: NodeId,
}

impl FocusTrap {
    /// `None` without a menu or without anything focusable in it
    pub fn init<D: Document + ?Sized>(doc: &D) -> Option<Self> {
        let menu = doc.query(&Selector::class(MENU_CLASS))?;
        let focusable = doc.query_within(menu, &Selector::focusable());
        Some(Self {
            menu,
            first: *focusable.first()?,
            last: *focusable.last()?,
        })
    }

    pub fn bounds(&self) -> (NodeId, NodeId) {
        (self.first, self.last)
    }

    pub fn handle_key<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        target: Option<NodeId>,
        event: &KeyboardEvent,
    ) -> EventResponse {
        if event.key != Key::Tab {
            return EventResponse::Continue;
        }
        let inside = target.and_then(|t| doc.closest(t, &Selector::class(MENU_CLASS))) == Some(self.menu);
        if !inside {
            return EventResponse::Continue;
        }

        let active = doc.active_element();
        let wrap_to = if event.modifiers.shift {
            (active == Some(self.first)).then_some(self.last)
        } else {
            (active == Some(self.last)).then_some(self.first)
        };
        match wrap_to {
            Some(node) => {
                doc.focus(node);
                EventResponse::PreventDefault
            }
            None => EventResponse::Continue,
        }
    }
}
