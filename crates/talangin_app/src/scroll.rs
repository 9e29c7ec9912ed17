//! In-page anchor scrolling
//!
//! Clicking `a[href^="#"]` scrolls to the anchor's section, leaving room
//! for the fixed navbar, and records the hash in history.

use talangin_core::NodeId;
use talangin_platform::{Document, EventResponse, ScrollBehavior, Selector, Window};

use crate::nav::NAV_CLASS;

#[derive(Debug)]
pub struct SmoothScroll {
    behavior: ScrollBehavior,
    fallback_nav_height: f32,
    anchor_selector: Selector,
}

impl SmoothScroll {
    /// Scrolls jump instead of animating when `reduced_motion` is set
    pub fn new(reduced_motion: bool, fallback_nav_height: f32) -> Self {
        Self {
            behavior: if reduced_motion {
                ScrollBehavior::Instant
            } else {
                ScrollBehavior::Smooth
            },
            fallback_nav_height,
            anchor_selector: Selector::tag("a").and(Selector::attr_prefix("href", "#")),
        }
    }

    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Document offset to scroll to for `target`
    pub fn scroll_position<H: Document + Window + ?Sized>(&self, host: &H, target: NodeId) -> f32 {
        let nav_height = host
            .query(&Selector::class(NAV_CLASS))
            .map(|nav| host.offset_height(nav))
            .filter(|height| *height > 0.0)
            .unwrap_or(self.fallback_nav_height);
        host.bounding_rect(target).top() + host.scroll_y() - nav_height
    }

    /// Handle a click anywhere on the page
    pub fn handle_click<H: Document + Window + ?Sized>(&self, host: &mut H, target: NodeId) -> EventResponse {
        let Some(link) = host.closest(target, &self.anchor_selector) else {
            return EventResponse::Continue;
        };
        let Some(href) = host.attribute(link, "href") else {
            return EventResponse::Continue;
        };
        // `#` alone or `##id` is not an in-page target
        let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty() && !id.starts_with('#')) else {
            return EventResponse::Continue;
        };
        let Some(section) = host.query(&Selector::id(id)) else {
            return EventResponse::Continue;
        };

        let top = self.scroll_position(&*host, section);
        host.scroll_to(top, self.behavior);
        host.push_history(&href);
        tracing::trace!("SmoothScroll: {} -> {}", href, top);
        EventResponse::PreventDefault
    }
}
