//! Viewport observers
//!
//! Both run on scroll: [`SectionObserver`] highlights the nav link of the
//! section under the middle of the viewport, [`LazyImages`] swaps in real
//! image sources once images come near the viewport.

use talangin_core::NodeId;
use talangin_platform::{Document, Selector, Window};

pub const NAV_LINK_CLASS: &str = "nav__link";
pub const ACTIVE_LINK_CLASS: &str = "nav__link--active";

#[derive(Debug)]
pub struct SectionObserver {
    /// `section[id]` elements with their ids, in document order
    sections: Vec<(NodeId, String)>,
    links: Vec<NodeId>,
    active: Option<NodeId>,
}

impl SectionObserver {
    /// `None` when the page has no identified sections or no nav links
    pub fn init<D: Document + ?Sized>(doc: &D) -> Option<Self> {
        let sections: Vec<_> = doc
            .query_all(&Selector::tag("section").and(Selector::attr("id")))
            .into_iter()
            .filter_map(|node| doc.attribute(node, "id").map(|id| (node, id)))
            .collect();
        let links = doc.query_all(&Selector::class(NAV_LINK_CLASS));
        if sections.is_empty() || links.is_empty() {
            return None;
        }
        Some(Self {
            sections,
            links,
            active: None,
        })
    }

    /// Section currently highlighted
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Re-check which section crosses the viewport center
    ///
    /// Returns whether the highlight moved. When no section crosses the
    /// center the previous highlight stays.
    pub fn update<H: Document + Window + ?Sized>(&mut self, host: &mut H) -> bool {
        let center = host.inner_height() / 2.0;
        let Some((section, id)) = self
            .sections
            .iter()
            .find(|(node, _)| host.bounding_rect(*node).spans_y(center))
        else {
            return false;
        };
        if self.active == Some(*section) {
            return false;
        }
        self.active = Some(*section);

        let href = format!("#{id}");
        for &link in &self.links {
            if host.attribute(link, "href").as_deref() == Some(href.as_str()) {
                host.add_class(link, ACTIVE_LINK_CLASS);
            } else {
                host.remove_class(link, ACTIVE_LINK_CLASS);
            }
        }
        tracing::trace!("SectionObserver: {} active", href);
        true
    }
}

/// `img[data-src]` elements waiting to load
#[derive(Debug)]
pub struct LazyImages {
    pending: Vec<NodeId>,
    margin: f32,
}

impl LazyImages {
    pub fn init<D: Document + ?Sized>(doc: &D, margin: f32) -> Self {
        Self {
            pending: doc.query_all(&Selector::tag("img").and(Selector::attr("data-src"))),
            margin,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Load every pending image within the margin of the viewport
    ///
    /// Loaded images are dropped from the watch list. Returns how many
    /// loaded.
    pub fn update<H: Document + Window + ?Sized>(&mut self, host: &mut H) -> usize {
        let viewport_height = host.inner_height();
        let margin = self.margin;
        let before = self.pending.len();
        self.pending.retain(|&img| {
            let rect = host.bounding_rect(img);
            let near = rect.bottom() >= -margin && rect.top() <= viewport_height + margin;
            if !near {
                return true;
            }
            if let Some(src) = host.attribute(img, "data-src") {
                host.set_attribute(img, "src", &src);
                host.remove_attribute(img, "data-src");
            }
            false
        });
        before - self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_core::Size;
    use talangin_platform::{element, HeadlessPage};

    #[test]
    fn test_center_section_highlights_its_link() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let features = page.append(body, element("a").class(NAV_LINK_CLASS).attr("href", "#features"));
        let how = page.append(body, element("a").class(NAV_LINK_CLASS).attr("href", "#how-it-works"));
        let first = page.append(body, element("section").id("features").at(0.0, 1000.0));
        let second = page.append(body, element("section").id("how-it-works").at(1000.0, 1000.0));

        let mut observer = SectionObserver::init(&page).unwrap();
        assert!(observer.update(&mut page));
        assert_eq!(observer.active(), Some(first));
        assert!(page.has_class(features, ACTIVE_LINK_CLASS));

        // Same section again is not a change
        page.set_scroll_y(200.0);
        assert!(!observer.update(&mut page));

        page.set_scroll_y(700.0);
        assert!(observer.update(&mut page));
        assert_eq!(observer.active(), Some(second));
        assert!(!page.has_class(features, ACTIVE_LINK_CLASS));
        assert!(page.has_class(how, ACTIVE_LINK_CLASS));
    }

    #[test]
    fn test_gap_keeps_previous_highlight() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let link = page.append(body, element("a").class(NAV_LINK_CLASS).attr("href", "#features"));
        page.append(body, element("section").id("features").at(0.0, 600.0));

        let mut observer = SectionObserver::init(&page).unwrap();
        observer.update(&mut page);
        page.set_scroll_y(2000.0);
        assert!(!observer.update(&mut page));
        assert!(page.has_class(link, ACTIVE_LINK_CLASS));
    }

    #[test]
    fn test_needs_sections_and_links() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        page.append(body, element("section").id("features"));
        assert!(SectionObserver::init(&page).is_none());
    }

    #[test]
    fn test_lazy_images_load_near_viewport() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let near = page.append(body, element("img").attr("data-src", "a.png").at(830.0, 100.0));
        let far = page.append(body, element("img").attr("data-src", "b.png").at(3000.0, 100.0));
        page.append(body, element("img").attr("src", "eager.png").at(0.0, 100.0));

        let mut images = LazyImages::init(&page, 50.0);
        assert_eq!(images.pending(), 2);
        assert_eq!(images.update(&mut page), 1);
        assert_eq!(page.attribute(near, "src").as_deref(), Some("a.png"));
        assert_eq!(page.attribute(near, "data-src"), None);
        assert_eq!(page.attribute(far, "src"), None);

        page.set_scroll_y(2500.0);
        assert_eq!(images.update(&mut page), 1);
        assert_eq!(page.attribute(far, "src").as_deref(), Some("b.png"));
        assert_eq!(images.pending(), 0);
    }
}
