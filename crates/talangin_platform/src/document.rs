//! Host traits
//!
//! The page runtime reaches the outside world only through these traits:
//!
//! - [`Document`] - element queries and mutations
//! - [`Window`] - scroll position, viewport, history, media queries
//! - [`PreferenceStore`] - persisted string preferences
//!
//! [`Host`] bundles all three and is implemented automatically.

use talangin_core::{NodeId, PropertySet, Rect, Size};

use crate::error::Result;
use crate::media::{Capabilities, MediaQuery, ScrollBehavior};
use crate::selector::Selector;

/// Element tree access
///
/// Query results are always in document order. Mutating calls on a node
/// that no longer exists are ignored.
pub trait Document {
    /// The root (`<html>`) element
    fn root(&self) -> NodeId;

    /// The `<body>` element
    fn body(&self) -> NodeId;

    /// All elements matching `selector`
    fn query_all(&self, selector: &Selector) -> Vec<NodeId>;

    /// First element matching `selector`
    fn query(&self, selector: &Selector) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Descendants of `scope` (excluding `scope`) matching `selector`
    fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId>;

    /// Nearest inclusive ancestor of `node` matching `selector`
    fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Replace the text content of `node`
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Last written animatable properties of `node`
    fn visual(&self, node: NodeId) -> PropertySet;

    /// Write animatable properties (only the fields present in `props`)
    fn set_visual(&mut self, node: NodeId, props: &PropertySet);

    /// Set a raw inline style property (empty value clears it)
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Viewport-relative bounds, as `getBoundingClientRect()`
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// Layout height, as `offsetHeight`
    fn offset_height(&self, node: NodeId) -> f32;

    /// Move keyboard focus to `node`
    fn focus(&mut self, node: NodeId);

    /// Currently focused element
    fn active_element(&self) -> Option<NodeId>;

    /// Create a detached element
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Deep-clone `node` into a detached subtree
    fn clone_node(&mut self, node: NodeId) -> Option<NodeId>;

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: NodeId, child: NodeId);
}

/// Browser window access
pub trait Window {
    /// Vertical scroll position of the page
    fn scroll_y(&self) -> f32;

    /// Inner viewport size
    fn viewport(&self) -> Size;

    fn inner_width(&self) -> f32 {
        self.viewport().width
    }

    fn inner_height(&self) -> f32 {
        self.viewport().height
    }

    /// Scroll the page to an absolute vertical position
    fn scroll_to(&mut self, y: f32, behavior: ScrollBehavior);

    /// Push a URL fragment onto the session history without scrolling
    fn push_history(&mut self, hash: &str);

    /// Evaluate a media query
    fn matches_media(&self, query: MediaQuery) -> bool;

    /// Animation features the host can drive
    fn capabilities(&self) -> Capabilities;
}

/// Persisted string preferences (`localStorage`)
pub trait PreferenceStore {
    fn get_preference(&self, key: &str) -> Option<String>;

    fn set_preference(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Everything the page runtime needs from its environment
pub trait Host: Document + Window + PreferenceStore {}

impl<T: Document + Window + PreferenceStore> Host for T {}
