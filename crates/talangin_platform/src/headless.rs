//! Headless in-memory page
//!
//! A complete [`Host`](crate::Host) implementation with no browser behind
//! it. Elements carry an explicit document-absolute layout rectangle, so
//! scroll geometry is fully controlled by the caller. Used by every test in
//! the workspace and by tools that pre-compute page state.
//!
//! # Example
//!
//! ```rust
//! use talangin_core::{Rect, Size};
//! use talangin_platform::{element, Document, HeadlessPage, Selector};
//!
//! let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
//! let body = page.body();
//! let hero = page.append(body, element("section").class("hero").layout(Rect::new(0.0, 0.0, 1280.0, 800.0)));
//! let title = page.append(hero, element("h1").attr("data-animate", "fade-up"));
//!
//! assert_eq!(page.closest(title, &Selector::class("hero")), Some(hero));
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use talangin_core::{NodeId, PropertySet, Rect, Size};

use crate::document::{Document, PreferenceStore, Window};
use crate::error::Result;
use crate::media::{Capabilities, MediaQuery, ScrollBehavior};
use crate::selector::{ElementView, Selector};
use crate::storage::MemoryStore;

/// Description of an element to insert into a [`HeadlessPage`]
#[derive(Clone, Debug, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    text: String,
    layout: Rect,
}

/// Start describing an element with the given tag
pub fn element(tag: &str) -> ElementSpec {
    ElementSpec {
        tag: tag.to_ascii_lowercase(),
        ..Default::default()
    }
}

impl ElementSpec {
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Document-absolute layout rectangle
    pub fn layout(mut self, layout: Rect) -> Self {
        self.layout = layout;
        self
    }

    /// Full-width block at document offset `top`
    pub fn at(self, top: f32, height: f32) -> Self {
        self.layout(Rect::new(0.0, top, 0.0, height))
    }
}

#[derive(Clone, Debug)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attributes: IndexMap<String, String>,
    text: String,
    visual: PropertySet,
    style: IndexMap<String, String>,
    layout: Rect,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ElementData {
    fn from_spec(spec: ElementSpec) -> Self {
        Self {
            tag: spec.tag,
            classes: spec.classes,
            attributes: spec.attributes.into_iter().collect(),
            text: spec.text,
            visual: PropertySet::new(),
            style: IndexMap::new(),
            layout: spec.layout,
            parent: None,
            children: Vec::new(),
        }
    }
}

impl ElementView for ElementData {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory page host
pub struct HeadlessPage {
    nodes: SlotMap<NodeId, ElementData>,
    root: NodeId,
    body: NodeId,
    scroll_y: f32,
    viewport: Size,
    media: FxHashMap<MediaQuery, bool>,
    capabilities: Capabilities,
    storage: MemoryStore,
    history: Vec<String>,
    scroll_log: Vec<(f32, ScrollBehavior)>,
    focused: Option<NodeId>,
}

impl HeadlessPage {
    /// Create an empty page (`<html><body></body></html>`)
    pub fn new(viewport: Size) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(ElementData::from_spec(element("html")));
        let body = nodes.insert(ElementData::from_spec(element("body")));
        nodes[body].parent = Some(root);
        nodes[root].children.push(body);

        Self {
            nodes,
            root,
            body,
            scroll_y: 0.0,
            viewport,
            media: FxHashMap::default(),
            capabilities: Capabilities::full(),
            storage: MemoryStore::new(),
            history: Vec::new(),
            scroll_log: Vec::new(),
            focused: None,
        }
    }

    /// Insert an element as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let id = self.nodes.insert(ElementData::from_spec(spec));
        self.append_child(parent, id);
        id
    }

    /// Replace the layout rectangle of `node` (document-absolute)
    pub fn set_layout(&mut self, node: NodeId, layout: Rect) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.layout = layout;
        }
    }

    /// Move the scroll position without recording a `scroll_to` call
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn set_media(&mut self, query: MediaQuery, matches: bool) {
        self.media.insert(query, matches);
    }

    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
    }

    pub fn storage(&self) -> &MemoryStore {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut MemoryStore {
        &mut self.storage
    }

    /// Fragments pushed with `push_history`
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Every `scroll_to` call, in order
    pub fn scroll_log(&self) -> &[(f32, ScrollBehavior)] {
        &self.scroll_log
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node).map(|d| d.text.as_str())
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(node)
            .and_then(|d| d.style.get(property))
            .map(String::as_str)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|d| d.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|d| d.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of live elements, detached ones included
    pub fn element_count(&self) -> usize {
        self.nodes.len()
    }

    fn collect_matches(&self, node: NodeId, selector: &Selector, out: &mut Vec<NodeId>) {
        let Some(data) = self.nodes.get(node) else {
            return;
        };
        for &child in &data.children {
            if let Some(child_data) = self.nodes.get(child) {
                if selector.matches(child_data) {
                    out.push(child);
                }
            }
            self.collect_matches(child, selector, out);
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(node).and_then(|d| d.parent) else {
            return;
        };
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children.retain(|c| *c != node);
        }
        if let Some(data) = self.nodes.get_mut(node) {
            data.parent = None;
        }
    }

    fn clone_subtree(&mut self, node: NodeId) -> Option<NodeId> {
        let mut data = self.nodes.get(node)?.clone();
        let children = std::mem::take(&mut data.children);
        data.parent = None;
        let copy = self.nodes.insert(data);
        for child in children {
            if let Some(child_copy) = self.clone_subtree(child) {
                self.append_child(copy, child_copy);
            }
        }
        Some(copy)
    }
}

impl Document for HeadlessPage {
    fn root(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        if selector.matches(&self.nodes[self.root]) {
            out.push(self.root);
        }
        self.collect_matches(self.root, selector, &mut out);
        out
    }

    fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_matches(scope, selector, &mut out);
        out
    }

    fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            let data = self.nodes.get(id)?;
            if selector.matches(data) {
                return Some(id);
            }
            current = data.parent;
        }
        None
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let data = self.nodes.get(node)?;
        if name == "class" && !data.classes.is_empty() {
            return Some(data.classes.join(" "));
        }
        data.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.attributes.shift_remove(name);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node)
            .map(|d| ElementView::has_class(d, class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            if !data.classes.iter().any(|c| c == class) {
                data.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.classes.retain(|c| c != class);
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.text = text.to_string();
        }
    }

    fn visual(&self, node: NodeId) -> PropertySet {
        self.nodes.get(node).map(|d| d.visual).unwrap_or_default()
    }

    fn set_visual(&mut self, node: NodeId, props: &PropertySet) {
        if let Some(data) = self.nodes.get_mut(node) {
            data.visual.apply(props);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(data) = self.nodes.get_mut(node) {
            if value.is_empty() {
                data.style.shift_remove(property);
            } else {
                data.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.nodes
            .get(node)
            .map(|d| d.layout.offset_y(-self.scroll_y))
            .unwrap_or(Rect::ZERO)
    }

    fn offset_height(&self, node: NodeId) -> f32 {
        self.nodes.get(node).map(|d| d.layout.height()).unwrap_or(0.0)
    }

    fn focus(&mut self, node: NodeId) {
        if self.nodes.contains_key(node) {
            self.focused = Some(node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(ElementData::from_spec(element(tag)))
    }

    fn clone_node(&mut self, node: NodeId) -> Option<NodeId> {
        self.clone_subtree(node)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }
}

impl Window for HeadlessPage {
    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, y: f32, behavior: ScrollBehavior) {
        self.scroll_log.push((y, behavior));
        self.scroll_y = y.max(0.0);
    }

    fn push_history(&mut self, hash: &str) {
        self.history.push(hash.to_string());
    }

    fn matches_media(&self, query: MediaQuery) -> bool {
        self.media.get(&query).copied().unwrap_or(false)
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

impl PreferenceStore for HeadlessPage {
    fn get_preference(&self, key: &str) -> Option<String> {
        self.storage.get(key).map(str::to_string)
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set(key, value)
    }
}
