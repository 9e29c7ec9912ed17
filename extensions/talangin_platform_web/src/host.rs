//! Browser host over `web-sys`
//!
//! Elements are registered lazily: the first time a DOM element comes back
//! from a query or an event it gets a [`NodeId`], recorded both in a slot
//! map and in a JS `Map` keyed by the element object, so the same element
//! always maps to the same id.

use std::cell::RefCell;

use js_sys::Reflect;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use talangin_core::{NodeId, PropertySet, Rect, Size};
use talangin_platform::{
    Capabilities, Document, MediaQuery, PlatformError, PreferenceStore, Result, ScrollBehavior,
    Selector, Window,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollToOptions, Storage};

use crate::report::warn_on_err;
use crate::style;

struct Registry {
    elements: SlotMap<NodeId, Element>,
    ids: js_sys::Map,
}

impl Registry {
    fn id_for(&mut self, element: Element) -> NodeId {
        if let Some(raw) = self.ids.get(&element).as_f64() {
            return NodeId::from_raw(raw as u64);
        }
        let key = JsValue::from(element.clone());
        let id = self.elements.insert(element);
        self.ids.set(&key, &JsValue::from_f64(id.to_raw() as f64));
        id
    }
}

pub struct WebHost {
    window: web_sys::Window,
    document: web_sys::Document,
    storage: Option<Storage>,
    registry: RefCell<Registry>,
    visuals: FxHashMap<NodeId, PropertySet>,
}

impl WebHost {
    /// Attach to the global window and document
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| PlatformError::Unavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| PlatformError::Unavailable("no document".into()))?;
        // Private browsing can deny storage entirely
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("WebHost: localStorage unavailable, preferences will not persist");
        }
        Ok(Self {
            window,
            document,
            storage,
            registry: RefCell::new(Registry {
                elements: SlotMap::with_key(),
                ids: js_sys::Map::new(),
            }),
            visuals: FxHashMap::default(),
        })
    }

    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    /// Id for a DOM element, registering it on first sight
    pub fn node_for(&self, element: Element) -> NodeId {
        self.registry.borrow_mut().id_for(element)
    }

    /// Id for an event target, if it is an element
    pub fn node_for_target(&self, target: Option<web_sys::EventTarget>) -> Option<NodeId> {
        let element = target?.dyn_into::<Element>().ok()?;
        Some(self.node_for(element))
    }

    fn element(&self, node: NodeId) -> Option<Element> {
        self.registry.borrow().elements.get(node).cloned()
    }

    fn html_element(&self, node: NodeId) -> Option<HtmlElement> {
        self.element(node)?.dyn_into::<HtmlElement>().ok()
    }

    fn collect(&self, list: std::result::Result<web_sys::NodeList, JsValue>, selector: &Selector) -> Vec<NodeId> {
        let list = match list {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!("WebHost: query '{}' failed: {:?}", selector, err);
                return Vec::new();
            }
        };
        let mut registry = self.registry.borrow_mut();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| registry.id_for(element))
            .collect()
    }

    fn media_matches(&self, query: &str) -> bool {
        matches!(self.window.match_media(query), Ok(Some(list)) if list.matches())
    }
}

// ============================================================================
// Document
// ============================================================================

impl Document for WebHost {
    fn root(&self) -> NodeId {
        match self.document.document_element() {
            Some(element) => self.node_for(element),
            None => NodeId::default(),
        }
    }

    fn body(&self) -> NodeId {
        match self.document.body() {
            Some(body) => self.node_for(body.into()),
            None => NodeId::default(),
        }
    }

    fn query_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.collect(self.document.query_selector_all(&selector.to_string()), selector)
    }

    fn query_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        match self.element(scope) {
            Some(element) => self.collect(element.query_selector_all(&selector.to_string()), selector),
            None => Vec::new(),
        }
    }

    fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        let found = self.element(node)?.closest(&selector.to_string()).ok()??;
        Some(self.node_for(found))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element(node) {
            warn_on_err("setAttribute", element.set_attribute(name, value));
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.element(node) {
            warn_on_err("removeAttribute", element.remove_attribute(name));
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .map(|element| element.class_list().contains(class))
            .unwrap_or(false)
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element(node) {
            warn_on_err("classList.add", element.class_list().add_1(class));
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element(node) {
            warn_on_err("classList.remove", element.class_list().remove_1(class));
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(element) = self.element(node) {
            element.set_text_content(Some(text));
        }
    }

    fn visual(&self, node: NodeId) -> PropertySet {
        self.visuals.get(&node).copied().unwrap_or_default()
    }

    fn set_visual(&mut self, node: NodeId, props: &PropertySet) {
        let Some(element) = self.html_element(node) else {
            return;
        };
        let state = self.visuals.entry(node).or_default();
        state.apply(props);
        let css = element.style();
        for (property, value) in style::declarations(state) {
            warn_on_err("style.setProperty", css.set_property(property, &value));
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(element) = self.html_element(node) else {
            return;
        };
        let css = element.style();
        if value.is_empty() {
            warn_on_err("style.removeProperty", css.remove_property(property));
        } else {
            warn_on_err("style.setProperty", css.set_property(property, value));
        }
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        match self.element(node) {
            Some(element) => {
                let rect = element.get_bounding_client_rect();
                Rect::new(rect.x() as f32, rect.y() as f32, rect.width() as f32, rect.height() as f32)
            }
            None => Rect::ZERO,
        }
    }

    fn offset_height(&self, node: NodeId) -> f32 {
        self.html_element(node).map(|el| el.offset_height() as f32).unwrap_or(0.0)
    }

    fn focus(&mut self, node: NodeId) {
        if let Some(element) = self.html_element(node) {
            warn_on_err("focus", element.focus());
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.document.active_element().map(|element| self.node_for(element))
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        match self.document.create_element(tag) {
            Ok(element) => self.node_for(element),
            Err(err) => {
                tracing::warn!("WebHost: cannot create <{}>: {:?}", tag, err);
                NodeId::default()
            }
        }
    }

    fn clone_node(&mut self, node: NodeId) -> Option<NodeId> {
        let copy = self.element(node)?.clone_node_with_deep(true).ok()?;
        let element = copy.dyn_into::<Element>().ok()?;
        Some(self.node_for(element))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let (Some(parent), Some(child)) = (self.element(parent), self.element(child)) {
            warn_on_err("appendChild", parent.append_child(&child));
        }
    }
}

// ============================================================================
// Window
// ============================================================================

impl Window for WebHost {
    fn scroll_y(&self) -> f32 {
        self.window.scroll_y().unwrap_or(0.0) as f32
    }

    fn viewport(&self) -> Size {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(width as f32, height as f32)
    }

    fn scroll_to(&mut self, y: f32, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_top(f64::from(y));
        options.set_behavior(match behavior {
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn push_history(&mut self, hash: &str) {
        let pushed = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(hash)));
        warn_on_err("history.pushState", pushed);
    }

    fn matches_media(&self, query: MediaQuery) -> bool {
        self.media_matches(query.as_css())
    }

    fn capabilities(&self) -> Capabilities {
        let has = |name: &str| Reflect::has(&self.window, &JsValue::from_str(name)).unwrap_or(false);
        Capabilities {
            animation_frames: has("requestAnimationFrame"),
            viewport_observation: has("IntersectionObserver"),
        }
    }
}

// ============================================================================
// Preferences
// ============================================================================

impl PreferenceStore for WebHost {
    fn get_preference(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PlatformError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| PlatformError::Storage(format!("{err:?}")))
    }
}
