//! Theme controller

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use talangin_core::NodeId;
use talangin_platform::{Document, MediaQuery, PreferenceStore, Selector, Window};

use crate::scheme::ColorScheme;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Preference key
    pub storage_key: String,
    /// Root attribute holding the scheme
    pub attribute: String,
    /// Ids of the toggle buttons
    pub toggle_ids: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "talangin-theme".to_string(),
            attribute: "data-theme".to_string(),
            toggle_ids: vec!["theme-toggle".to_string(), "mobile-theme-toggle".to_string()],
        }
    }
}

#[derive(Debug)]
pub struct ThemeController {
    config: ThemeConfig,
    toggle_selector: Selector,
    toggles: SmallVec<[NodeId; 2]>,
    scheme: ColorScheme,
}

impl ThemeController {
    /// Pick the initial scheme and apply it
    pub fn init<H: Document + Window + PreferenceStore + ?Sized>(host: &mut H, config: ThemeConfig) -> Self {
        let toggle_selector = Selector::any(config.toggle_ids.iter().map(|id| Selector::id(id.as_str())));
        let toggles = host.query_all(&toggle_selector).into_iter().collect();

        let stored = host
            .get_preference(&config.storage_key)
            .and_then(|value| value.parse::<ColorScheme>().ok());
        let scheme = stored.unwrap_or_else(|| {
            ColorScheme::from_system(host.matches_media(MediaQuery::PrefersDarkScheme))
        });

        let controller = Self {
            config,
            toggle_selector,
            toggles,
            scheme,
        };
        controller.apply(host);
        tracing::debug!(
            "ThemeController: {} ({}), {} toggles",
            scheme,
            if stored.is_some() { "stored" } else { "system" },
            controller.toggles.len()
        );
        controller
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn toggles(&self) -> &[NodeId] {
        &self.toggles
    }

    fn apply<D: Document + ?Sized>(&self, doc: &mut D) {
        let root = doc.root();
        doc.set_attribute(root, &self.config.attribute, self.scheme.as_str());
    }

    fn persist<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        if let Err(err) = store.set_preference(&self.config.storage_key, self.scheme.as_str()) {
            tracing::warn!("theme preference not saved: {}", err);
        }
    }

    /// Flip the scheme shown on the page and remember the choice
    pub fn toggle<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H) -> ColorScheme {
        let root = host.root();
        let shown = host
            .attribute(root, &self.config.attribute)
            .and_then(|value| value.parse::<ColorScheme>().ok())
            .unwrap_or(self.scheme);
        self.set(host, shown.toggled());
        self.scheme
    }

    /// Apply and persist `scheme`
    pub fn set<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, scheme: ColorScheme) {
        self.scheme = scheme;
        self.apply(host);
        self.persist(host);
    }

    /// Handle a click; returns whether it hit a toggle
    pub fn handle_click<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, target: NodeId) -> bool {
        if self.toggles.is_empty() || host.closest(target, &self.toggle_selector).is_none() {
            return false;
        }
        self.toggle(host);
        true
    }

    /// Follow the system scheme unless the user picked one
    pub fn on_system_change<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, prefers_dark: bool) -> bool {
        if host.get_preference(&self.config.storage_key).is_some() {
            return false;
        }
        self.scheme = ColorScheme::from_system(prefers_dark);
        self.apply(host);
        true
    }
}
