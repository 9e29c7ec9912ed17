//! Language switcher

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use talangin_core::NodeId;
use talangin_platform::{Document, PreferenceStore, Selector};

use crate::error::Result;
use crate::i18n::{apply, Language, Translations};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Preference key
    pub storage_key: String,
    /// Attribute holding an element's string key
    pub key_attribute: String,
    /// Attribute naming a button's language
    pub language_attribute: String,
    /// Classes of the language buttons
    pub button_classes: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            storage_key: "talangin-lang".to_string(),
            key_attribute: "data-i18n".to_string(),
            language_attribute: "data-lang".to_string(),
            button_classes: vec!["nav__lang-btn".to_string(), "mobile-menu__lang-btn".to_string()],
        }
    }
}

impl I18nConfig {
    pub fn button_selector(&self) -> Selector {
        Selector::any(self.button_classes.iter().map(|class| Selector::class(class.as_str())))
    }
}

/// Owns the page language and the buttons that change it
///
/// Without language buttons on the page the switcher stays inactive: the
/// markup's own text is left alone and clicks are ignored.
#[derive(Debug)]
pub struct LanguageSwitcher {
    config: I18nConfig,
    translations: Translations,
    buttons: SmallVec<[NodeId; 4]>,
    current: Language,
}

impl LanguageSwitcher {
    /// Restore the stored language (else English) and apply it
    pub fn init<H: Document + PreferenceStore + ?Sized>(
        host: &mut H,
        translations: Translations,
        config: I18nConfig,
    ) -> Self {
        let buttons: SmallVec<[NodeId; 4]> = host.query_all(&config.button_selector()).into_iter().collect();
        let mut switcher = Self {
            config,
            translations,
            buttons,
            current: Language::En,
        };
        if !switcher.is_active() {
            tracing::debug!("LanguageSwitcher: no language buttons, inactive");
            return switcher;
        }

        switcher.current = host
            .get_preference(&switcher.config.storage_key)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        apply(host, &switcher.translations, switcher.current, &switcher.config);
        switcher
    }

    pub fn is_active(&self) -> bool {
        !self.buttons.is_empty()
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Apply `language` and remember it
    pub fn set_language<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, language: Language) {
        self.current = language;
        apply(host, &self.translations, language, &self.config);
        if let Err(err) = host.set_preference(&self.config.storage_key, language.as_str()) {
            tracing::warn!("language preference not saved: {}", err);
        }
    }

    /// Switch by name; unsupported names are rejected
    pub fn set_language_named<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, name: &str) -> Result<()> {
        let language: Language = name.parse()?;
        self.set_language(host, language);
        Ok(())
    }

    /// Handle a click; returns whether it hit a language button
    pub fn handle_click<H: Document + PreferenceStore + ?Sized>(&mut self, host: &mut H, target: NodeId) -> bool {
        if !self.is_active() {
            return false;
        }
        let Some(button) = host.closest(target, &self.config.button_selector()) else {
            return false;
        };
        let Some(language) = host
            .attribute(button, &self.config.language_attribute)
            .and_then(|value| value.parse::<Language>().ok())
        else {
            return true;
        };
        if language != self.current {
            self.set_language(host, language);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_core::Size;
    use talangin_platform::{element, HeadlessPage};

    struct Page {
        page: HeadlessPage,
        badge: NodeId,
        en: NodeId,
        id: NodeId,
    }

    fn page() -> Page {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let badge = page.append(body, element("span").attr("data-i18n", "hero.badge").text("Now available on iOS"));
        let en = page.append(body, element("button").class("nav__lang-btn").attr("data-lang", "en"));
        let id = page.append(body, element("button").class("nav__lang-btn").attr("data-lang", "id"));
        Page { page, badge, en, id }
    }

    fn switcher(page: &mut HeadlessPage) -> LanguageSwitcher {
        LanguageSwitcher::init(page, Translations::bundled().unwrap(), I18nConfig::default())
    }

    #[test]
    fn test_defaults_to_english() {
        let mut p = page();
        let switcher = switcher(&mut p.page);
        assert!(switcher.is_active());
        assert_eq!(switcher.current(), Language::En);
        assert_eq!(p.page.attribute(p.en, "aria-pressed").as_deref(), Some("true"));
        assert_eq!(p.page.attribute(p.page.root(), "lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_restores_stored_language() {
        let mut p = page();
        p.page.set_preference("talangin-lang", "id").unwrap();
        let switcher = switcher(&mut p.page);
        assert_eq!(switcher.current(), Language::Id);
        assert_eq!(p.page.text(p.badge), Some("Tersedia di iOS"));
    }

    #[test]
    fn test_unknown_stored_language_falls_back() {
        let mut p = page();
        p.page.set_preference("talangin-lang", "fr").unwrap();
        assert_eq!(switcher(&mut p.page).current(), Language::En);
    }

    #[test]
    fn test_click_switches_and_persists() {
        let mut p = page();
        let mut switcher = switcher(&mut p.page);

        assert!(switcher.handle_click(&mut p.page, p.id));
        assert_eq!(switcher.current(), Language::Id);
        assert_eq!(p.page.text(p.badge), Some("Tersedia di iOS"));
        assert_eq!(p.page.get_preference("talangin-lang").as_deref(), Some("id"));
        assert_eq!(p.page.attribute(p.id, "aria-pressed").as_deref(), Some("true"));
        assert_eq!(p.page.attribute(p.en, "aria-pressed").as_deref(), Some("false"));

        let body = p.page.body();
        assert!(!switcher.handle_click(&mut p.page, body));
    }

    #[test]
    fn test_inactive_without_buttons() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let badge = page.append(body, element("span").attr("data-i18n", "hero.badge").text("markup"));
        page.set_preference("talangin-lang", "id").unwrap();

        let mut switcher = switcher(&mut page);
        assert!(!switcher.is_active());
        assert_eq!(page.text(badge), Some("markup"));
        assert!(!switcher.handle_click(&mut page, badge));
    }

    #[test]
    fn test_set_language_by_name() {
        let mut p = page();
        let mut switcher = switcher(&mut p.page);
        assert!(switcher.set_language_named(&mut p.page, "xx").is_err());
        assert_eq!(switcher.current(), Language::En);
        switcher.set_language_named(&mut p.page, "id").unwrap();
        assert_eq!(switcher.current(), Language::Id);
    }
}
