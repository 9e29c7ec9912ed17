//! Translation tables
//!
//! Elements carry their string key in `data-i18n`; applying a language
//! rewrites the text of every element whose key the table knows.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use talangin_platform::{Document, Selector};

use crate::error::{ContentError, Result};
use crate::switcher::I18nConfig;

const BUNDLED_EN: &str = include_str!("../assets/locales/en.toml");
const BUNDLED_ID: &str = include_str!("../assets/locales/id.toml");

/// Page language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Bahasa Indonesia
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    /// BCP 47 tag, as written to `<html lang>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            other => Err(ContentError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key to string tables, one per language
#[derive(Clone, Debug, Default)]
pub struct Translations {
    tables: FxHashMap<Language, IndexMap<String, String>>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// The en and id tables shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::new()
            .with_table(Language::En, BUNDLED_EN)?
            .with_table(Language::Id, BUNDLED_ID)
    }

    /// Add a table parsed from flat TOML (`"nav.features" = "Features"`)
    pub fn with_table(mut self, language: Language, source: &str) -> Result<Self> {
        let table: IndexMap<String, String> =
            toml::from_str(source).map_err(|source| ContentError::Parse {
                what: "translation table",
                source,
            })?;
        self.tables.insert(language, table);
        Ok(self)
    }

    pub fn supports(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Table for `language`, falling back to English
    pub fn table(&self, language: Language) -> Option<&IndexMap<String, String>> {
        self.tables
            .get(&language)
            .or_else(|| self.tables.get(&Language::En))
    }

    /// Non-empty string for `key`
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.table(language)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// English keys `language` has no entry for
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let (Some(en), Some(other)) = (self.tables.get(&Language::En), self.tables.get(&language)) else {
            return Vec::new();
        };
        en.keys()
            .filter(|key| !other.contains_key(*key))
            .map(String::as_str)
            .collect()
    }
}

/// Rewrite the page in `language`
///
/// Sets the text of every `[data-i18n]` element whose key has a string,
/// the root `lang` attribute, and `aria-pressed` on the language buttons.
/// Returns how many elements were rewritten.
pub fn apply<D: Document + ?Sized>(
    doc: &mut D,
    translations: &Translations,
    language: Language,
    config: &I18nConfig,
) -> usize {
    let mut updated = 0;
    for node in doc.query_all(&Selector::attr(config.key_attribute.as_str())) {
        let Some(key) = doc.attribute(node, &config.key_attribute) else {
            continue;
        };
        if let Some(text) = translations.get(language, &key) {
            doc.set_text(node, text);
            updated += 1;
        }
    }

    let root = doc.root();
    doc.set_attribute(root, "lang", language.as_str());

    for button in doc.query_all(&config.button_selector()) {
        let pressed = doc.attribute(button, &config.language_attribute).as_deref() == Some(language.as_str());
        doc.set_attribute(button, "aria-pressed", if pressed { "true" } else { "false" });
    }

    tracing::debug!("i18n: applied '{}' to {} elements", language, updated);
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_core::Size;
    use talangin_platform::{element, HeadlessPage};

    #[test]
    fn test_language_names() {
        assert_eq!("id".parse::<Language>().unwrap(), Language::Id);
        assert_eq!(Language::default().to_string(), "en");
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(ContentError::UnsupportedLanguage(lang)) if lang == "fr"
        ));
    }

    #[test]
    fn test_bundled_tables_cover_the_same_keys() {
        let translations = Translations::bundled().unwrap();
        assert!(Language::ALL.iter().all(|lang| translations.supports(*lang)));
        assert!(translations.missing_keys(Language::Id).is_empty());
        assert_eq!(translations.get(Language::En, "cta.check"), Some("All settled up!"));
        assert_eq!(translations.get(Language::Id, "cta.check"), Some("Semua Lunas!"));
        assert_eq!(translations.get(Language::Id, "no.such.key"), None);
    }

    #[test]
    fn test_missing_table_falls_back_to_english() {
        let translations = Translations::new()
            .with_table(Language::En, "\"nav.features\" = \"Features\"")
            .unwrap();
        assert!(!translations.supports(Language::Id));
        assert_eq!(translations.get(Language::Id, "nav.features"), Some("Features"));
    }

    #[test]
    fn test_empty_string_is_not_applied() {
        let translations = Translations::new()
            .with_table(Language::En, "\"hero.badge\" = \"\"")
            .unwrap();
        assert_eq!(translations.get(Language::En, "hero.badge"), None);
    }

    #[test]
    fn test_apply_rewrites_known_keys() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let title = page.append(body, element("h1").attr("data-i18n", "hero.badge").text("Now available on iOS"));
        let unknown = page.append(body, element("p").attr("data-i18n", "hero.unknown").text("keep me"));
        let en = page.append(body, element("button").class("nav__lang-btn").attr("data-lang", "en"));
        let id = page.append(body, element("button").class("mobile-menu__lang-btn").attr("data-lang", "id"));

        let translations = Translations::bundled().unwrap();
        let updated = apply(&mut page, &translations, Language::Id, &I18nConfig::default());

        assert_eq!(updated, 1);
        assert_eq!(page.text(title), Some("Tersedia di iOS"));
        assert_eq!(page.text(unknown), Some("keep me"));
        assert_eq!(page.attribute(page.root(), "lang").as_deref(), Some("id"));
        assert_eq!(page.attribute(en, "aria-pressed").as_deref(), Some("false"));
        assert_eq!(page.attribute(id, "aria-pressed").as_deref(), Some("true"));
    }

    #[test]
    fn test_bad_table_is_a_parse_error() {
        let err = Translations::new().with_table(Language::En, "key = [1, 2]").unwrap_err();
        assert!(matches!(err, ContentError::Parse { what: "translation table", .. }));
    }
}
