//! Talangin Content
//!
//! The landing page's copy as data, plus the English and Indonesian
//! translation tables that rewrite `[data-i18n]` elements in place.
//!
//! Both ship inside the crate as TOML assets:
//!
//! ```
//! use talangin_content::{ContentStore, Language, Translations};
//!
//! let content = ContentStore::bundled().unwrap();
//! assert_eq!(content.get_all_content().site.name, "Talangin");
//!
//! let translations = Translations::bundled().unwrap();
//! assert_eq!(translations.get(Language::Id, "nav.features"), Some("Fitur"));
//! ```

mod content;
mod error;
mod i18n;
mod switcher;

pub use content::{
    AppMockup, Balance, ContentStore, Cta, Feature, Features, Footer, FooterColumn, Hero, HeroCta,
    HeroStat, HeroTitle, HowItWorks, Link, MockupHeader, MockupMember, MockupTotal, Navigation,
    SiteContent, SiteMeta, Step, StoreLink, Testimonial, Testimonials, HERO_STAT_COUNT,
};
pub use error::{ContentError, Result};
pub use i18n::{apply, Language, Translations};
pub use switcher::{I18nConfig, LanguageSwitcher};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::content::{ContentStore, SiteContent};
    pub use crate::error::{ContentError, Result};
    pub use crate::i18n::{Language, Translations};
    pub use crate::switcher::{I18nConfig, LanguageSwitcher};
}
