//! Landing page content document
//!
//! All copy rendered on the page lives in one [`SiteContent`] value,
//! parsed from `assets/site.toml` and validated before use.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

const BUNDLED_SITE: &str = include_str!("../assets/site.toml");

/// The hero always shows this many stats
pub const HERO_STAT_COUNT: usize = 3;

// ============================================================================
// Document
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: SiteMeta,
    pub navigation: Navigation,
    pub hero: Hero,
    pub features: Features,
    pub how_it_works: HowItWorks,
    pub testimonials: Testimonials,
    pub cta: Cta,
    pub footer: Footer,
    pub app_mockup: AppMockup,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub app_store_url: String,
    /// Network name to profile URL
    #[serde(default)]
    pub social_links: IndexMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    pub links: Vec<Link>,
    pub cta: Link,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: HeroTitle,
    pub subtitle: String,
    pub cta: HeroCta,
    pub stats: Vec<HeroStat>,
}

/// Title rendered as `line1 <em>highlight</em> line2`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroTitle {
    pub line1: String,
    pub highlight: String,
    pub line2: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroCta {
    pub primary: Link,
    pub secondary: Link,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

impl HeroStat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    /// Icon name from the page's sprite
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HowItWorks {
    pub label: String,
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Zero-padded position (`01`, `02`, ...)
    pub number: String,
    pub title: String,
    pub description: String,
    /// Illustration shown beside the step
    pub visual: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonials {
    pub label: String,
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub quote: String,
    pub author: String,
    pub role: String,
    pub rating: u8,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub title: String,
    pub subtitle: String,
    pub note: String,
    pub app_store: StoreLink,
}

/// "Download on the App Store" badge
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreLink {
    pub label: String,
    pub store: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<Link>,
}

/// Phone mockup in the hero
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppMockup {
    pub header: MockupHeader,
    pub total: MockupTotal,
    pub members: Vec<MockupMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockupHeader {
    pub title: String,
    pub badge: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockupTotal {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MockupMember {
    pub initial: String,
    pub name: String,
    pub status: String,
    pub amount: String,
    pub balance: Balance,
}

/// Which way money flows for a mockup member
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Balance {
    Positive,
    Negative,
    Neutral,
}

// ============================================================================
// Loading and validation
// ============================================================================

impl SiteContent {
    /// Parse and validate a TOML content document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(source).map_err(|source| ContentError::Parse {
            what: "site content",
            source,
        })?;
        content.validate()?;
        Ok(content)
    }

    /// The content shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_SITE)
    }

    /// Check the structural rules the page markup relies on
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(ContentError::Missing("site name"));
        }
        if let Some(link) = self
            .navigation
            .links
            .iter()
            .chain(std::iter::once(&self.navigation.cta))
            .find(|link| !link.href.starts_with('#'))
        {
            return Err(ContentError::NavigationLink(link.href.clone()));
        }

        check_hero_stats(&self.hero.stats)?;

        let mut ids = FxHashSet::default();
        for feature in &self.features.items {
            if !ids.insert(feature.id.as_str()) {
                return Err(ContentError::DuplicateFeature(feature.id.clone()));
            }
        }

        for (i, step) in self.how_it_works.steps.iter().enumerate() {
            let expected = format!("{:02}", i + 1);
            if step.number != expected {
                return Err(ContentError::StepNumber {
                    position: i + 1,
                    number: step.number.clone(),
                    expected,
                });
            }
        }

        let featured = self.testimonials.items.iter().filter(|t| t.featured).count();
        if featured != 1 {
            return Err(ContentError::FeaturedTestimonials(featured));
        }
        if let Some(t) = self
            .testimonials
            .items
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::Rating {
                id: t.id,
                rating: t.rating,
            });
        }

        if let Some(column) = self.footer.columns.iter().find(|c| c.links.is_empty()) {
            return Err(ContentError::EmptyFooterColumn(column.heading.clone()));
        }
        if self.app_mockup.members.is_empty() {
            return Err(ContentError::Missing("app mockup members"));
        }
        Ok(())
    }
}

fn check_hero_stats(stats: &[HeroStat]) -> Result<()> {
    if stats.len() != HERO_STAT_COUNT {
        return Err(ContentError::HeroStats {
            expected: HERO_STAT_COUNT,
            actual: stats.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Store
// ============================================================================

/// Owner of the live content document
///
/// Edits go through the store so the hero keeps its fixed stat count.
#[derive(Clone, Debug)]
pub struct ContentStore {
    content: SiteContent,
}

impl ContentStore {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn bundled() -> Result<Self> {
        SiteContent::bundled().map(Self::new)
    }

    pub fn get_all_content(&self) -> &SiteContent {
        &self.content
    }

    /// Replace the hero stats; anything but exactly three is rejected
    /// and leaves the current stats in place
    pub fn update_hero_stats(&mut self, stats: Vec<HeroStat>) -> Result<()> {
        check_hero_stats(&stats)?;
        self.content.hero.stats = stats;
        tracing::debug!("ContentStore: hero stats updated");
        Ok(())
    }

    /// Replace the testimonials (any number, including none)
    pub fn update_testimonials(&mut self, items: Vec<Testimonial>) {
        tracing::debug!("ContentStore: {} testimonials", items.len());
        self.content.testimonials.items = items;
    }

    /// Export the document as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> SiteContent {
        SiteContent::bundled().unwrap()
    }

    #[test]
    fn test_site_meta() {
        let content = bundled();
        assert_eq!(content.site.name, "Talangin");
        assert!(!content.site.tagline.is_empty());
        assert!(content.site.description.len() > 20);
        assert_eq!(content.site.url, "https://talangin.app");
        assert!(content.site.social_links.contains_key("twitter"));
    }

    #[test]
    fn test_navigation_points_at_sections() {
        let nav = bundled().navigation;
        assert_eq!(nav.links.len(), 3);
        assert!(nav.links.iter().all(|link| link.href.starts_with('#')));
        assert_eq!(nav.cta.href, "#download");
    }

    #[test]
    fn test_hero() {
        let hero = bundled().hero;
        assert_eq!(hero.stats.len(), HERO_STAT_COUNT);
        assert_eq!(hero.stats[0], HeroStat::new("50K+", "Active Users"));
        assert_eq!(hero.title.highlight, "elegance");
        assert_eq!(hero.cta.secondary.href, "#how-it-works");
    }

    #[test]
    fn test_features_have_unique_ids() {
        let features = bundled().features;
        assert!(features.items.len() >= 6);
        let ids: FxHashSet<_> = features.items.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), features.items.len());
        assert!(features.items.iter().all(|f| !f.icon.is_empty()));
    }

    #[test]
    fn test_three_numbered_steps() {
        let steps = bundled().how_it_works.steps;
        let numbers: Vec<_> = steps.iter().map(|s| s.number.as_str()).collect();
        assert_eq!(numbers, ["01", "02", "03"]);
    }

    #[test]
    fn test_testimonials() {
        let testimonials = bundled().testimonials;
        assert!(testimonials.items.len() >= 3);
        let featured: Vec<_> = testimonials.items.iter().filter(|t| t.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].author, "Michael T.");
        assert!(testimonials.items.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_cta_and_footer() {
        let content = bundled();
        assert_eq!(content.cta.app_store.store, "App Store");
        assert!(content.footer.columns.len() >= 3);
        assert!(content.footer.columns.iter().all(|c| !c.links.is_empty()));
        assert!(content.footer.copyright.contains("Talangin"));
    }

    #[test]
    fn test_app_mockup() {
        let mockup = bundled().app_mockup;
        assert_eq!(mockup.header.title, "Trip to Bali");
        assert!(mockup.members.len() >= 3);
        assert_eq!(mockup.members[0].balance, Balance::Positive);
        assert_eq!(mockup.members[2].balance, Balance::Neutral);
    }

    #[test]
    fn test_validation_rejects_broken_documents() {
        let mut content = bundled();
        content.features.items[1].id = content.features.items[0].id.clone();
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateFeature(id)) if id == "realtime"
        ));

        let mut content = bundled();
        content.how_it_works.steps.swap(0, 1);
        assert!(matches!(
            content.validate(),
            Err(ContentError::StepNumber { position: 1, .. })
        ));

        let mut content = bundled();
        content.testimonials.items[0].featured = true;
        assert!(matches!(
            content.validate(),
            Err(ContentError::FeaturedTestimonials(2))
        ));

        let mut content = bundled();
        content.navigation.links[0].href = "/features".to_string();
        assert!(matches!(
            content.validate(),
            Err(ContentError::NavigationLink(_))
        ));

        let mut content = bundled();
        content.footer.columns[2].links.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptyFooterColumn(heading)) if heading == "Legal"
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = SiteContent::from_toml_str("[site]\nname = 3").unwrap_err();
        assert!(matches!(err, ContentError::Parse { what: "site content", .. }));
    }

    #[test]
    fn test_update_hero_stats_requires_three() {
        let mut store = ContentStore::bundled().unwrap();
        let before = store.get_all_content().hero.stats.clone();

        let err = store
            .update_hero_stats(vec![HeroStat::new("1", "a"), HeroStat::new("2", "b")])
            .unwrap_err();
        assert!(matches!(err, ContentError::HeroStats { expected: 3, actual: 2 }));
        assert_eq!(store.get_all_content().hero.stats, before);

        let stats = vec![
            HeroStat::new("100K+", "Active Users"),
            HeroStat::new("$5M+", "Bills Split"),
            HeroStat::new("5.0★", "App Store"),
        ];
        store.update_hero_stats(stats.clone()).unwrap();
        assert_eq!(store.get_all_content().hero.stats, stats);
    }

    #[test]
    fn test_update_testimonials_accepts_any_list() {
        let mut store = ContentStore::bundled().unwrap();
        store.update_testimonials(Vec::new());
        assert!(store.get_all_content().testimonials.items.is_empty());
    }

    #[test]
    fn test_json_export() {
        let store = ContentStore::bundled().unwrap();
        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        assert_eq!(json["site"]["name"], "Talangin");
        assert_eq!(json["hero"]["stats"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["app_mockup"]["members"][1]["balance"], "negative");
    }
}
