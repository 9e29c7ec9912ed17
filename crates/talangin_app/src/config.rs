//! Site configuration
//!
//! Every section is optional in `talangin.toml`; missing values take the
//! defaults the page markup is written against.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use talangin_content::I18nConfig;
use talangin_motion::MotionConfig;
use talangin_theme::ThemeConfig;

/// Page runtime configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub i18n: I18nConfig,
    pub motion: MotionConfig,
    pub navigation: NavigationConfig,
    /// Quiet period after the last resize before layout is re-measured
    pub resize_debounce_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            i18n: I18nConfig::default(),
            motion: MotionConfig::default(),
            navigation: NavigationConfig::default(),
            resize_debounce_ms: 250,
        }
    }
}

/// Navbar, menu and scrolling thresholds (CSS pixels)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll offset past which the navbar is marked scrolled
    pub scrolled_threshold: f32,
    /// Navbar height assumed when it has none
    pub fallback_nav_height: f32,
    /// Viewport width at which the mobile menu closes itself
    pub desktop_min_width: f32,
    /// Distance outside the viewport at which lazy images start loading
    pub lazy_image_margin: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            fallback_nav_height: 72.0,
            desktop_min_width: 768.0,
            lazy_image_margin: 50.0,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("Failed to parse site config")
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&source).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site config")
    }
}
