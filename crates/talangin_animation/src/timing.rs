//! Timing tokens
//!
//! The page's motion vocabulary: three durations, three eases and three
//! stagger steps. Every effect refers to tokens rather than raw numbers so
//! the whole table can be retuned from configuration.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Named duration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DurationToken {
    Fast,
    Normal,
    Slow,
}

/// Named easing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseToken {
    Smooth,
    Bounce,
    Expo,
}

/// Named stagger step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaggerToken {
    Small,
    Medium,
    Large,
}

/// Durations in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Durations {
    pub fast_ms: u32,
    pub normal_ms: u32,
    pub slow_ms: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            fast_ms: 400,
            normal_ms: 600,
            slow_ms: 800,
        }
    }
}

/// Easing curves
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Eases {
    pub smooth: Easing,
    pub bounce: Easing,
    pub expo: Easing,
}

impl Default for Eases {
    fn default() -> Self {
        Self {
            smooth: Easing::EaseOutCubic,
            bounce: Easing::EaseOutBack(1.7),
            expo: Easing::EaseOutExpo,
        }
    }
}

/// Stagger steps in milliseconds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Staggers {
    pub small_ms: u32,
    pub medium_ms: u32,
    pub large_ms: u32,
}

impl Default for Staggers {
    fn default() -> Self {
        Self {
            small_ms: 100,
            medium_ms: 150,
            large_ms: 200,
        }
    }
}

/// The full timing table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub duration: Durations,
    pub ease: Eases,
    pub stagger: Staggers,
}

impl TimingConfig {
    pub fn duration_ms(&self, token: DurationToken) -> u32 {
        match token {
            DurationToken::Fast => self.duration.fast_ms,
            DurationToken::Normal => self.duration.normal_ms,
            DurationToken::Slow => self.duration.slow_ms,
        }
    }

    pub fn ease(&self, token: EaseToken) -> Easing {
        match token {
            EaseToken::Smooth => self.ease.smooth,
            EaseToken::Bounce => self.ease.bounce,
            EaseToken::Expo => self.ease.expo,
        }
    }

    pub fn stagger_ms(&self, token: StaggerToken) -> u32 {
        match token {
            StaggerToken::Small => self.stagger.small_ms,
            StaggerToken::Medium => self.stagger.medium_ms,
            StaggerToken::Large => self.stagger.large_ms,
        }
    }
}
