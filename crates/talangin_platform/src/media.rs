//! Media queries and host capabilities

/// Media queries the runtime evaluates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    /// `(prefers-reduced-motion: reduce)`
    PrefersReducedMotion,
    /// `(prefers-color-scheme: dark)`
    PrefersDarkScheme,
}

impl MediaQuery {
    /// CSS media query text
    pub fn as_css(&self) -> &'static str {
        match self {
            MediaQuery::PrefersReducedMotion => "(prefers-reduced-motion: reduce)",
            MediaQuery::PrefersDarkScheme => "(prefers-color-scheme: dark)",
        }
    }
}

/// How `Window::scroll_to` should move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately
    #[default]
    Instant,
    /// Animate natively
    Smooth,
}

/// Animation features available on the host
///
/// Tweens need per-frame callbacks and entrance triggers need viewport
/// observation; both must be present for motion to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// The host delivers frame ticks (`requestAnimationFrame`)
    pub animation_frames: bool,
    /// The host reports scroll and element geometry
    pub viewport_observation: bool,
}

impl Capabilities {
    /// Everything available
    pub const fn full() -> Self {
        Self {
            animation_frames: true,
            viewport_observation: true,
        }
    }

    /// Nothing available
    pub const fn none() -> Self {
        Self {
            animation_frames: false,
            viewport_observation: false,
        }
    }

    /// Check if motion can run on this host
    pub fn supports_motion(&self) -> bool {
        self.animation_frames && self.viewport_observation
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
