//! Entrance animation kinds
//!
//! Each kind names a hidden starting state and the visible state it
//! settles into. Lookup by name is total: names outside the table get a
//! plain opacity fade.

use talangin_core::PropertySet;

/// Declared entrance animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleUp,
    BlurIn,
    /// Fallback for unrecognized names
    #[default]
    Fade,
}

impl AnimationKind {
    /// Every kind with a dedicated table row
    pub const NAMED: [AnimationKind; 6] = [
        AnimationKind::FadeUp,
        AnimationKind::FadeDown,
        AnimationKind::FadeLeft,
        AnimationKind::FadeRight,
        AnimationKind::ScaleUp,
        AnimationKind::BlurIn,
    ];

    /// Look up a kind by its markup name
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "fade-up" => AnimationKind::FadeUp,
            "fade-down" => AnimationKind::FadeDown,
            "fade-left" => AnimationKind::FadeLeft,
            "fade-right" => AnimationKind::FadeRight,
            "scale-up" => AnimationKind::ScaleUp,
            "blur-in" => AnimationKind::BlurIn,
            _ => AnimationKind::Fade,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::FadeUp => "fade-up",
            AnimationKind::FadeDown => "fade-down",
            AnimationKind::FadeLeft => "fade-left",
            AnimationKind::FadeRight => "fade-right",
            AnimationKind::ScaleUp => "scale-up",
            AnimationKind::BlurIn => "blur-in",
            AnimationKind::Fade => "fade",
        }
    }

    /// Hidden state applied before the element animates
    pub fn initial_state(&self) -> PropertySet {
        let hidden = PropertySet::new().opacity(0.0);
        match self {
            AnimationKind::FadeUp => hidden.y(30.0),
            AnimationKind::FadeDown => hidden.y(-30.0),
            AnimationKind::FadeLeft => hidden.x(50.0),
            AnimationKind::FadeRight => hidden.x(-50.0),
            AnimationKind::ScaleUp => hidden.scale(0.9),
            AnimationKind::BlurIn => hidden.blur(10.0),
            AnimationKind::Fade => hidden,
        }
    }

    /// State the element settles into
    pub fn final_state(&self) -> PropertySet {
        let shown = PropertySet::new().opacity(1.0);
        match self {
            AnimationKind::FadeUp | AnimationKind::FadeDown => shown.y(0.0),
            AnimationKind::FadeLeft | AnimationKind::FadeRight => shown.x(0.0),
            AnimationKind::ScaleUp => shown.scale(1.0),
            AnimationKind::BlurIn => shown.blur(0.0),
            AnimationKind::Fade => shown,
        }
    }
}

/// Hidden state for a kind name
pub fn initial_state_for(kind: &str) -> PropertySet {
    AnimationKind::from_name(kind).initial_state()
}

/// Visible state for a kind name
pub fn final_state_for(kind: &str) -> PropertySet {
    AnimationKind::from_name(kind).final_state()
}
