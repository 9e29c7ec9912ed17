//! Talangin Motion
//!
//! Entrance animations and scroll effects for the landing page.
//!
//! # Pieces
//!
//! - [`MotionPreference`] - the reduced-motion gate, read once
//! - [`AnimationAdapter`] - capability probe and the forced-visible fallback
//! - [`AnimationKind`] - the kind table (`fade-up`, `scale-up`, ...)
//! - [`EntranceDriver`] - one-shot entrances, hero on load, the rest on scroll
//! - [`Effects`] - parallax, scroll progress, hover, staggered reveals
//! - [`MotionSystem`] - ties the above to a page
//!
//! # Example
//!
//! ```rust
//! use talangin_core::Size;
//! use talangin_motion::{MotionConfig, MotionSystem, EntranceState};
//! use talangin_platform::{element, HeadlessPage, Document};
//!
//! let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
//! let body = page.body();
//! let card = page.append(body, element("div").attr("data-animate", "fade-up").at(2000.0, 200.0));
//!
//! let mut motion = MotionSystem::init(&mut page, &MotionConfig::default());
//! assert_eq!(motion.entrance().state(card), Some(EntranceState::PendingTrigger));
//!
//! page.set_scroll_y(1500.0);
//! motion.on_scroll(&mut page);
//! motion.tick(&mut page, 600.0);
//! assert_eq!(motion.entrance().state(card), Some(EntranceState::Animated));
//! ```

pub mod adapter;
pub mod effects;
pub mod engine;
pub mod entrance;
pub mod gate;
pub mod kind;
pub mod system;

pub use adapter::AnimationAdapter;
pub use effects::Effects;
pub use engine::{Fired, MotionEngine, ScrubId, TriggerAction};
pub use entrance::{
    parse_delay, EntranceConfig, EntranceDriver, EntranceRecord, EntranceState, PlaybackMode,
};
pub use gate::MotionPreference;
pub use kind::{final_state_for, initial_state_for, AnimationKind};
pub use system::{MotionConfig, MotionSystem};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entrance::{EntranceState, PlaybackMode};
    pub use crate::gate::MotionPreference;
    pub use crate::kind::AnimationKind;
    pub use crate::system::{MotionConfig, MotionSystem};
}
