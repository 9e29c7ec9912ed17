//! Talangin Animation
//!
//! Time and scroll driven animation primitives:
//!
//! - [`Easing`] curves, parsed from names like `power2.out`
//! - [`TimingConfig`], the table of named durations, eases and staggers
//! - [`TweenScheduler`], which advances property tweens frame by frame
//! - [`TriggerRegistry`], which fires actions when elements scroll into view
//! - [`ScrubTrack`], which ties a property range to scroll progress
//!
//! Nothing in this crate touches the page. Schedulers and registries
//! return the writes and events; the motion layer applies them.

pub mod easing;
pub mod scheduler;
pub mod scrub;
pub mod stagger;
pub mod timing;
pub mod trigger;
pub mod tween;

pub use easing::{Easing, ParseEasingError};
pub use scheduler::{Completed, PropertyWrite, TickOutput, TweenDefaults, TweenId, TweenScheduler};
pub use scrub::ScrubTrack;
pub use stagger::Stagger;
pub use timing::{DurationToken, EaseToken, StaggerToken, TimingConfig};
pub use trigger::{Anchor, Edge, TriggerEvent, TriggerId, TriggerMode, TriggerRegistry, TriggerSpec};
pub use tween::{TweenMode, TweenSpec};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::scheduler::{TweenId, TweenScheduler};
    pub use crate::timing::{DurationToken, EaseToken, TimingConfig};
    pub use crate::trigger::{Anchor, Edge, TriggerRegistry, TriggerSpec};
    pub use crate::tween::TweenSpec;
}
