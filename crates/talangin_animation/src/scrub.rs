//! Scroll-linked values
//!
//! A [`ScrubTrack`] maps scroll progress onto a property range. With a
//! smoothing time the displayed value trails the scroll position and
//! catches up over that many milliseconds.

use talangin_core::{NodeId, PropertySet};

#[derive(Clone, Debug, PartialEq)]
pub struct ScrubTrack {
    pub target: NodeId,
    from: PropertySet,
    to: PropertySet,
    smoothing_ms: f32,
    current: f32,
    goal: f32,
}

const SETTLE_EPSILON: f32 = 1e-4;

impl ScrubTrack {
    pub fn new(target: NodeId, from: PropertySet, to: PropertySet, smoothing_ms: u32) -> Self {
        Self {
            target,
            from,
            to,
            smoothing_ms: smoothing_ms as f32,
            current: 0.0,
            goal: 0.0,
        }
    }

    /// Values at the current displayed progress
    pub fn value(&self) -> PropertySet {
        self.from.lerp(&self.to, self.current)
    }

    /// Replace the end values (e.g. after the viewport changed size)
    pub fn set_end(&mut self, to: PropertySet) {
        self.from = self.from.snapshot(&to);
        self.to = to;
    }

    pub fn progress(&self) -> f32 {
        self.current
    }

    /// Set the scroll progress to follow
    ///
    /// Without smoothing the value jumps there and is returned.
    pub fn set_progress(&mut self, progress: f32) -> Option<PropertySet> {
        self.goal = progress.clamp(0.0, 1.0);
        if self.smoothing_ms <= 0.0 {
            self.current = self.goal;
            return Some(self.value());
        }
        None
    }

    pub fn is_settled(&self) -> bool {
        (self.goal - self.current).abs() < SETTLE_EPSILON
    }

    /// Move the displayed value toward the scroll progress
    ///
    /// Returns the new value, or `None` when already settled.
    pub fn tick(&mut self, dt_ms: f32) -> Option<PropertySet> {
        if self.is_settled() {
            return None;
        }
        // Exponential approach that closes ~98% of the gap in smoothing_ms
        let k = 1.0 - (-4.0 * dt_ms.max(0.0) / self.smoothing_ms.max(1.0)).exp();
        self.current += (self.goal - self.current) * k;
        if self.is_settled() {
            self.current = self.goal;
        }
        Some(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsmoothed_track_jumps() {
        let mut track = ScrubTrack::new(
            NodeId::default(),
            PropertySet::new().width(0.0),
            PropertySet::new().width(100.0),
            0,
        );
        assert_eq!(track.set_progress(0.25), Some(PropertySet::new().width(25.0)));
        assert!(track.tick(16.0).is_none());
    }

    #[test]
    fn test_smoothed_track_catches_up() {
        let mut track = ScrubTrack::new(
            NodeId::default(),
            PropertySet::new().y(0.0),
            PropertySet::new().y(50.0),
            1000,
        );
        assert!(track.set_progress(1.0).is_none());
        let first = track.tick(100.0).unwrap().y.unwrap();
        assert!(first > 0.0 && first < 50.0);
        for _ in 0..200 {
            track.tick(16.0);
        }
        assert!(track.is_settled());
        assert_eq!(track.value(), PropertySet::new().y(50.0));
    }
}
