//! Property tweens
//!
//! A tween interpolates one element's [`PropertySet`] over time. `To`
//! tweens run from the element's current values toward the given values;
//! `From` tweens jump to the given values and run back to where the element
//! was.

use talangin_core::{NodeId, PropertySet};

use crate::easing::Easing;

/// Which end of the tween the given properties describe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TweenMode {
    /// Properties are the end state
    #[default]
    To,
    /// Properties are the start state; the end is the element's current state
    From,
}

/// Description of a tween before it is scheduled
#[derive(Clone, Debug, PartialEq)]
pub struct TweenSpec {
    pub target: NodeId,
    pub props: PropertySet,
    pub mode: TweenMode,
    /// `None` uses the scheduler default
    pub duration_ms: Option<u32>,
    pub delay_ms: u32,
    /// `None` uses the scheduler default
    pub easing: Option<Easing>,
}

impl TweenSpec {
    /// Animate `target` toward `props`
    pub fn to(target: NodeId, props: PropertySet) -> Self {
        Self {
            target,
            props,
            mode: TweenMode::To,
            duration_ms: None,
            delay_ms: 0,
            easing: None,
        }
    }

    /// Animate `target` from `props` back to its current state
    pub fn from_props(target: NodeId, props: PropertySet) -> Self {
        Self {
            mode: TweenMode::From,
            ..Self::to(target, props)
        }
    }

    pub fn duration(mut self, ms: u32) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Result of advancing a tween
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TweenFrame {
    /// Still inside its delay
    Waiting,
    /// Running; carries the interpolated values
    Running(PropertySet),
    /// Reached its end; carries the exact end values
    Finished(PropertySet),
}

/// A scheduled tween with resolved endpoints
#[derive(Clone, Debug)]
pub(crate) struct Tween {
    pub(crate) target: NodeId,
    start: PropertySet,
    end: PropertySet,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
}

impl Tween {
    pub(crate) fn new(
        target: NodeId,
        start: PropertySet,
        end: PropertySet,
        duration_ms: u32,
        delay_ms: u32,
        easing: Easing,
    ) -> Self {
        Self {
            target,
            start,
            end,
            duration_ms: duration_ms as f32,
            delay_ms: delay_ms as f32,
            easing,
            elapsed_ms: 0.0,
        }
    }

    pub(crate) fn tick(&mut self, dt_ms: f32) -> TweenFrame {
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms < self.delay_ms {
            return TweenFrame::Waiting;
        }
        let local = self.elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return TweenFrame::Finished(self.end);
        }
        let t = self.easing.apply(local / self.duration_ms);
        TweenFrame::Running(self.start.lerp(&self.end, t))
    }
}
