//! Tween scheduler
//!
//! Owns every running tween and advances them on each frame. The scheduler
//! never touches the page; it returns the property writes the host should
//! apply and the tweens that completed so callers can run follow-up work.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use talangin_core::{NodeId, PropertySet};

use crate::easing::Easing;
use crate::tween::{Tween, TweenFrame, TweenMode, TweenSpec};

new_key_type! {
    /// Handle to a scheduled tween
    pub struct TweenId;
}

/// Defaults applied to tweens that don't set their own duration or easing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenDefaults {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for TweenDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            easing: Easing::EaseOutCubic,
        }
    }
}

/// A property write produced by the scheduler
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyWrite {
    pub target: NodeId,
    pub props: PropertySet,
}

/// A tween that reached its end during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completed {
    pub id: TweenId,
    pub target: NodeId,
}

/// Output of [`TweenScheduler::tick`]
#[derive(Clone, Debug, Default)]
pub struct TickOutput {
    pub writes: Vec<PropertyWrite>,
    pub completed: SmallVec<[Completed; 4]>,
}

impl TickOutput {
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.completed.is_empty()
    }
}

/// Schedules and advances tweens
#[derive(Debug, Default)]
pub struct TweenScheduler {
    tweens: SlotMap<TweenId, Tween>,
    defaults: TweenDefaults,
    pending: Vec<PropertyWrite>,
}

impl TweenScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: TweenDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn defaults(&self) -> TweenDefaults {
        self.defaults
    }

    pub fn set_defaults(&mut self, defaults: TweenDefaults) {
        self.defaults = defaults;
    }

    /// Schedule a tween
    ///
    /// `current` is the target's present visual state. A `From` tween
    /// renders its start values right away; they show up in the next
    /// [`take_writes`](Self::take_writes) or [`tick`](Self::tick).
    pub fn add(&mut self, spec: TweenSpec, current: &PropertySet) -> TweenId {
        let duration_ms = spec.duration_ms.unwrap_or(self.defaults.duration_ms);
        let easing = spec.easing.unwrap_or(self.defaults.easing);
        let resting = current.snapshot(&spec.props);
        let (start, end) = match spec.mode {
            TweenMode::To => (resting, spec.props),
            TweenMode::From => {
                self.pending.push(PropertyWrite {
                    target: spec.target,
                    props: spec.props,
                });
                (spec.props, resting)
            }
        };
        let id = self.tweens.insert(Tween::new(
            spec.target,
            start,
            end,
            duration_ms,
            spec.delay_ms,
            easing,
        ));
        tracing::trace!(
            "TweenScheduler: added {:?} on {:?} ({}ms, delay {}ms)",
            id,
            spec.target,
            duration_ms,
            spec.delay_ms
        );
        id
    }

    /// Drain writes produced outside of a tick
    pub fn take_writes(&mut self) -> Vec<PropertyWrite> {
        std::mem::take(&mut self.pending)
    }

    /// Advance every tween by `dt_ms`
    pub fn tick(&mut self, dt_ms: f32) -> TickOutput {
        let mut out = TickOutput {
            writes: self.take_writes(),
            completed: SmallVec::new(),
        };
        for (id, tween) in self.tweens.iter_mut() {
            match tween.tick(dt_ms) {
                TweenFrame::Waiting => {}
                TweenFrame::Running(props) => out.writes.push(PropertyWrite {
                    target: tween.target,
                    props,
                }),
                TweenFrame::Finished(props) => {
                    out.writes.push(PropertyWrite {
                        target: tween.target,
                        props,
                    });
                    out.completed.push(Completed {
                        id,
                        target: tween.target,
                    });
                }
            }
        }
        for done in &out.completed {
            self.tweens.remove(done.id);
        }
        out
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    pub fn kill(&mut self, id: TweenId) -> bool {
        self.tweens.remove(id).is_some()
    }

    /// Stop every tween on `target`; returns how many were stopped
    pub fn kill_tweens_of(&mut self, target: NodeId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|_, tween| tween.target != target);
        before - self.tweens.len()
    }

    pub fn kill_all(&mut self) -> usize {
        let count = self.tweens.len();
        self.tweens.clear();
        self.pending.clear();
        if count > 0 {
            tracing::debug!("TweenScheduler: killed {} tweens", count);
        }
        count
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}
