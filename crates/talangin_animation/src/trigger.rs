//! Viewport triggers
//!
//! A trigger watches where an element sits relative to the viewport and
//! reports when scrolling crosses its start line. Positions are computed
//! once at registration and again on [`TriggerRegistry::refresh`], so
//! layout is only read when the caller asks for it.

use slotmap::{new_key_type, SlotMap};
use talangin_core::{NodeId, Rect};

new_key_type! {
    /// Handle to a registered trigger
    pub struct TriggerId;
}

/// Reference line on the element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

impl Edge {
    fn of(self, rect: Rect) -> f32 {
        match self {
            Edge::Top => rect.top(),
            Edge::Center => rect.top() + rect.height() / 2.0,
            Edge::Bottom => rect.bottom(),
        }
    }
}

/// Where an element edge must meet the viewport
///
/// `Anchor::new(Edge::Top, 0.85)` is met when the element's top edge
/// reaches 85% of the viewport height, measured from the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub edge: Edge,
    /// Fraction of the viewport height (0.0 = top, 1.0 = bottom)
    pub viewport: f32,
}

impl Anchor {
    pub const fn new(edge: Edge, viewport: f32) -> Self {
        Self { edge, viewport }
    }

    /// Scroll offset at which this anchor is met
    ///
    /// `rect` is in document coordinates.
    pub fn scroll_position(&self, rect: Rect, viewport_height: f32) -> f32 {
        self.edge.of(rect) - self.viewport * viewport_height
    }
}

/// How a trigger reports
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    /// Fire once when the start line is reached, then retire
    Enter,
    /// Report progress between the start and `end` lines
    Scrub { end: Anchor },
}

/// Description of a trigger before registration
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerSpec<A> {
    pub target: NodeId,
    pub start: Anchor,
    pub mode: TriggerMode,
    pub action: A,
}

impl<A> TriggerSpec<A> {
    /// Fire `action` the first time `target` reaches `start`
    pub fn once(target: NodeId, start: Anchor, action: A) -> Self {
        Self {
            target,
            start,
            mode: TriggerMode::Enter,
            action,
        }
    }

    /// Report scroll progress of `target` between `start` and `end`
    pub fn scrub(target: NodeId, start: Anchor, end: Anchor, action: A) -> Self {
        Self {
            target,
            start,
            mode: TriggerMode::Scrub { end },
            action,
        }
    }
}

/// Something a trigger reported during [`TriggerRegistry::update`]
#[derive(Clone, Debug, PartialEq)]
pub enum TriggerEvent<A> {
    Enter {
        id: TriggerId,
        target: NodeId,
        action: A,
    },
    Progress {
        id: TriggerId,
        target: NodeId,
        action: A,
        /// 0.0 at the start line, 1.0 at the end line
        progress: f32,
    },
}

#[derive(Clone, Debug)]
struct Trigger<A> {
    spec: TriggerSpec<A>,
    start: f32,
    end: f32,
    progress: Option<f32>,
}

impl<A> Trigger<A> {
    fn measure(&mut self, rect: Rect, viewport_height: f32) {
        self.start = self.spec.start.scroll_position(rect, viewport_height);
        self.end = match self.spec.mode {
            TriggerMode::Scrub { end } => end.scroll_position(rect, viewport_height),
            TriggerMode::Enter => self.start,
        };
    }

    fn progress_at(&self, scroll_y: f32) -> f32 {
        if self.end <= self.start {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// All live triggers of a page
#[derive(Debug)]
pub struct TriggerRegistry<A> {
    triggers: SlotMap<TriggerId, Trigger<A>>,
}

impl<A> Default for TriggerRegistry<A> {
    fn default() -> Self {
        Self {
            triggers: SlotMap::with_key(),
        }
    }
}

impl<A: Clone> TriggerRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger
    ///
    /// `rect` is the target's box in document coordinates. Nothing fires
    /// until the next [`update`](Self::update).
    pub fn register(&mut self, spec: TriggerSpec<A>, rect: Rect, viewport_height: f32) -> TriggerId {
        let mut trigger = Trigger {
            spec,
            start: 0.0,
            end: 0.0,
            progress: None,
        };
        trigger.measure(rect, viewport_height);
        self.triggers.insert(trigger)
    }

    /// Evaluate every trigger at `scroll_y`
    pub fn update(&mut self, scroll_y: f32) -> Vec<TriggerEvent<A>> {
        let mut events = Vec::new();
        let mut spent = Vec::new();
        for (id, trigger) in self.triggers.iter_mut() {
            match trigger.spec.mode {
                TriggerMode::Enter => {
                    if scroll_y >= trigger.start {
                        events.push(TriggerEvent::Enter {
                            id,
                            target: trigger.spec.target,
                            action: trigger.spec.action.clone(),
                        });
                        spent.push(id);
                    }
                }
                TriggerMode::Scrub { .. } => {
                    let progress = trigger.progress_at(scroll_y);
                    if trigger.progress != Some(progress) {
                        trigger.progress = Some(progress);
                        events.push(TriggerEvent::Progress {
                            id,
                            target: trigger.spec.target,
                            action: trigger.spec.action.clone(),
                            progress,
                        });
                    }
                }
            }
        }
        for id in spent {
            self.triggers.remove(id);
        }
        events
    }

    /// Recompute trigger positions after a layout change
    ///
    /// `measure` returns the target's document-space box, or `None` when
    /// the element can no longer be measured; those keep their old lines.
    pub fn refresh<F>(&mut self, viewport_height: f32, mut measure: F)
    where
        F: FnMut(NodeId) -> Option<Rect>,
    {
        for (_, trigger) in self.triggers.iter_mut() {
            if let Some(rect) = measure(trigger.spec.target) {
                trigger.measure(rect, viewport_height);
            }
        }
    }

    /// Scroll offset where the trigger starts
    pub fn start_position(&self, id: TriggerId) -> Option<f32> {
        self.triggers.get(id).map(|t| t.start)
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.triggers.contains_key(id)
    }

    pub fn kill(&mut self, id: TriggerId) -> bool {
        self.triggers.remove(id).is_some()
    }

    pub fn kill_all(&mut self) -> usize {
        let count = self.triggers.len();
        self.triggers.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
