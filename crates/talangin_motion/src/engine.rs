//! Motion engine
//!
//! Couples the tween scheduler, the trigger registry and scroll-linked
//! tracks to a page. The engine applies property writes itself and hands
//! trigger actions and tween completions back to its owner.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use talangin_animation::{
    Anchor, Completed, ScrubTrack, TimingConfig, TriggerEvent, TriggerId, TriggerRegistry,
    TriggerSpec, TweenDefaults, TweenId, TweenScheduler, TweenSpec,
};
use talangin_core::{NodeId, PropertySet, Rect};
use talangin_platform::{Document, Window};

new_key_type! {
    /// Handle to a scroll-linked track
    pub struct ScrubId;
}

/// What to do when a trigger reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    /// Play the entrance animation of the trigger's element
    Reveal,
    /// Drive a scroll-linked track
    Scrub(ScrubId),
    /// Bring in the card of a how-it-works step
    StepCard { card: NodeId, index: usize },
    /// Stagger in the testimonial cards
    Testimonials,
    /// Pop in the call-to-action check mark
    CtaCheck { check: NodeId },
}

/// A one-shot trigger that fired
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub target: NodeId,
    pub action: TriggerAction,
}

/// Document-space box of `node`
pub(crate) fn document_rect<H: Document + Window + ?Sized>(host: &H, node: NodeId) -> Rect {
    host.bounding_rect(node).offset_y(host.scroll_y())
}

#[derive(Debug)]
pub struct MotionEngine {
    timing: TimingConfig,
    tweens: TweenScheduler,
    triggers: TriggerRegistry<TriggerAction>,
    scrubs: SlotMap<ScrubId, ScrubTrack>,
}

impl MotionEngine {
    /// Create an engine whose tweens default to `duration.normal` and
    /// `ease.smooth`
    pub fn new(timing: TimingConfig) -> Self {
        let defaults = TweenDefaults {
            duration_ms: timing.duration.normal_ms,
            easing: timing.ease.smooth,
        };
        Self {
            timing,
            tweens: TweenScheduler::with_defaults(defaults),
            triggers: TriggerRegistry::new(),
            scrubs: SlotMap::with_key(),
        }
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn tween_defaults(&self) -> TweenDefaults {
        self.tweens.defaults()
    }

    /// Start a tween on the page
    pub fn tween<D: Document + ?Sized>(&mut self, doc: &mut D, spec: TweenSpec) -> TweenId {
        let current = doc.visual(spec.target);
        let id = self.tweens.add(spec, &current);
        for write in self.tweens.take_writes() {
            doc.set_visual(write.target, &write.props);
        }
        id
    }

    /// Stop all tweens on `node`, leaving it where it is
    pub fn kill_tweens_of(&mut self, node: NodeId) -> usize {
        self.tweens.kill_tweens_of(node)
    }

    /// Register a trigger measured against the page's current layout
    pub fn watch<H: Document + Window + ?Sized>(
        &mut self,
        host: &H,
        spec: TriggerSpec<TriggerAction>,
    ) -> TriggerId {
        let rect = document_rect(host, spec.target);
        self.triggers.register(spec, rect, host.inner_height())
    }

    /// Link `target`'s properties to the scroll position of `trigger`
    ///
    /// The track runs from `target`'s current values to `to` as the page
    /// scrolls from `start` to `end`.
    #[allow(clippy::too_many_arguments)]
    pub fn scrub<H: Document + Window + ?Sized>(
        &mut self,
        host: &H,
        target: NodeId,
        trigger: NodeId,
        start: Anchor,
        end: Anchor,
        to: PropertySet,
        smoothing_ms: u32,
    ) -> ScrubId {
        let from = host.visual(target).snapshot(&to);
        let id = self
            .scrubs
            .insert(ScrubTrack::new(target, from, to, smoothing_ms));
        self.watch(
            host,
            TriggerSpec::scrub(trigger, start, end, TriggerAction::Scrub(id)),
        );
        id
    }

    /// Change where a track ends, keeping its progress
    pub fn retarget_scrub(&mut self, id: ScrubId, to: PropertySet) -> Option<PropertySet> {
        let track = self.scrubs.get_mut(id)?;
        track.set_end(to);
        Some(track.value())
    }

    pub fn scrub_target(&self, id: ScrubId) -> Option<NodeId> {
        self.scrubs.get(id).map(|track| track.target)
    }

    /// Evaluate triggers at the page's scroll position
    ///
    /// Scroll-linked tracks are updated in place; fired one-shot triggers
    /// are returned.
    pub fn update<H: Document + Window + ?Sized>(&mut self, host: &mut H) -> SmallVec<[Fired; 4]> {
        let mut fired = SmallVec::new();
        for event in self.triggers.update(host.scroll_y()) {
            match event {
                TriggerEvent::Enter { target, action, .. } => fired.push(Fired { target, action }),
                TriggerEvent::Progress {
                    action: TriggerAction::Scrub(id),
                    progress,
                    ..
                } => {
                    if let Some(track) = self.scrubs.get_mut(id) {
                        if let Some(props) = track.set_progress(progress) {
                            host.set_visual(track.target, &props);
                        }
                    }
                }
                TriggerEvent::Progress { .. } => {}
            }
        }
        fired
    }

    /// Advance tweens and smoothed tracks by `dt_ms`
    pub fn tick<D: Document + ?Sized>(&mut self, doc: &mut D, dt_ms: f32) -> SmallVec<[Completed; 4]> {
        let out = self.tweens.tick(dt_ms);
        for write in &out.writes {
            doc.set_visual(write.target, &write.props);
        }
        for (_, track) in self.scrubs.iter_mut() {
            if let Some(props) = track.tick(dt_ms) {
                doc.set_visual(track.target, &props);
            }
        }
        out.completed
    }

    /// Re-measure every live trigger against the current layout
    pub fn refresh<H: Document + Window + ?Sized>(&mut self, host: &H) {
        let viewport_height = host.inner_height();
        self.triggers
            .refresh(viewport_height, |node| Some(document_rect(host, node)));
    }

    /// Whether any tween or smoothed track still needs frames
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty() || self.scrubs.iter().any(|(_, track)| !track.is_settled())
    }

    pub fn pending_triggers(&self) -> usize {
        self.triggers.len()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn scrub_count(&self) -> usize {
        self.scrubs.len()
    }

    /// Disarm every trigger and drop scroll-linked tracks
    ///
    /// Running tweens play out.
    pub fn kill_triggers(&mut self) -> usize {
        self.scrubs.clear();
        self.triggers.kill_all()
    }
}
