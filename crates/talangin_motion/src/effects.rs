//! Supplementary scroll and hover effects
//!
//! Decoration layered on top of the entrance animations. Each effect looks
//! up its own elements and silently skips itself when they are missing.
//! Under reduced motion only the screenshot carousel is set up, and it
//! stays paused.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use talangin_animation::{Anchor, Edge, Stagger, TriggerSpec, TweenSpec};
use talangin_core::{NodeId, PropertySet};
use talangin_platform::{Document, Selector, Window};

use crate::engine::{Fired, MotionEngine, ScrubId, TriggerAction};
use crate::gate::MotionPreference;

// ============================================================================
// Markup
// ============================================================================

const HERO: &str = "hero";
const HERO_GRADIENT: &str = "hero__gradient";
const HERO_PHONE: &str = "hero__phone-frame";
const HERO_TITLE_WORD: &str = "hero__title-highlight";
const SCROLL_PROGRESS: &str = "scroll-progress";
const FEATURE_CARD: &str = "feature-card";
const FEATURE_ICON: &str = "feature-card__icon";
const STEP: &str = "step";
const STEP_VISUAL: &str = "step__visual";
const STEP_CARD: &str = "step__card";
const TESTIMONIALS: &str = "testimonials";
const TESTIMONIAL_CARD: &str = "testimonial-card";
const CTA: &str = "cta";
const CTA_CHECK: &str = "cta__check";
const CAROUSEL_TRACK: &str = "screenshots__track";
const CAROUSEL_ITEM: &str = "screenshots__item";

const PLAY_STATE: &str = "animation-play-state";

/// Gradient `index` drifts by a tenth of the viewport per layer
fn gradient_shift(viewport_height: f32, index: usize) -> f32 {
    viewport_height * 0.1 * (index + 1) as f32
}

fn first_within<D: Document + ?Sized>(doc: &D, scope: NodeId, class: &str) -> Option<NodeId> {
    doc.query_within(scope, &Selector::class(class)).into_iter().next()
}

#[derive(Debug, Default)]
pub struct Effects {
    reduced: bool,
    /// Feature card -> its icon
    hover_icons: FxHashMap<NodeId, NodeId>,
    carousel: Option<NodeId>,
    gradients: SmallVec<[(ScrubId, usize); 4]>,
}

impl Effects {
    /// Set up every effect the page has elements for
    pub fn install<H: Document + Window + ?Sized>(
        host: &mut H,
        engine: &mut MotionEngine,
        preference: MotionPreference,
    ) -> Self {
        let mut effects = Self {
            reduced: preference.should_reduce_motion(),
            ..Self::default()
        };
        if !effects.reduced {
            effects.install_parallax(&*host, engine);
            install_scroll_progress(host, engine);
            effects.install_hover(&*host);
            install_step_cards(&*host, engine);
            install_testimonials(&*host, engine);
            install_cta(&*host, engine);
            install_title_words(host, engine);
        }
        effects.install_carousel(host);
        effects
    }

    fn install_parallax<H: Document + Window + ?Sized>(&mut self, host: &H, engine: &mut MotionEngine) {
        let Some(hero) = host.query(&Selector::class(HERO)) else {
            tracing::debug!("Effects: no hero, parallax skipped");
            return;
        };
        let start = Anchor::new(Edge::Top, 0.0);
        let end = Anchor::new(Edge::Bottom, 0.0);
        let viewport_height = host.inner_height();

        for (index, gradient) in host.query_all(&Selector::class(HERO_GRADIENT)).into_iter().enumerate() {
            let to = PropertySet::new().y(gradient_shift(viewport_height, index));
            let id = engine.scrub(host, gradient, hero, start, end, to, 0);
            self.gradients.push((id, index));
        }

        if let Some(phone) = host.query(&Selector::class(HERO_PHONE)) {
            engine.scrub(host, phone, hero, start, end, PropertySet::new().y(50.0), 1000);
        }
    }

    fn install_hover<D: Document + ?Sized>(&mut self, doc: &D) {
        for card in doc.query_all(&Selector::class(FEATURE_CARD)) {
            if let Some(icon) = first_within(doc, card, FEATURE_ICON) {
                self.hover_icons.insert(card, icon);
            }
        }
    }

    fn install_carousel<D: Document + ?Sized>(&mut self, doc: &mut D) {
        let Some(track) = doc.query(&Selector::class(CAROUSEL_TRACK)) else {
            return;
        };
        let items = doc.query_within(track, &Selector::class(CAROUSEL_ITEM));
        if items.is_empty() {
            return;
        }
        for item in items {
            if let Some(clone) = doc.clone_node(item) {
                doc.set_attribute(clone, "aria-hidden", "true");
                doc.append_child(track, clone);
            }
        }
        if self.reduced {
            doc.set_style(track, PLAY_STATE, "paused");
        }
        self.carousel = Some(track);
    }

    /// Run the effect behind a fired trigger; `false` if it isn't an effect
    pub fn on_trigger<D: Document + ?Sized>(&mut self, doc: &mut D, engine: &mut MotionEngine, fired: Fired) -> bool {
        let timing = engine.timing().clone();
        match fired.action {
            TriggerAction::StepCard { card, index } => {
                let tilt = if index % 2 == 0 { -5.0 } else { 5.0 };
                engine.tween(
                    doc,
                    TweenSpec::from_props(card, PropertySet::new().opacity(0.0).y(30.0).rotation(tilt))
                        .duration(timing.duration.slow_ms)
                        .delay(300)
                        .ease(timing.ease.expo),
                );
            }
            TriggerAction::Testimonials => {
                let cards = doc.query_all(&Selector::class(TESTIMONIAL_CARD));
                let stagger = Stagger::new(timing.stagger.medium_ms);
                for (index, card) in cards.into_iter().enumerate() {
                    engine.tween(
                        doc,
                        TweenSpec::from_props(card, PropertySet::new().opacity(0.0).y(40.0))
                            .duration(timing.duration.normal_ms)
                            .delay(stagger.delay_for_index(index))
                            .ease(timing.ease.smooth),
                    );
                }
            }
            TriggerAction::CtaCheck { check } => {
                engine.tween(
                    doc,
                    TweenSpec::from_props(check, PropertySet::new().scale(0.0).rotation(-180.0))
                        .duration(timing.duration.slow_ms)
                        .ease(timing.ease.bounce),
                );
            }
            TriggerAction::Reveal | TriggerAction::Scrub(_) => return false,
        }
        true
    }

    /// Pointer entered `target`; returns whether an effect reacted
    pub fn pointer_enter<D: Document + ?Sized>(&mut self, doc: &mut D, engine: &mut MotionEngine, target: NodeId) -> bool {
        if let Some(&icon) = self.hover_icons.get(&target) {
            let timing = engine.timing().clone();
            engine.kill_tweens_of(icon);
            engine.tween(
                doc,
                TweenSpec::to(icon, PropertySet::new().scale(1.1).rotation(5.0))
                    .duration(timing.duration.fast_ms)
                    .ease(timing.ease.bounce),
            );
            return true;
        }
        if self.carousel == Some(target) {
            doc.set_style(target, PLAY_STATE, "paused");
            return true;
        }
        false
    }

    /// Pointer left `target`; returns whether an effect reacted
    pub fn pointer_leave<D: Document + ?Sized>(&mut self, doc: &mut D, engine: &mut MotionEngine, target: NodeId) -> bool {
        if let Some(&icon) = self.hover_icons.get(&target) {
            let timing = engine.timing().clone();
            engine.kill_tweens_of(icon);
            engine.tween(
                doc,
                TweenSpec::to(icon, PropertySet::new().scale(1.0).rotation(0.0))
                    .duration(timing.duration.fast_ms)
                    .ease(timing.ease.smooth),
            );
            return true;
        }
        if self.carousel == Some(target) {
            if !self.reduced {
                doc.set_style(target, PLAY_STATE, "running");
            }
            return true;
        }
        false
    }

    /// Follow a viewport size change
    pub fn refresh<H: Document + Window + ?Sized>(&mut self, host: &mut H, engine: &mut MotionEngine) {
        let viewport_height = host.inner_height();
        for &(id, index) in &self.gradients {
            let to = PropertySet::new().y(gradient_shift(viewport_height, index));
            if let (Some(props), Some(target)) = (engine.retarget_scrub(id, to), engine.scrub_target(id)) {
                host.set_visual(target, &props);
            }
        }
    }

    pub fn hover_cards(&self) -> usize {
        self.hover_icons.len()
    }

    pub fn carousel(&self) -> Option<NodeId> {
        self.carousel
    }
}

fn install_scroll_progress<H: Document + Window + ?Sized>(host: &mut H, engine: &mut MotionEngine) {
    let body = host.body();
    let bar = match host.query(&Selector::class(SCROLL_PROGRESS)) {
        Some(bar) => bar,
        None => {
            let bar = host.create_element("div");
            host.add_class(bar, SCROLL_PROGRESS);
            host.append_child(body, bar);
            bar
        }
    };
    engine.scrub(
        &*host,
        bar,
        body,
        Anchor::new(Edge::Top, 0.0),
        Anchor::new(Edge::Bottom, 1.0),
        PropertySet::new().width(100.0),
        300,
    );
}

fn install_step_cards<H: Document + Window + ?Sized>(host: &H, engine: &mut MotionEngine) {
    for (index, step) in host.query_all(&Selector::class(STEP)).into_iter().enumerate() {
        let visual = first_within(host, step, STEP_VISUAL);
        let (Some(_), Some(card)) = (visual, first_within(host, step, STEP_CARD)) else {
            continue;
        };
        engine.watch(
            host,
            TriggerSpec::once(step, Anchor::new(Edge::Top, 0.7), TriggerAction::StepCard { card, index }),
        );
    }
}

fn install_testimonials<H: Document + Window + ?Sized>(host: &H, engine: &mut MotionEngine) {
    if let Some(section) = host.query(&Selector::class(TESTIMONIALS)) {
        engine.watch(
            host,
            TriggerSpec::once(section, Anchor::new(Edge::Top, 0.7), TriggerAction::Testimonials),
        );
    }
}

fn install_cta<H: Document + Window + ?Sized>(host: &H, engine: &mut MotionEngine) {
    let check = host.query(&Selector::class(CTA_CHECK));
    let section = host.query(&Selector::class(CTA));
    if let (Some(check), Some(section)) = (check, section) {
        engine.watch(
            host,
            TriggerSpec::once(section, Anchor::new(Edge::Top, 0.6), TriggerAction::CtaCheck { check }),
        );
    }
}

fn install_title_words<D: Document + ?Sized>(doc: &mut D, engine: &mut MotionEngine) {
    let timing = engine.timing().clone();
    for word in doc.query_all(&Selector::class(HERO_TITLE_WORD)) {
        engine.tween(
            doc,
            TweenSpec::from_props(word, PropertySet::new().opacity(0.0).y(20.0))
                .duration(timing.duration.normal_ms)
                .delay(800)
                .ease(timing.ease.expo),
        );
    }
}
