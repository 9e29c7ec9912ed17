//! Entrance animation driver
//!
//! Every element carrying the kind attribute gets a one-shot entrance.
//! Elements inside the hero play as soon as the driver runs; everything
//! else waits until its top edge scrolls past the viewport threshold.
//!
//! Per element the driver moves through
//! `Unstyled -> InitialSet -> {PendingTrigger -> Animating} | Animating -> Animated`.
//! Reduced motion jumps straight to `Animated`.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use talangin_animation::{Anchor, Completed, Edge, TriggerSpec, TweenId, TweenSpec};
use talangin_core::{NodeId, PropertySet};
use talangin_platform::{Document, Selector, Window};

use crate::engine::{MotionEngine, TriggerAction};
use crate::gate::MotionPreference;
use crate::kind::AnimationKind;

/// Markup and timing knobs of the driver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    /// Class of the region whose elements play on load
    pub hero_class: String,
    /// Attribute holding the animation kind
    pub kind_attribute: String,
    /// Attribute holding the delay in seconds
    pub delay_attribute: String,
    /// Added to the declared delay of hero elements (ms)
    pub hero_base_delay_ms: u32,
    /// Fraction of the viewport height the element top must reach
    pub viewport_threshold: f32,
    /// Class added once an element finished its entrance
    pub animated_class: String,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            hero_class: "hero".to_string(),
            kind_attribute: "data-animate".to_string(),
            delay_attribute: "data-delay".to_string(),
            hero_base_delay_ms: 300,
            viewport_threshold: 0.85,
            animated_class: "animated".to_string(),
        }
    }
}

/// How an element's entrance is played, chosen once per element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Play on start-up
    Immediate,
    /// Play when scrolled into view
    ViewportGated,
    /// Show the final state without animating
    ForcedVisible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceState {
    Unstyled,
    InitialSet,
    PendingTrigger,
    Animating,
    Animated,
}

/// Driver bookkeeping for one element
#[derive(Clone, Debug, PartialEq)]
pub struct EntranceRecord {
    pub kind: AnimationKind,
    pub delay_ms: u32,
    pub mode: PlaybackMode,
    pub state: EntranceState,
}

/// Parse a delay attribute in seconds
///
/// Reads the leading number like `parseFloat` (`"0.2s"` is 0.2). Missing,
/// unparsable, negative and non-finite values are 0.
pub fn parse_delay(value: Option<&str>) -> f32 {
    let Some(text) = value.map(str::trim_start) else {
        return 0.0;
    };
    let prefix_end = text
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find(|&end| text[..end].parse::<f32>().is_ok());
    prefix_end
        .and_then(|end| text[..end].parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

/// Whole milliseconds, clamped to the `u32` range
fn seconds_to_ms(seconds: f32) -> u32 {
    (f64::from(seconds) * 1000.0).round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[derive(Debug, Default)]
pub struct EntranceDriver {
    config: EntranceConfig,
    records: IndexMap<NodeId, EntranceRecord>,
    tweens: FxHashMap<TweenId, NodeId>,
}

impl EntranceDriver {
    pub fn new(config: EntranceConfig) -> Self {
        Self {
            config,
            records: IndexMap::new(),
            tweens: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    /// Selector for animatable elements
    pub fn selector(&self) -> Selector {
        Selector::attr(self.config.kind_attribute.as_str())
    }

    /// Animatable elements in document order
    pub fn collect<D: Document + ?Sized>(&self, doc: &D) -> Vec<NodeId> {
        doc.query_all(&self.selector())
    }

    /// Set up every animatable element on the page
    pub fn run<H: Document + Window + ?Sized>(
        &mut self,
        host: &mut H,
        engine: &mut MotionEngine,
        preference: MotionPreference,
    ) {
        let hero = Selector::class(self.config.hero_class.as_str());
        for node in self.collect(&*host) {
            if self.records.contains_key(&node) {
                continue;
            }
            let kind = host
                .attribute(node, &self.config.kind_attribute)
                .map(|name| AnimationKind::from_name(&name))
                .unwrap_or_default();
            let delay_ms =
                seconds_to_ms(parse_delay(host.attribute(node, &self.config.delay_attribute).as_deref()));

            if preference.should_reduce_motion() {
                host.set_visual(node, &PropertySet::visible());
                host.add_class(node, &self.config.animated_class);
                self.records.insert(
                    node,
                    EntranceRecord {
                        kind,
                        delay_ms,
                        mode: PlaybackMode::ForcedVisible,
                        state: EntranceState::Animated,
                    },
                );
                continue;
            }

            host.set_visual(node, &kind.initial_state());
            let mode = if host.closest(node, &hero).is_some() {
                PlaybackMode::Immediate
            } else {
                PlaybackMode::ViewportGated
            };
            self.records.insert(
                node,
                EntranceRecord {
                    kind,
                    delay_ms,
                    mode,
                    state: EntranceState::InitialSet,
                },
            );

            match mode {
                PlaybackMode::Immediate => self.start(host, engine, node),
                PlaybackMode::ViewportGated => {
                    let start = Anchor::new(Edge::Top, self.config.viewport_threshold);
                    engine.watch(&*host, TriggerSpec::once(node, start, TriggerAction::Reveal));
                    self.set_state(node, EntranceState::PendingTrigger);
                }
                PlaybackMode::ForcedVisible => {}
            }
        }
        tracing::debug!("EntranceDriver: {} elements", self.records.len());
    }

    /// Play the entrance of a viewport-gated element whose trigger fired
    pub fn reveal<D: Document + ?Sized>(&mut self, doc: &mut D, engine: &mut MotionEngine, node: NodeId) {
        if self.state(node) == Some(EntranceState::PendingTrigger) {
            self.start(doc, engine, node);
        }
    }

    fn start<D: Document + ?Sized>(&mut self, doc: &mut D, engine: &mut MotionEngine, node: NodeId) {
        let Some(record) = self.records.get(&node) else {
            return;
        };
        let timing = engine.timing();
        let spec = TweenSpec::to(node, record.kind.final_state());
        let spec = match record.mode {
            PlaybackMode::Immediate => spec
                .duration(timing.duration.slow_ms)
                .delay(record.delay_ms.saturating_add(self.config.hero_base_delay_ms))
                .ease(timing.ease.expo),
            _ => spec
                .duration(timing.duration.normal_ms)
                .delay(record.delay_ms)
                .ease(timing.ease.smooth),
        };
        let id = engine.tween(doc, spec);
        self.tweens.insert(id, node);
        self.set_state(node, EntranceState::Animating);
    }

    /// Mark elements whose entrance tween finished
    pub fn on_completed<D: Document + ?Sized>(&mut self, doc: &mut D, completed: &[Completed]) {
        for done in completed {
            if let Some(node) = self.tweens.remove(&done.id) {
                doc.add_class(node, &self.config.animated_class);
                self.set_state(node, EntranceState::Animated);
            }
        }
    }

    fn set_state(&mut self, node: NodeId, state: EntranceState) {
        if let Some(record) = self.records.get_mut(&node) {
            record.state = state;
        }
    }

    /// State of a tracked element
    pub fn state(&self, node: NodeId) -> Option<EntranceState> {
        self.records.get(&node).map(|r| r.state)
    }

    /// State of any element: animatable elements the driver hasn't set
    /// up yet are `Unstyled`, everything else is `None`
    pub fn state_on<D: Document + ?Sized>(&self, doc: &D, node: NodeId) -> Option<EntranceState> {
        self.state(node).or_else(|| {
            doc.attribute(node, &self.config.kind_attribute)
                .map(|_| EntranceState::Unstyled)
        })
    }

    pub fn record(&self, node: NodeId) -> Option<&EntranceRecord> {
        self.records.get(&node)
    }

    /// Records in document order
    pub fn records(&self) -> impl Iterator<Item = (NodeId, &EntranceRecord)> {
        self.records.iter().map(|(node, record)| (*node, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_animation::TimingConfig;
    use talangin_core::Size;
    use talangin_platform::{element, HeadlessPage};

    fn page() -> HeadlessPage {
        HeadlessPage::new(Size::new(1280.0, 800.0))
    }

    #[test]
    fn test_parse_delay() {
        assert_eq!(parse_delay(None), 0.0);
        assert_eq!(parse_delay(Some("")), 0.0);
        assert_eq!(parse_delay(Some("0.2")), 0.2);
        assert_eq!(parse_delay(Some("0.2s")), 0.2);
        assert_eq!(parse_delay(Some(" 1.5")), 1.5);
        assert_eq!(parse_delay(Some("soon")), 0.0);
        assert_eq!(parse_delay(Some("-1")), 0.0);
        assert_eq!(parse_delay(Some("inf")), 0.0);
        assert_eq!(parse_delay(Some("NaN")), 0.0);
    }

    #[test]
    fn test_hero_element_plays_immediately() {
        let mut page = page();
        let body = page.body();
        let hero = page.append(body, element("section").class("hero").at(0.0, 800.0));
        let phone = page.append(
            hero,
            element("div").attr("data-animate", "scale-up").attr("data-delay", "0"),
        );
        let mut engine = MotionEngine::new(TimingConfig::default());
        let mut driver = EntranceDriver::new(EntranceConfig::default());
        driver.run(&mut page, &mut engine, MotionPreference::full_motion());

        let record = driver.record(phone).unwrap();
        assert_eq!(record.mode, PlaybackMode::Immediate);
        assert_eq!(record.state, EntranceState::Animating);
        assert_eq!(page.visual(phone), PropertySet::new().opacity(0.0).scale(0.9));
        assert_eq!(engine.pending_triggers(), 0);

        // Nothing moves before the 300ms base delay
        engine.tick(&mut page, 299.0);
        assert_eq!(page.visual(phone).opacity, Some(0.0));
        engine.tick(&mut page, 101.0);
        let mid = page.visual(phone).opacity.unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        let done = engine.tick(&mut page, 700.0);
        driver.on_completed(&mut page, &done);
        assert_eq!(driver.state(phone), Some(EntranceState::Animated));
        assert_eq!(page.visual(phone), PropertySet::new().opacity(1.0).scale(1.0));
        assert!(page.has_class(phone, "animated"));
    }

    #[test]
    fn test_hero_delay_adds_to_base_delay() {
        let mut page = page();
        let body = page.body();
        let hero = page.append(body, element("section").class("hero").at(0.0, 800.0));
        let badge = page.append(
            hero,
            element("span").attr("data-animate", "fade-down").attr("data-delay", "0.5"),
        );
        let mut engine = MotionEngine::new(TimingConfig::default());
        let mut driver = EntranceDriver::new(EntranceConfig::default());
        driver.run(&mut page, &mut engine, MotionPreference::full_motion());
        assert_eq!(driver.record(badge).map(|r| r.delay_ms), Some(500));

        // 500ms declared + 300ms base
        engine.tick(&mut page, 799.0);
        assert_eq!(page.visual(badge).opacity, Some(0.0));
        engine.tick(&mut page, 2.0);
        assert!(page.visual(badge).opacity.unwrap() > 0.0);
    }

    #[test]
    fn test_huge_hero_delay_saturates() {
        assert_eq!(seconds_to_ms(5_000_000.0), u32::MAX);
        assert_eq!(seconds_to_ms(0.2), 200);

        let mut page = page();
        let body = page.body();
        let hero = page.append(body, element("section").class("hero").at(0.0, 800.0));
        let late = page.append(
            hero,
            element("div").attr("data-animate", "fade-up").attr("data-delay", "5000000"),
        );
        let mut engine = MotionEngine::new(TimingConfig::default());
        let mut driver = EntranceDriver::new(EntranceConfig::default());
        driver.run(&mut page, &mut engine, MotionPreference::full_motion());
        assert_eq!(driver.record(late).map(|r| r.delay_ms), Some(u32::MAX));

        engine.tick(&mut page, 1000.0);
        assert_eq!(page.visual(late).opacity, Some(0.0));
        assert_eq!(driver.state(late), Some(EntranceState::Animating));
    }

    #[test]
    fn test_gated_element_waits_for_trigger() {
        let mut page = page();
        let body = page.body();
        let card = page.append(
            body,
            element("div")
                .attr("data-animate", "fade-up")
                .attr("data-delay", "0.2")
                .at(2000.0, 200.0),
        );
        let mut engine = MotionEngine::new(TimingConfig::default());
        let mut driver = EntranceDriver::new(EntranceConfig::default());
        driver.run(&mut page, &mut engine, MotionPreference::full_motion());

        assert_eq!(driver.state(card), Some(EntranceState::PendingTrigger));
        assert_eq!(driver.state_on(&page, body), None);
        assert_eq!(page.visual(card), PropertySet::new().opacity(0.0).y(30.0));
        assert_eq!(engine.pending_triggers(), 1);
        assert_eq!(engine.active_tweens(), 0);

        // Reveal ignores elements that are not waiting
        driver.reveal(&mut page, &mut engine, body);
        assert_eq!(engine.active_tweens(), 0);

        driver.reveal(&mut page, &mut engine, card);
        assert_eq!(driver.state(card), Some(EntranceState::Animating));
        driver.reveal(&mut page, &mut engine, card);
        assert_eq!(engine.active_tweens(), 1);
    }

    #[test]
    fn test_reduced_motion_skips_straight_to_animated() {
        let mut page = page();
        let body = page.body();
        let el = page.append(body, element("div").attr("data-animate", "blur-in").at(3000.0, 100.0));
        let mut engine = MotionEngine::new(TimingConfig::default());
        let mut driver = EntranceDriver::new(EntranceConfig::default());
        assert_eq!(driver.state_on(&page, el), Some(EntranceState::Unstyled));
        driver.run(&mut page, &mut engine, MotionPreference::reduced());

        let record = driver.record(el).unwrap();
        assert_eq!(record.mode, PlaybackMode::ForcedVisible);
        assert_eq!(record.state, EntranceState::Animated);
        assert_eq!(page.visual(el).opacity, Some(1.0));
        assert_eq!(page.visual(el).blur, Some(0.0));
        assert!(page.has_class(el, "animated"));
        assert_eq!(engine.pending_triggers(), 0);
        assert_eq!(engine.active_tweens(), 0);
    }

    #[test]
    fn test_config_from_toml() {
        let config: EntranceConfig = toml::from_str(
            r#"
            hero_class = "intro"
            viewport_threshold = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(config.hero_class, "intro");
        assert_eq!(config.viewport_threshold, 0.9);
        assert_eq!(config.hero_base_delay_ms, 300);
        assert_eq!(config.kind_attribute, "data-animate");
    }
}
