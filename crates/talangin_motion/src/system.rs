//! Motion system
//!
//! Owns everything animated on a page: the gate, the engine (when the host
//! can animate), the entrance driver and the supplementary effects. The app
//! forwards scroll, frame, resize and pointer notifications here.

use serde::{Deserialize, Serialize};
use talangin_animation::TimingConfig;
use talangin_core::NodeId;
use talangin_platform::{Document, Window};

use crate::adapter::AnimationAdapter;
use crate::effects::Effects;
use crate::engine::{MotionEngine, TriggerAction};
use crate::entrance::{EntranceConfig, EntranceDriver};
use crate::gate::MotionPreference;

/// Motion configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub timing: TimingConfig,
    pub entrance: EntranceConfig,
}

#[derive(Debug)]
pub struct MotionSystem {
    preference: MotionPreference,
    engine: Option<MotionEngine>,
    entrance: EntranceDriver,
    effects: Effects,
    torn_down: bool,
}

impl MotionSystem {
    /// Set up motion for the page
    ///
    /// Without animation capabilities every animatable element is shown as
    /// is and nothing else runs.
    pub fn init<H: Document + Window + ?Sized>(host: &mut H, config: &MotionConfig) -> Self {
        let preference = MotionPreference::detect(&*host);
        let adapter = AnimationAdapter::probe(&*host);
        let mut entrance = EntranceDriver::new(config.entrance.clone());

        let Some(mut engine) = adapter.engine(&config.timing) else {
            let elements = entrance.collect(&*host);
            adapter.force_visible(host, &elements, &config.entrance.animated_class);
            tracing::warn!("motion disabled; {} elements forced visible", elements.len());
            return Self {
                preference,
                engine: None,
                entrance,
                effects: Effects::default(),
                torn_down: false,
            };
        };

        entrance.run(host, &mut engine, preference);
        let effects = Effects::install(host, &mut engine, preference);

        let mut system = Self {
            preference,
            engine: Some(engine),
            entrance,
            effects,
            torn_down: false,
        };
        // Elements already past their trigger line play right away
        system.on_scroll(host);
        tracing::debug!(
            "MotionSystem: reduced={}, {} triggers armed",
            preference.should_reduce_motion(),
            system.engine.as_ref().map_or(0, MotionEngine::pending_triggers)
        );
        system
    }

    pub fn preference(&self) -> MotionPreference {
        self.preference
    }

    /// The capability fallback is in effect
    pub fn is_fallback(&self) -> bool {
        self.engine.is_none()
    }

    pub fn engine(&self) -> Option<&MotionEngine> {
        self.engine.as_ref()
    }

    pub fn entrance(&self) -> &EntranceDriver {
        &self.entrance
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Whether frames are still needed
    pub fn is_animating(&self) -> bool {
        self.engine.as_ref().is_some_and(MotionEngine::is_animating)
    }

    /// Evaluate triggers against the current scroll position
    pub fn on_scroll<H: Document + Window + ?Sized>(&mut self, host: &mut H) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        for fired in engine.update(host) {
            match fired.action {
                TriggerAction::Reveal => self.entrance.reveal(host, engine, fired.target),
                _ => {
                    self.effects.on_trigger(host, engine, fired);
                }
            }
        }
    }

    /// Advance running animations
    pub fn tick<D: Document + ?Sized>(&mut self, doc: &mut D, dt_ms: f32) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        let completed = engine.tick(doc, dt_ms);
        self.entrance.on_completed(doc, &completed);
    }

    /// Re-measure triggers after layout changed
    pub fn refresh<H: Document + Window + ?Sized>(&mut self, host: &mut H) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        self.effects.refresh(host, engine);
        engine.refresh(&*host);
        tracing::debug!("MotionSystem: refreshed {} triggers", engine.pending_triggers());
        self.on_scroll(host);
    }

    pub fn pointer_enter<D: Document + ?Sized>(&mut self, doc: &mut D, target: NodeId) -> bool {
        match self.engine.as_mut() {
            Some(engine) => self.effects.pointer_enter(doc, engine, target),
            None => false,
        }
    }

    pub fn pointer_leave<D: Document + ?Sized>(&mut self, doc: &mut D, target: NodeId) -> bool {
        match self.engine.as_mut() {
            Some(engine) => self.effects.pointer_leave(doc, engine, target),
            None => false,
        }
    }

    /// Disarm every trigger; nothing fires afterwards
    pub fn teardown(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            let killed = engine.kill_triggers();
            tracing::debug!("MotionSystem: teardown disarmed {} triggers", killed);
        }
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
