//! Animation capability adapter
//!
//! Checks that the host can drive motion and, if so, builds a configured
//! [`MotionEngine`]. Without the capability every animated element is
//! forced visible instead.

use talangin_animation::TimingConfig;
use talangin_core::{NodeId, PropertySet};
use talangin_platform::{Capabilities, Document, Window};

use crate::engine::MotionEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationAdapter {
    capabilities: Capabilities,
}

impl AnimationAdapter {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }

    /// Probe the host
    pub fn probe<W: Window + ?Sized>(window: &W) -> Self {
        Self::new(window.capabilities())
    }

    /// Frames and viewport observation are both available
    pub fn library_available(&self) -> bool {
        self.capabilities.supports_motion()
    }

    /// Build an engine with the timing table's defaults, if motion is possible
    pub fn engine(&self, timing: &TimingConfig) -> Option<MotionEngine> {
        if !self.library_available() {
            tracing::warn!(
                "animation capabilities unavailable (frames: {}, viewport: {})",
                self.capabilities.animation_frames,
                self.capabilities.viewport_observation
            );
            return None;
        }
        let engine = MotionEngine::new(timing.clone());
        tracing::debug!(
            "AnimationAdapter: defaults {}ms {}",
            engine.tween_defaults().duration_ms,
            engine.tween_defaults().easing
        );
        Some(engine)
    }

    /// Show `elements` fully without animating them
    pub fn force_visible<D: Document + ?Sized>(
        &self,
        doc: &mut D,
        elements: &[NodeId],
        animated_class: &str,
    ) {
        for &node in elements {
            doc.set_visual(node, &PropertySet::visible());
            doc.add_class(node, animated_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talangin_core::Size;
    use talangin_platform::{element, HeadlessPage};

    #[test]
    fn test_partial_capabilities_are_unavailable() {
        let adapter = AnimationAdapter::new(Capabilities {
            animation_frames: true,
            viewport_observation: false,
        });
        assert!(!adapter.library_available());
        assert!(adapter.engine(&TimingConfig::default()).is_none());
        assert!(AnimationAdapter::new(Capabilities::full())
            .engine(&TimingConfig::default())
            .is_some());
    }

    #[test]
    fn test_force_visible() {
        let mut page = HeadlessPage::new(Size::new(1280.0, 800.0));
        let body = page.body();
        let el = page.append(body, element("div").attr("data-animate", "blur-in"));
        page.set_visual(el, &PropertySet::new().opacity(0.0).blur(10.0));

        AnimationAdapter::new(Capabilities::none()).force_visible(&mut page, &[el], "animated");
        assert!(page.visual(el).is_visible_at_rest());
        assert_eq!(page.visual(el).blur, Some(0.0));
        assert!(page.has_class(el, "animated"));
    }
}
