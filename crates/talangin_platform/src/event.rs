//! Page events

use talangin_core::NodeId;

use crate::input::KeyboardEvent;

/// Events a host delivers to the page runtime
///
/// Frame ticks are not events; hosts call the runtime's `tick` directly.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// All page resources (images, fonts) finished loading
    Load,
    /// The page scrolled; the new position is read from the `Window`
    Scroll,
    /// The viewport was resized
    Resized {
        /// New inner width in CSS pixels
        width: f32,
        /// New inner height in CSS pixels
        height: f32,
    },
    /// An element was clicked
    Click {
        /// Innermost clicked element
        target: NodeId,
    },
    /// A key was pressed
    Key {
        /// Focused element, if any
        target: Option<NodeId>,
        /// The key press
        event: KeyboardEvent,
    },
    /// The pointer entered an element
    PointerEnter {
        target: NodeId,
    },
    /// The pointer left an element
    PointerLeave {
        target: NodeId,
    },
    /// The system color scheme preference changed
    ColorSchemeChanged {
        prefers_dark: bool,
    },
    /// An uncaught script error
    ScriptError {
        message: String,
    },
    /// A promise rejection nobody handled
    UnhandledRejection {
        reason: String,
    },
}

/// What the host should do with the event after the runtime handled it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventResponse {
    /// Let the default action happen
    #[default]
    Continue,
    /// Suppress the default action (`preventDefault()`)
    PreventDefault,
}

impl EventResponse {
    /// Combine two responses; prevention wins
    pub fn or(self, other: EventResponse) -> EventResponse {
        if self == EventResponse::PreventDefault || other == EventResponse::PreventDefault {
            EventResponse::PreventDefault
        } else {
            EventResponse::Continue
        }
    }

    pub fn is_prevented(&self) -> bool {
        *self == EventResponse::PreventDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_response_default() {
        assert_eq!(EventResponse::default(), EventResponse::Continue);
    }

    #[test]
    fn test_prevention_wins() {
        assert!(EventResponse::Continue
            .or(EventResponse::PreventDefault)
            .is_prevented());
        assert!(!EventResponse::Continue.or(EventResponse::Continue).is_prevented());
    }
}
