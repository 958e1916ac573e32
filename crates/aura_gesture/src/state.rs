//! Gesture state machine
//!
//! State machine for the drag/coast/snap lifecycle:
//!
//! ```text
//!                POINTER_DOWN
//!     Idle ──────────────────────► Dragging
//!       ▲                             │
//!       │ settled                     │ RELEASE_COAST (velocity above threshold)
//!       │                             ▼
//!       ├──────────────────────── Settling
//!       │                             │
//!       │ snapped                     │ snapped
//!       ▼                             ▼
//!     Snapped ◄───────────────────────┘
//! ```
//!
//! A release without enough velocity (or with momentum disabled) goes from
//! `Dragging` straight to `Idle`/`Snapped` after one snap-resolver pass.
//! Keyboard jumps never enter `Dragging` or `Settling` at all.

use aura_input::event_types;

/// Internal events for gesture settling (not exposed to hosts)
pub mod gesture_events {
    /// Release with enough velocity to coast
    pub const RELEASE_COAST: u32 = 10000;
    /// Motion settled away from any preset
    pub const SETTLED: u32 = 10001;
    /// Motion settled onto a preset
    pub const SNAPPED: u32 = 10002;
    /// Programmatic glide animation started
    pub const GLIDE: u32 = 10003;
}

/// Interaction state of a position controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerState {
    /// No active pointer, position at rest off-preset
    #[default]
    Idle,
    /// Pointer down, position follows the pointer
    Dragging,
    /// Pointer released, momentum or glide animation active
    Settling,
    /// At rest on a preset position
    Snapped,
}

impl ControllerState {
    /// Whether a gesture or animation is in flight
    pub fn is_active(&self) -> bool {
        matches!(self, ControllerState::Dragging | ControllerState::Settling)
    }

    /// Whether the pointer currently owns the position
    pub fn is_dragging(&self) -> bool {
        matches!(self, ControllerState::Dragging)
    }

    /// Whether the position rests on a preset
    pub fn is_snapped(&self) -> bool {
        matches!(self, ControllerState::Snapped)
    }

    /// Handle an event, returning the new state or None if no transition
    pub fn on_event(&self, event: u32) -> Option<Self> {
        use event_types::*;
        use gesture_events::*;

        match (self, event) {
            // Resting states: a new pointer takes over
            (ControllerState::Idle, POINTER_DOWN) => Some(ControllerState::Dragging),
            (ControllerState::Snapped, POINTER_DOWN) => Some(ControllerState::Dragging),

            // A gesture may interrupt an in-flight animation
            (ControllerState::Settling, POINTER_DOWN) => Some(ControllerState::Dragging),

            // Moves keep dragging (no transition)
            (ControllerState::Dragging, POINTER_MOVE) => None,

            // Release with velocity hands off to the animator
            (ControllerState::Dragging, RELEASE_COAST) => Some(ControllerState::Settling),

            // Release (or animator settle) resolves to rest
            (ControllerState::Dragging, SETTLED) => Some(ControllerState::Idle),
            (ControllerState::Dragging, SNAPPED) => Some(ControllerState::Snapped),
            (ControllerState::Settling, SETTLED) => Some(ControllerState::Idle),
            (ControllerState::Settling, SNAPPED) => Some(ControllerState::Snapped),

            // Keyboard jumps resolve rest states against the presets
            (ControllerState::Idle, SNAPPED) => Some(ControllerState::Snapped),
            (ControllerState::Snapped, SETTLED) => Some(ControllerState::Idle),

            // Programmatic glides animate from rest
            (ControllerState::Idle, GLIDE) => Some(ControllerState::Settling),
            (ControllerState::Snapped, GLIDE) => Some(ControllerState::Settling),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_input::event_types::*;
    use gesture_events::*;

    #[test]
    fn test_basic_gesture_cycle() {
        let state = ControllerState::Idle;
        let state = state.on_event(POINTER_DOWN).unwrap();
        assert_eq!(state, ControllerState::Dragging);

        let state = state.on_event(RELEASE_COAST).unwrap();
        assert_eq!(state, ControllerState::Settling);

        let state = state.on_event(SNAPPED).unwrap();
        assert_eq!(state, ControllerState::Snapped);
    }

    #[test]
    fn test_direct_release_without_momentum() {
        let state = ControllerState::Dragging;
        assert_eq!(state.on_event(SETTLED), Some(ControllerState::Idle));
        assert_eq!(state.on_event(SNAPPED), Some(ControllerState::Snapped));
    }

    #[test]
    fn test_new_gesture_interrupts_settling() {
        let state = ControllerState::Settling;
        assert_eq!(state.on_event(POINTER_DOWN), Some(ControllerState::Dragging));
    }

    #[test]
    fn test_moves_do_not_transition() {
        assert_eq!(ControllerState::Dragging.on_event(POINTER_MOVE), None);
        assert_eq!(ControllerState::Idle.on_event(POINTER_MOVE), None);
    }

    #[test]
    fn test_pointer_up_alone_is_not_a_transition() {
        // The controller maps releases onto RELEASE_COAST/SETTLED/SNAPPED
        // depending on velocity; a raw POINTER_UP has no table entry.
        assert_eq!(ControllerState::Dragging.on_event(POINTER_UP), None);
    }

    #[test]
    fn test_activity_flags() {
        assert!(ControllerState::Dragging.is_active());
        assert!(ControllerState::Settling.is_active());
        assert!(!ControllerState::Idle.is_active());
        assert!(!ControllerState::Snapped.is_active());
    }
}
