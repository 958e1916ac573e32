//! Input event types for pointer and keyboard interaction
//!
//! Platform-neutral descriptions of the events a position controller
//! consumes. Hosts translate whatever their windowing layer delivers
//! (winit, web pointer events, test fixtures) into these types; the
//! controller never talks to a platform directly.

/// Lifecycle phase of a pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerPhase {
    /// Pointer pressed, gesture begins
    Down,
    /// Pointer moved while pressed
    #[default]
    Move,
    /// Pointer released, gesture ends
    Up,
}

/// A single pointer event with window-space coordinates
///
/// `t_ms` is a monotonic timestamp in milliseconds. It feeds velocity
/// tracking, so it should come from the platform's event timestamps rather
/// than being re-sampled on delivery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub t_ms: i64,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32, t_ms: i64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
            t_ms,
        }
    }

    pub fn moved(x: f32, y: f32, t_ms: i64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
            t_ms,
        }
    }

    pub fn up(x: f32, y: f32, t_ms: i64) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            y,
            t_ms,
        }
    }
}

/// Keys a position controller reacts to
///
/// Arrow keys step the position; Home/End jump to the bounds; digit keys
/// are preset shortcuts (1 selects the first preset, 0 the tenth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    /// Number row digit, `0..=9`
    Digit(u8),
}

/// Keyboard event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: Key,
}

impl KeyboardEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

/// Input events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer event (mouse or touch, already unified by the host)
    Pointer(PointerEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
}

/// Numeric event identifiers for state machine transition tables
///
/// Interaction state machines match on `(state, event)` pairs; using plain
/// `u32` constants keeps the transition tables free of generic parameters.
pub mod event_types {
    /// Pointer pressed
    pub const POINTER_DOWN: u32 = 1;
    /// Pointer moved while pressed
    pub const POINTER_MOVE: u32 = 2;
    /// Pointer released
    pub const POINTER_UP: u32 = 3;
    /// Key pressed
    pub const KEY_DOWN: u32 = 4;
}

impl PointerEvent {
    /// Numeric event type for transition tables
    pub fn event_type(&self) -> u32 {
        match self.phase {
            PointerPhase::Down => event_types::POINTER_DOWN,
            PointerPhase::Move => event_types::POINTER_MOVE,
            PointerPhase::Up => event_types::POINTER_UP,
        }
    }
}
