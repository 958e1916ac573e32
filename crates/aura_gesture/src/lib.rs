//! AuraKinetic Gesture Controller
//!
//! Pointer-driven position control for slider-like surfaces: drag tracking
//! with velocity estimation, inertial momentum with edge bounce, preset
//! snapping, and keyboard stepping, all behind a small state machine that a
//! host drives with raw input events and a per-frame `tick(dt)`.
//!
//! # Example
//!
//! ```rust
//! use aura_gesture::prelude::*;
//!
//! let mut controller = SlideController::new(ControllerConfig::default());
//! controller.set_container(ContainerGeometry::new(0.0, 0.0, 400.0, 40.0));
//!
//! controller.on_position_change(|position| println!("position {position:.1}"));
//! controller.on_snap_to_preset(|preset| println!("snapped to {preset}"));
//!
//! controller.pointer_down(200.0, 20.0, 0);
//! controller.pointer_move(260.0, 20.0, 48);
//! controller.pointer_up(48);
//! while controller.tick(1.0 / 60.0) {}
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod position;
pub mod snap;
pub mod state;
pub mod velocity;

// Controller surface
pub use controller::{ListenerId, SharedSlideController, SlideController};

// Configuration
pub use config::{ConfigError, ControllerConfig};

// Geometry and position mapping
pub use position::{Axis, Bounds, ContainerGeometry, PositionModel};

// Preset snapping
pub use snap::Presets;

// Gesture state machine
pub use state::{gesture_events, ControllerState};

// Velocity estimation
pub use velocity::{GestureSample, VelocityTracker};

// Debounced notification plumbing
pub use debounce::{Clock, Debouncer, MonotonicClock};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::{ConfigError, ControllerConfig};
    pub use crate::controller::{ListenerId, SharedSlideController, SlideController};
    pub use crate::position::{Axis, Bounds, ContainerGeometry};
    pub use crate::snap::Presets;
    pub use crate::state::ControllerState;
    // Re-exported animators for hosts that tune physics directly
    pub use aura_animation::{MomentumConfig, SpringConfig};
    // Raw input event types
    pub use aura_input::{InputEvent, Key, KeyboardEvent, PointerEvent, PointerPhase};
}
