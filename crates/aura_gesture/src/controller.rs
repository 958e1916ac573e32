//! Pointer-driven position controller
//!
//! Orchestrates the velocity tracker, position model, snap resolver, and
//! momentum animator through the drag lifecycle, and owns the listener
//! registry through which hosts observe position changes, snaps, and
//! gesture bookends.
//!
//! # Example
//!
//! ```rust
//! use aura_gesture::prelude::*;
//!
//! let mut controller = SlideController::new(ControllerConfig::default());
//! controller.set_container(ContainerGeometry::new(0.0, 0.0, 400.0, 40.0));
//! controller.on_position_change(|position| println!("at {position:.1}%"));
//!
//! controller.pointer_down(200.0, 20.0, 0);
//! controller.pointer_move(300.0, 20.0, 120);
//! controller.pointer_up(120);
//!
//! // Drive frames while anything is animating
//! while controller.tick(1.0 / 60.0) {}
//! ```

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use aura_animation::{Momentum, MomentumConfig, Spring, SpringConfig};
use aura_input::{event_types, InputEvent, Key, PointerEvent, PointerPhase};
use slotmap::{new_key_type, SlotMap};

use crate::config::ControllerConfig;
use crate::debounce::{Clock, Debouncer, MonotonicClock};
use crate::position::{Axis, ContainerGeometry, PositionModel};
use crate::state::{gesture_events, ControllerState};
use crate::velocity::VelocityTracker;

new_key_type! {
    /// Handle to a registered listener
    pub struct ListenerId;
}

/// Registered listener callbacks
enum Listener {
    PositionChange(Box<dyn Fn(f32) + Send + Sync>),
    SnapToPreset(Box<dyn Fn(f32) + Send + Sync>),
    DragStart(Box<dyn Fn() + Send + Sync>),
    DragEnd(Box<dyn Fn() + Send + Sync>),
}

/// Shared handle to a controller for event-loop hosts
pub type SharedSlideController = Arc<Mutex<SlideController>>;

/// A single-axis position controller driven by pointer and keyboard input
///
/// The exposed position always stays within the configured bounds; state
/// transitions are the only mutation path, and at most one animation
/// (momentum coast or spring glide) runs at a time.
pub struct SlideController {
    config: ControllerConfig,
    state: ControllerState,
    model: PositionModel,
    tracker: VelocityTracker,
    geometry: ContainerGeometry,
    clock: Arc<dyn Clock>,
    debouncer: Debouncer<f32>,
    animator: Option<Momentum>,
    glide: Option<Spring>,
    listeners: SlotMap<ListenerId, Listener>,
    /// Tracked drag velocity in position units per millisecond
    drag_velocity: f32,
    /// Guards the exactly-once snap notification per gesture
    snap_emitted: bool,
}

impl SlideController {
    /// Create a controller with a monotonic wall clock
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    /// Create a controller with an injected clock (tests, replay hosts)
    pub fn with_clock(config: ControllerConfig, clock: Arc<dyn Clock>) -> Self {
        let config = config.normalized();
        let model = PositionModel::new(config.bounds, config.initial_position);
        let debouncer = Debouncer::new(config.debounce_window);
        let tracker = VelocityTracker::new(config.axis);

        Self {
            state: ControllerState::Idle,
            model,
            tracker,
            geometry: ContainerGeometry::default(),
            clock,
            debouncer,
            animator: None,
            glide: None,
            listeners: SlotMap::with_key(),
            drag_velocity: 0.0,
            snap_emitted: false,
            config,
        }
    }

    /// Create a shared controller for hosts that tick from an event loop
    pub fn shared(config: ControllerConfig) -> SharedSlideController {
        Arc::new(Mutex::new(Self::new(config)))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current position (always within bounds)
    pub fn position(&self) -> f32 {
        self.model.last_valid()
    }

    /// Current interaction state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Effective (normalized) configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Whether a momentum coast or glide needs frames
    pub fn is_animating(&self) -> bool {
        self.animator.is_some() || self.glide.is_some()
    }

    /// Update container placement (call on every layout change)
    pub fn set_container(&mut self, geometry: ContainerGeometry) {
        self.geometry = geometry;
    }

    // =========================================================================
    // Listener registration
    // =========================================================================

    /// Register a position-change listener; fired at most once per frame
    pub fn on_position_change<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.listeners.insert(Listener::PositionChange(Box::new(f)))
    }

    /// Register a snap listener; fired exactly once per gesture that snaps
    pub fn on_snap_to_preset<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.listeners.insert(Listener::SnapToPreset(Box::new(f)))
    }

    /// Register a drag-start listener
    pub fn on_drag_start<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.insert(Listener::DragStart(Box::new(f)))
    }

    /// Register a drag-end listener
    pub fn on_drag_end<F>(&mut self, f: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.insert(Listener::DragEnd(Box::new(f)))
    }

    /// Remove a previously registered listener
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Route a unified input event to the gesture or keyboard path
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(p) => self.handle_pointer(p),
            InputEvent::Keyboard(k) => self.key_input(k.key),
        }
    }

    fn handle_pointer(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.x, event.y, event.t_ms),
            PointerPhase::Move => self.pointer_move(event.x, event.y, event.t_ms),
            PointerPhase::Up => self.pointer_up(event.t_ms),
        }
    }

    /// Begin a drag gesture
    ///
    /// Cancels any in-flight animation before the new gesture takes over;
    /// at most one animation ever runs per controller.
    pub fn pointer_down(&mut self, x: f32, y: f32, t_ms: i64) {
        let Some(next) = self.state.on_event(event_types::POINTER_DOWN) else {
            return;
        };

        self.cancel_animation();
        self.tracker.reset();
        self.tracker.on_sample(x, y, t_ms);
        self.drag_velocity = 0.0;
        self.snap_emitted = false;
        self.debouncer.clear();
        self.state = next;
        self.emit_drag_start();
    }

    /// Track a pointer move during a drag
    pub fn pointer_move(&mut self, x: f32, y: f32, t_ms: i64) {
        if !self.state.is_dragging() {
            return;
        }

        let axis = self.config.axis;
        let coord_velocity = self.tracker.on_sample(x, y, t_ms);

        let size = self.geometry.size(axis);
        if size > 0.0 {
            // Convert pointer units/ms into position units/ms
            self.drag_velocity = coord_velocity * self.config.bounds.span() / size;
        }

        let coord = match axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        };
        let position = self
            .model
            .to_position(coord, self.geometry.origin(axis), size);

        let now = self.clock.now();
        if let Some(emitted) = self.debouncer.push(position, now) {
            self.emit_position(emitted);
        }
    }

    /// End a drag gesture
    ///
    /// Hands off to the momentum animator when the scaled release velocity
    /// clears the momentum threshold, otherwise resolves snap immediately.
    pub fn pointer_up(&mut self, _t_ms: i64) {
        if !self.state.is_dragging() {
            return;
        }

        if let Some(emitted) = self.debouncer.flush() {
            self.emit_position(emitted);
        }
        self.emit_drag_end();

        let release_velocity = self.drag_velocity * self.config.momentum_multiplier;
        let coasts = self.config.momentum_enabled
            && release_velocity.abs() >= self.config.momentum_threshold;

        if coasts {
            self.apply_transition(gesture_events::RELEASE_COAST);
            self.animator = Some(Momentum::new(
                MomentumConfig {
                    friction: self.config.friction,
                    bounce_damping: self.config.bounce_damping,
                    stop_threshold: self.config.stop_threshold,
                },
                self.position(),
                release_velocity,
                self.config.bounds.min,
                self.config.bounds.max,
            ));
        } else {
            self.settle_and_resolve();
        }
    }

    /// Handle a key press (synchronous, never enters Dragging/Settling)
    pub fn key_input(&mut self, key: Key) {
        if self.state.is_dragging() {
            return;
        }

        self.cancel_animation();
        self.snap_emitted = false;

        match key {
            Key::ArrowRight | Key::ArrowUp => self.step_by(self.config.keyboard_step),
            Key::ArrowLeft | Key::ArrowDown => self.step_by(-self.config.keyboard_step),
            Key::Home => self.jump_to(self.config.bounds.min),
            Key::End => self.jump_to(self.config.bounds.max),
            Key::Digit(d) => {
                // Number row: 1..9 select presets 0..8, 0 selects the tenth
                let index = if d == 0 { 9 } else { usize::from(d) - 1 };
                if let Some(preset) = self.config.presets.get(index) {
                    self.jump_to(preset);
                }
            }
        }
    }

    // =========================================================================
    // Programmatic control
    // =========================================================================

    /// Set the position synchronously without snap resolution
    pub fn set_position(&mut self, position: f32) {
        if self.state.is_dragging() {
            return;
        }
        self.cancel_animation();

        let clamped = self.config.bounds.clamp(position);
        if clamped != self.position() {
            self.model.set(clamped);
            self.emit_position(clamped);
        }
        self.apply_transition(gesture_events::SETTLED);
    }

    /// Glide to a target position with a spring animation
    ///
    /// Cancels any in-flight animation first; the glide itself is cancelled
    /// by a new pointer-down exactly like a momentum coast.
    pub fn glide_to(&mut self, target: f32) {
        if self.state.is_dragging() {
            return;
        }
        self.cancel_animation();
        self.snap_emitted = false;

        let mut spring = Spring::new(SpringConfig::glide(), self.position());
        spring.set_target(self.config.bounds.clamp(target));
        self.glide = Some(spring);
        self.apply_transition(gesture_events::GLIDE);
    }

    /// Glide to the preset at `index` (ascending order)
    pub fn glide_to_preset(&mut self, index: usize) {
        if let Some(preset) = self.config.presets.get(index) {
            self.glide_to(preset);
        }
    }

    /// Jump to the preset at `index` synchronously, firing the snap path
    pub fn jump_to_preset(&mut self, index: usize) {
        if self.state.is_dragging() {
            return;
        }
        if let Some(preset) = self.config.presets.get(index) {
            self.cancel_animation();
            self.snap_emitted = false;
            self.jump_to(preset);
        }
    }

    // =========================================================================
    // Frame pump
    // =========================================================================

    /// Advance animations and release debounced notifications
    ///
    /// Returns true while another frame is needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let now = self.clock.now();
        if let Some(emitted) = self.debouncer.poll(now) {
            self.emit_position(emitted);
        }

        if self.animator.is_some() {
            self.tick_momentum(dt);
        } else if self.glide.is_some() {
            self.tick_glide(dt);
        }

        self.is_animating() || self.debouncer.has_pending()
    }

    fn tick_momentum(&mut self, dt: f32) {
        let (position, finished) = match self.animator.as_mut() {
            Some(animator) => {
                let moving = animator.step(dt);
                (animator.position(), !moving)
            }
            None => return,
        };

        self.model.set(position);
        self.emit_position(position);

        if finished {
            self.animator = None;
            self.settle_and_resolve();
        }
    }

    fn tick_glide(&mut self, dt: f32) {
        let (position, finished) = match self.glide.as_mut() {
            Some(spring) => {
                spring.step(dt);
                if spring.is_settled() {
                    // Land exactly on the commanded target
                    (spring.target(), true)
                } else {
                    (spring.value(), false)
                }
            }
            None => return,
        };

        self.model.set(position);
        self.emit_position(position);

        if finished {
            self.glide = None;
            self.settle_and_resolve();
        }
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// The single cancellation point: no two animations may ever coexist
    fn cancel_animation(&mut self) {
        self.animator = None;
        self.glide = None;
    }

    /// Resolve the resting position against the presets and come to rest
    fn settle_and_resolve(&mut self) {
        let position = self.position();
        match self
            .config
            .presets
            .resolve(position, self.config.snap_threshold)
        {
            Some(preset) => {
                if preset != position {
                    self.model.set(preset);
                    self.emit_position(preset);
                }
                self.emit_snap(preset);
                self.apply_transition(gesture_events::SNAPPED);
            }
            None => {
                self.apply_transition(gesture_events::SETTLED);
            }
        }
    }

    /// Keyboard/programmatic jump that resolves snap synchronously
    fn jump_to(&mut self, target: f32) {
        let clamped = self.config.bounds.clamp(target);
        if clamped != self.position() {
            self.model.set(clamped);
            self.emit_position(clamped);
        }
        self.settle_and_resolve();
    }

    /// Arrow-key step: plain position change, never snap-resolved
    fn step_by(&mut self, delta: f32) {
        let next = self.config.bounds.clamp(self.position() + delta);
        if next != self.position() {
            self.model.set(next);
            self.emit_position(next);
        }
        self.apply_transition(gesture_events::SETTLED);
    }

    fn apply_transition(&mut self, event: u32) {
        if let Some(next) = self.state.on_event(event) {
            self.state = next;
        }
    }

    fn emit_position(&self, position: f32) {
        for (_, listener) in &self.listeners {
            if let Listener::PositionChange(f) = listener {
                Self::invoke(|| f(position));
            }
        }
    }

    fn emit_snap(&mut self, preset: f32) {
        if self.snap_emitted {
            return;
        }
        self.snap_emitted = true;
        for (_, listener) in &self.listeners {
            if let Listener::SnapToPreset(f) = listener {
                Self::invoke(|| f(preset));
            }
        }
    }

    fn emit_drag_start(&self) {
        for (_, listener) in &self.listeners {
            if let Listener::DragStart(f) = listener {
                Self::invoke(|| f());
            }
        }
    }

    fn emit_drag_end(&self) {
        for (_, listener) in &self.listeners {
            if let Listener::DragEnd(f) = listener {
                Self::invoke(|| f());
            }
        }
    }

    /// Listener callbacks are caller-supplied; a panicking listener must not
    /// corrupt the state machine, so invocations are isolated and logged.
    fn invoke(f: impl FnOnce()) {
        if catch_unwind(AssertUnwindSafe(f)).is_err() {
            tracing::error!("listener panicked, continuing");
        }
    }
}
