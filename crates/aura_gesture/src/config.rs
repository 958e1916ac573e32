//! Controller configuration with validation and normalization
//!
//! Every knob has a default tuned for feel rather than derived from a
//! physical model, so all of them are overridable. Out-of-range values are
//! reported by `validate()`; `normalized()` repairs them with a logged
//! warning so a bad config degrades instead of panicking mid-gesture.

use std::time::Duration;

use thiserror::Error;

use crate::position::{Axis, Bounds};
use crate::snap::Presets;

/// Configuration errors surfaced by [`ControllerConfig::validate`]
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("bounds are invalid: min {min} must be finite and below max {max}")]
    InvalidBounds { min: f32, max: f32 },

    #[error("snap threshold {0} must be non-negative and finite")]
    InvalidSnapThreshold(f32),

    #[error("friction {0} must be in (0, 1)")]
    InvalidFriction(f32),

    #[error("bounce damping {0} must be in [0, 1)")]
    InvalidBounceDamping(f32),

    #[error("momentum multiplier {0} must be non-negative and finite")]
    InvalidMomentumMultiplier(f32),

    #[error("initial position {position} lies outside bounds [{min}, {max}]")]
    InitialPositionOutOfBounds { position: f32, min: f32, max: f32 },
}

/// Configuration for a position controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Position before any interaction
    pub initial_position: f32,
    /// Inclusive position bounds
    pub bounds: Bounds,
    /// Snap targets (empty set disables snapping)
    pub presets: Presets,
    /// Maximum distance at which a position snaps onto a preset
    pub snap_threshold: f32,
    /// Whether a release with enough velocity coasts
    pub momentum_enabled: bool,
    /// Scale applied to the tracked release velocity
    pub momentum_multiplier: f32,
    /// Minimum scaled release velocity that starts a coast
    pub momentum_threshold: f32,
    /// Per-frame friction coefficient during the coast
    pub friction: f32,
    /// Velocity scale applied when bouncing off a boundary
    pub bounce_damping: f32,
    /// Coast velocity below which the animation settles
    pub stop_threshold: f32,
    /// Debounce window for position-change notifications
    pub debounce_window: Duration,
    /// Position delta for a single arrow-key press
    pub keyboard_step: f32,
    /// Axis the controller tracks
    pub axis: Axis,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_position: 50.0,
            bounds: Bounds::default(),
            presets: Presets::quarters(),
            snap_threshold: 5.0,
            momentum_enabled: true,
            momentum_multiplier: 0.3,
            momentum_threshold: 0.1,
            friction: 0.95,
            bounce_damping: 0.3,
            stop_threshold: 0.1,
            debounce_window: Duration::from_millis(16),
            keyboard_step: 1.0,
            axis: Axis::Horizontal,
        }
    }
}

impl ControllerConfig {
    /// Config without momentum: releases resolve snap immediately
    pub fn no_momentum() -> Self {
        Self {
            momentum_enabled: false,
            ..Default::default()
        }
    }

    /// Config without snapping
    pub fn free() -> Self {
        Self {
            presets: Presets::none(),
            ..Default::default()
        }
    }

    /// Check every field without modifying anything
    ///
    /// Reports the first offending field. `normalized()` is the forgiving
    /// counterpart for callers that prefer repair over rejection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bounds.is_valid() {
            return Err(ConfigError::InvalidBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            return Err(ConfigError::InvalidSnapThreshold(self.snap_threshold));
        }
        if !self.friction.is_finite() || self.friction <= 0.0 || self.friction >= 1.0 {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !self.bounce_damping.is_finite()
            || self.bounce_damping < 0.0
            || self.bounce_damping >= 1.0
        {
            return Err(ConfigError::InvalidBounceDamping(self.bounce_damping));
        }
        if !self.momentum_multiplier.is_finite() || self.momentum_multiplier < 0.0 {
            return Err(ConfigError::InvalidMomentumMultiplier(
                self.momentum_multiplier,
            ));
        }
        if !self.bounds.contains(self.initial_position) {
            return Err(ConfigError::InitialPositionOutOfBounds {
                position: self.initial_position,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        Ok(())
    }

    /// Repair out-of-range fields to safe defaults, logging each repair
    ///
    /// Guarantees the result passes `validate()`, so interaction-time code
    /// never has to re-check configuration.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        if !self.bounds.is_valid() {
            tracing::warn!(
                min = self.bounds.min,
                max = self.bounds.max,
                "invalid bounds, falling back to [0, 100]"
            );
            self.bounds = defaults.bounds;
        }
        if !self.snap_threshold.is_finite() || self.snap_threshold < 0.0 {
            tracing::warn!(
                threshold = self.snap_threshold,
                "invalid snap threshold, using {}",
                defaults.snap_threshold
            );
            self.snap_threshold = defaults.snap_threshold;
        }
        if !self.friction.is_finite() || self.friction <= 0.0 || self.friction >= 1.0 {
            tracing::warn!(
                friction = self.friction,
                "friction outside (0, 1), using {}",
                defaults.friction
            );
            self.friction = defaults.friction;
        }
        if !self.bounce_damping.is_finite()
            || self.bounce_damping < 0.0
            || self.bounce_damping >= 1.0
        {
            tracing::warn!(
                damping = self.bounce_damping,
                "bounce damping outside [0, 1), using {}",
                defaults.bounce_damping
            );
            self.bounce_damping = defaults.bounce_damping;
        }
        if !self.momentum_multiplier.is_finite() || self.momentum_multiplier < 0.0 {
            tracing::warn!(
                multiplier = self.momentum_multiplier,
                "invalid momentum multiplier, using {}",
                defaults.momentum_multiplier
            );
            self.momentum_multiplier = defaults.momentum_multiplier;
        }
        if !self.momentum_threshold.is_finite() || self.momentum_threshold < 0.0 {
            self.momentum_threshold = defaults.momentum_threshold;
        }
        if !self.stop_threshold.is_finite() || self.stop_threshold <= 0.0 {
            self.stop_threshold = defaults.stop_threshold;
        }
        if !self.keyboard_step.is_finite() || self.keyboard_step <= 0.0 {
            self.keyboard_step = defaults.keyboard_step;
        }
        if !self.bounds.contains(self.initial_position) {
            let clamped = self.bounds.clamp(self.initial_position);
            tracing::warn!(
                position = self.initial_position,
                clamped,
                "initial position out of bounds, clamping"
            );
            self.initial_position = if self.initial_position.is_finite() {
                clamped
            } else {
                self.bounds.min + self.bounds.span() * 0.5
            };
        }

        self
    }
}
