//! Inertial deceleration with damped edge bounce
//!
//! Simulates the coast phase after a drag release: velocity decays by an
//! exponential friction factor each frame, the position advances with the
//! remaining velocity, and hitting a boundary reverses the velocity scaled
//! by a damping factor so the value visibly rebounds instead of dead-stopping.
//!
//! All decay math is normalized against a 60fps reference frame, so the
//! animation covers the same distance regardless of the host's actual frame
//! rate.

/// Elapsed time per step is capped at 64ms so a backgrounded host that
/// resumes ticking after a long gap does not teleport the position.
const MAX_FRAME_DT: f32 = 0.064;

/// Configuration for momentum decay behavior
#[derive(Debug, Clone, Copy)]
pub struct MomentumConfig {
    /// Per-frame friction coefficient (0.0-1.0, closer to 1.0 = longer coast)
    pub friction: f32,
    /// Velocity scale applied when bouncing off a boundary (0.0-1.0)
    pub bounce_damping: f32,
    /// Velocity magnitude below which the animation settles
    pub stop_threshold: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            friction: 0.95,
            bounce_damping: 0.3,
            stop_threshold: 0.1,
        }
    }
}

impl MomentumConfig {
    /// Create config with a custom friction coefficient
    pub fn with_friction(friction: f32) -> Self {
        Self {
            friction,
            ..Default::default()
        }
    }

    /// Create config that dead-stops at boundaries instead of bouncing
    pub fn no_bounce() -> Self {
        Self {
            bounce_damping: 0.0,
            ..Default::default()
        }
    }
}

/// A decaying-velocity animator bounded to `[min, max]`
///
/// Velocity is expressed in position units per frame at the 60Hz reference
/// rate; positive velocity moves toward `max`.
#[derive(Debug, Clone, Copy)]
pub struct Momentum {
    config: MomentumConfig,
    position: f32,
    velocity: f32,
    min: f32,
    max: f32,
    settled: bool,
}

impl Momentum {
    /// Create an animator coasting from `position` with an initial `velocity`
    pub fn new(config: MomentumConfig, position: f32, velocity: f32, min: f32, max: f32) -> Self {
        let settled = velocity.abs() < config.stop_threshold || !velocity.is_finite();
        Self {
            config,
            position: position.clamp(min, max),
            velocity: if velocity.is_finite() { velocity } else { 0.0 },
            min,
            max,
            settled,
        }
    }

    /// Current position (always within `[min, max]`)
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity (position units per reference frame)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Whether the animation has decayed below the stop threshold
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Returns true while the animation is still moving, false once settled.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.settled {
            return false;
        }

        // Guard against negative dt from a misbehaving host clock; a zero dt
        // is a no-op frame, not an error.
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let frames = dt * 60.0;

        // Exponential decay, normalized so the coast feels identical at
        // 30, 60, or 120fps.
        let friction_factor = self.config.friction.powf(frames);
        self.velocity *= friction_factor;

        let proposed = self.position + self.velocity * frames;

        if proposed > self.max {
            self.position = self.max;
            self.velocity = -self.velocity * self.config.bounce_damping;
        } else if proposed < self.min {
            self.position = self.min;
            self.velocity = -self.velocity * self.config.bounce_damping;
        } else {
            self.position = proposed;
        }

        if self.velocity.abs() < self.config.stop_threshold {
            self.velocity = 0.0;
            self.settled = true;
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_velocity_decays_each_frame() {
        let mut anim = Momentum::new(MomentumConfig::default(), 50.0, 2.0, 0.0, 100.0);

        let v0 = anim.velocity();
        anim.step(DT);
        assert!(anim.velocity() < v0);
        assert!(anim.position() > 50.0);
    }

    #[test]
    fn test_terminates_within_bounded_frames() {
        let mut anim = Momentum::new(MomentumConfig::default(), 50.0, 50.0, 0.0, 100.0);

        let mut frames = 0;
        while anim.step(DT) {
            frames += 1;
            assert!(frames < 1000, "momentum failed to settle");
        }
        assert!(anim.is_settled());
        assert_eq!(anim.velocity(), 0.0);
    }

    #[test]
    fn test_bounce_reverses_and_damps_velocity() {
        let config = MomentumConfig::default();
        let mut anim = Momentum::new(config, 99.0, 5.0, 0.0, 100.0);

        anim.step(DT);
        assert_eq!(anim.position(), 100.0);
        // Rebound: sign flipped, magnitude scaled by bounce_damping
        assert!(anim.velocity() < 0.0);
        assert!(anim.velocity().abs() <= 5.0 * config.bounce_damping);
    }

    #[test]
    fn test_position_never_exceeds_bounds() {
        let mut anim = Momentum::new(MomentumConfig::default(), 90.0, 20.0, 0.0, 100.0);

        while anim.step(DT) {
            assert!(anim.position() >= 0.0);
            assert!(anim.position() <= 100.0);
        }
        assert!(anim.position() <= 100.0);
    }

    #[test]
    fn test_below_threshold_settles_immediately() {
        let mut anim = Momentum::new(MomentumConfig::default(), 50.0, 0.05, 0.0, 100.0);

        assert!(anim.is_settled());
        assert!(!anim.step(DT));
        assert_eq!(anim.position(), 50.0);
    }

    #[test]
    fn test_large_dt_is_capped() {
        let mut anim = Momentum::new(MomentumConfig::default(), 50.0, 2.0, 0.0, 100.0);
        let mut reference = anim;

        // A 500ms gap (tab switch) must advance no further than a 64ms frame
        anim.step(0.5);
        reference.step(MAX_FRAME_DT);
        assert_eq!(anim.position(), reference.position());
    }

    #[test]
    fn test_zero_dt_is_a_noop() {
        let mut anim = Momentum::new(MomentumConfig::default(), 50.0, 2.0, 0.0, 100.0);

        assert!(anim.step(0.0));
        assert_eq!(anim.position(), 50.0);
        assert_eq!(anim.velocity(), 2.0);
    }

    #[test]
    fn test_no_bounce_dead_stops_at_edge() {
        let mut anim = Momentum::new(MomentumConfig::no_bounce(), 99.0, 5.0, 0.0, 100.0);

        anim.step(DT);
        assert_eq!(anim.position(), 100.0);
        // Damping of zero kills the velocity outright
        assert!(anim.is_settled());
    }

    #[test]
    fn test_negative_velocity_bounces_off_min() {
        let mut anim = Momentum::new(MomentumConfig::default(), 1.0, -5.0, 0.0, 100.0);

        anim.step(DT);
        assert_eq!(anim.position(), 0.0);
        assert!(anim.velocity() > 0.0);
    }
}
