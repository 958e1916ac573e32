//! Spring-driven glide animation
//!
//! RK4-integrated spring used for programmatic moves: gliding the position
//! to a preset or an arbitrary target. Unlike [`crate::Momentum`], a spring
//! always converges on an explicit target, so it never needs boundary
//! handling of its own as long as the target is in bounds.
//!
//! Values are percentages along an axis, so the settle epsilons are tuned
//! an order of magnitude tighter than they would be for pixel offsets.

/// Stiffness/damping/mass tuple for a spring glide
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Quick, barely-overshooting glide (default for preset jumps)
    pub fn glide() -> Self {
        Self {
            stiffness: 300.0,
            damping: 28.0,
            mass: 1.0,
        }
    }

    /// Soft glide with visible overshoot
    pub fn gentle() -> Self {
        Self {
            stiffness: 140.0,
            damping: 14.0,
            mass: 1.0,
        }
    }

    /// Near-instant response for small corrections
    pub fn snappy() -> Self {
        Self {
            stiffness: 550.0,
            damping: 38.0,
            mass: 1.0,
        }
    }

    /// Critical damping for this stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Whether the spring will overshoot its target
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::glide()
    }
}

/// A spring animating a scalar value toward a target
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Create a spring that inherits velocity from an interrupted motion
    pub fn with_velocity(config: SpringConfig, initial: f32, velocity: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget mid-flight; current value and velocity carry over
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Whether the spring has effectively reached its target
    pub fn is_settled(&self) -> bool {
        // Percent units: 0.05% of travel and 0.5%/s residual velocity are
        // both invisible.
        const EPSILON: f32 = 0.05;
        const VELOCITY_EPSILON: f32 = 0.5;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Advance the simulation by `dt` seconds using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::glide(), 20.0);
        spring.set_target(75.0);

        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 75.0).abs() < 0.1);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_inherited_velocity_carries_through() {
        let mut spring = Spring::with_velocity(SpringConfig::glide(), 50.0, 120.0);
        spring.set_target(50.0);

        spring.step(1.0 / 60.0);
        // Momentum handed off to the spring pushes past the target first
        assert!(spring.value() > 50.0);

        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_stable_under_coarse_steps() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(100.0);

        for _ in 0..100 {
            spring.step(0.05);
            assert!(spring.value().is_finite());
            assert!(spring.value() > -100.0 && spring.value() < 300.0);
        }
    }

    #[test]
    fn test_glide_preset_is_underdamped() {
        assert!(SpringConfig::glide().is_underdamped());
        assert!(SpringConfig::gentle().is_underdamped());
    }
}
