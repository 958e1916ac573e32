//! Velocity tracking for drag gestures
//!
//! Samples pointer position and timestamp on every move event and derives
//! the instantaneous velocity on the active axis. The tracker keeps exactly
//! one reference sample; each new sample overwrites it, so nothing is
//! retained beyond the velocity computation.

use crate::position::Axis;

/// A pointer sample with timestamp, overwritten on every event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub x: f32,
    pub y: f32,
    pub t_ms: i64,
}

/// Single-reference velocity tracker
///
/// Velocity is expressed in coordinate units per millisecond, signed along
/// the active axis (positive = increasing coordinate).
#[derive(Debug, Clone, Copy)]
pub struct VelocityTracker {
    axis: Axis,
    last: Option<GestureSample>,
    velocity: f32,
}

impl VelocityTracker {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            last: None,
            velocity: 0.0,
        }
    }

    /// Record a sample and return the velocity since the previous sample
    ///
    /// The first sample after a reset has no reference and yields 0. A zero
    /// or negative time delta (non-monotonic platform clock) keeps the
    /// previously computed velocity rather than dividing by zero.
    pub fn on_sample(&mut self, x: f32, y: f32, t_ms: i64) -> f32 {
        let sample = GestureSample { x, y, t_ms };

        if let Some(prev) = self.last {
            let dt = sample.t_ms - prev.t_ms;
            if dt <= 0 {
                tracing::trace!(dt, "non-monotonic sample, reusing velocity");
                self.last = Some(sample);
                return self.velocity;
            }

            let delta = match self.axis {
                Axis::Horizontal => sample.x - prev.x,
                Axis::Vertical => sample.y - prev.y,
            };
            let velocity = delta / dt as f32;
            if velocity.is_finite() {
                self.velocity = velocity;
            }
        }

        self.last = Some(sample);
        self.velocity
    }

    /// Most recently computed velocity (coordinate units per millisecond)
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Forget the reference sample and zero the velocity
    pub fn reset(&mut self) {
        self.last = None;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_returns_zero() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        assert_eq!(tracker.on_sample(100.0, 0.0, 0), 0.0);
    }

    #[test]
    fn test_constant_motion_velocity() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        tracker.on_sample(0.0, 0.0, 0);

        // 10 units per 10ms = 1.0 units/ms
        assert!((tracker.on_sample(10.0, 0.0, 10) - 1.0).abs() < 1e-6);
        assert!((tracker.on_sample(20.0, 0.0, 20) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_backward_motion_is_negative() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        tracker.on_sample(100.0, 0.0, 0);

        assert!(tracker.on_sample(80.0, 0.0, 10) < 0.0);
    }

    #[test]
    fn test_vertical_axis_reads_y() {
        let mut tracker = VelocityTracker::new(Axis::Vertical);
        tracker.on_sample(5.0, 0.0, 0);

        // x changes are ignored on the vertical axis
        let v = tracker.on_sample(500.0, 30.0, 10);
        assert!((v - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_keeps_previous_velocity() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        tracker.on_sample(0.0, 0.0, 0);
        tracker.on_sample(10.0, 0.0, 10);

        let v = tracker.on_sample(50.0, 0.0, 10);
        assert!((v - 1.0).abs() < 1e-6);
        assert!(v.is_finite());
    }

    #[test]
    fn test_clock_regression_keeps_previous_velocity() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        tracker.on_sample(0.0, 0.0, 100);
        tracker.on_sample(10.0, 0.0, 110);

        let v = tracker.on_sample(900.0, 0.0, 50);
        assert!((v - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset_clears_reference() {
        let mut tracker = VelocityTracker::new(Axis::Horizontal);
        tracker.on_sample(0.0, 0.0, 0);
        tracker.on_sample(10.0, 0.0, 10);

        tracker.reset();
        assert_eq!(tracker.velocity(), 0.0);
        assert_eq!(tracker.on_sample(999.0, 0.0, 20), 0.0);
    }
}
