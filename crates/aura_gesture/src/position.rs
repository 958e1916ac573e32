//! Boundary-clamped position model
//!
//! Maps raw pointer coordinates into a normalized position along one axis
//! of a container, clamped to configured bounds. Positions are percentages
//! by default (`[0, 100]`), matching how hosts express slider values and
//! preset stops.

/// The axis a controller tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Track pointer x against container width (default)
    #[default]
    Horizontal,
    /// Track pointer y against container height
    Vertical,
}

/// Inclusive position bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
        }
    }
}

impl Bounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a value into these bounds
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies within these bounds
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance between min and max
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether min < max and both ends are finite
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Container placement in window coordinates
///
/// Updated by the host whenever layout changes (the resize-observer
/// equivalent). A zero-sized container is a transient layout state, not an
/// error; the position model rides it out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerGeometry {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    /// Origin of the given axis
    pub fn origin(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.origin_x,
            Axis::Vertical => self.origin_y,
        }
    }

    /// Extent of the given axis
    pub fn size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Converts pointer coordinates to clamped positions, remembering the last
/// valid result so degenerate geometry never poisons the position stream
#[derive(Debug, Clone, Copy)]
pub struct PositionModel {
    bounds: Bounds,
    last_valid: f32,
}

impl PositionModel {
    pub fn new(bounds: Bounds, initial: f32) -> Self {
        Self {
            bounds,
            last_valid: bounds.clamp(initial),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The most recent successfully computed position
    pub fn last_valid(&self) -> f32 {
        self.last_valid
    }

    /// Overwrite the remembered position (keyboard jumps, programmatic sets)
    pub fn set(&mut self, position: f32) -> f32 {
        self.last_valid = self.bounds.clamp(position);
        self.last_valid
    }

    /// Map a pointer coordinate into a clamped position
    ///
    /// A zero or negative container size means layout has not stabilized;
    /// the model returns the last valid position instead of dividing by
    /// zero, and logs a diagnostic.
    pub fn to_position(&mut self, pointer_coord: f32, origin: f32, size: f32) -> f32 {
        if size <= 0.0 || !size.is_finite() {
            tracing::warn!(
                size,
                "degenerate container geometry, keeping position {:.2}",
                self.last_valid
            );
            return self.last_valid;
        }

        let fraction = (pointer_coord - origin) / size;
        let raw = self.bounds.min + fraction * self.bounds.span();
        if !raw.is_finite() {
            tracing::warn!(pointer_coord, origin, size, "non-finite position rejected");
            return self.last_valid;
        }

        self.last_valid = self.bounds.clamp(raw);
        self.last_valid
    }
}
