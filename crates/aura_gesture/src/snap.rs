//! Preset snap resolution
//!
//! A preset set is a small, ordered collection of designated positions
//! (0%, 25%, 50%...). The resolver pulls a nearby position onto the
//! nearest preset when it lands within a tolerance, with a deterministic
//! tie-break so repeated gestures never oscillate between two answers.

use smallvec::SmallVec;

/// Two presets closer together than this are considered duplicates.
const DEDUP_EPSILON: f32 = 1e-4;

/// An ordered, deduplicated set of snap targets
///
/// Immutable for the lifetime of a controller. Construction drops
/// non-finite values and sorts ascending; an empty set is legal and makes
/// snapping a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presets {
    values: SmallVec<[f32; 8]>,
}

impl Presets {
    /// Build a preset set from arbitrary values
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let mut sorted: SmallVec<[f32; 8]> =
            values.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f32::total_cmp);
        sorted.dedup_by(|a, b| (*a - *b).abs() < DEDUP_EPSILON);

        Self { values: sorted }
    }

    /// The standard quarter stops `[0, 25, 50, 75, 100]`
    pub fn quarters() -> Self {
        Self::new([0.0, 25.0, 50.0, 75.0, 100.0])
    }

    /// An empty set (snapping disabled)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Preset at the given index (ascending order)
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Ascending iterator over the presets
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// The preset nearest to `position`
    ///
    /// When two presets are equidistant the lower one wins; iterating in
    /// ascending order with a strict comparison makes that the first hit.
    pub fn nearest(&self, position: f32) -> Option<f32> {
        let mut best: Option<(f32, f32)> = None;
        for preset in self.iter() {
            let distance = (preset - position).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((preset, distance)),
            }
        }
        best.map(|(preset, _)| preset)
    }

    /// Resolve a position against the set
    ///
    /// Returns `Some(preset)` when the nearest preset lies within
    /// `threshold` (inclusive), `None` when the position should stay where
    /// it is. Resolving an already-snapped position returns the same
    /// preset, so repeated resolution never drifts.
    pub fn resolve(&self, position: f32, threshold: f32) -> Option<f32> {
        if threshold < 0.0 {
            return None;
        }
        self.nearest(position)
            .filter(|preset| (preset - position).abs() <= threshold)
    }

    /// Resolve, falling back to the input position when no snap applies
    pub fn apply(&self, position: f32, threshold: f32) -> f32 {
        self.resolve(position, threshold).unwrap_or(position)
    }
}

impl FromIterator<f32> for Presets {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snaps_within_threshold() {
        let presets = Presets::quarters();
        assert_eq!(presets.resolve(72.0, 5.0), Some(75.0));
        assert_eq!(presets.resolve(70.0, 5.0), Some(75.0));
    }

    #[test]
    fn test_no_snap_outside_threshold() {
        let presets = Presets::quarters();
        assert_eq!(presets.resolve(60.0, 5.0), None);
        assert_eq!(presets.apply(60.0, 5.0), 60.0);
    }

    #[test]
    fn test_equidistant_tie_breaks_low() {
        let presets = Presets::new([40.0, 60.0]);
        // 50 is exactly 10 from both; the lower preset must win every time
        for _ in 0..10 {
            assert_eq!(presets.resolve(50.0, 10.0), Some(40.0));
        }
    }

    #[test]
    fn test_idempotent_on_snapped_position() {
        let presets = Presets::quarters();
        let once = presets.apply(73.0, 5.0);
        let twice = presets.apply(once, 5.0);
        assert_eq!(once, 75.0);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_set_is_noop() {
        let presets = Presets::none();
        assert_eq!(presets.resolve(50.0, 100.0), None);
        assert_eq!(presets.apply(50.0, 100.0), 50.0);
    }

    #[test]
    fn test_construction_sorts_and_dedups() {
        let presets = Presets::new([75.0, 0.0, 50.0, 50.0, f32::NAN, 25.0]);
        let values: Vec<f32> = presets.iter().collect();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0]);
    }

    #[test]
    fn test_negative_threshold_never_snaps() {
        let presets = Presets::quarters();
        assert_eq!(presets.resolve(75.0, -1.0), None);
    }

    #[test]
    fn test_exact_preset_resolves_to_itself() {
        let presets = Presets::quarters();
        assert_eq!(presets.resolve(25.0, 0.0), Some(25.0));
    }
}
