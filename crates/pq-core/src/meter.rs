use serde::{Deserialize, Serialize};

/// Accumulated progress toward a threshold.
///
/// `position` never drops below zero and `target` is always positive. The
/// position may sit at or past the target only until the owner notices and
/// resets the meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressMeter {
    /// Progress accumulated so far.
    pub position: f64,
    /// The threshold that completes the meter.
    pub target: f64,
}

impl ProgressMeter {
    /// Smallest target a meter accepts.
    pub const MIN_TARGET: f64 = 1.0;

    /// Create an empty meter with the given target (clamped to [`Self::MIN_TARGET`]).
    pub fn new(target: f64) -> Self {
        Self {
            position: 0.0,
            target: clamp_target(target),
        }
    }

    /// Add `amount` to the position. Negative amounts floor at zero.
    pub fn advance(&mut self, amount: f64) {
        self.position = (self.position + amount).max(0.0);
    }

    /// Overwrite the position, flooring at zero.
    pub fn set_position(&mut self, position: f64) {
        self.position = position.max(0.0);
    }

    /// Empty the meter and install a new target.
    pub fn reset(&mut self, target: f64) {
        self.position = 0.0;
        self.target = clamp_target(target);
    }

    /// True once the position has reached the target.
    pub fn is_complete(&self) -> bool {
        self.position >= self.target
    }

    /// Fraction filled, clamped to `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        (self.position / self.target).clamp(0.0, 1.0)
    }

    /// Distance left to the target, never negative.
    pub fn remaining(&self) -> f64 {
        (self.target - self.position).max(0.0)
    }
}

impl Default for ProgressMeter {
    fn default() -> Self {
        Self::new(Self::MIN_TARGET)
    }
}

fn clamp_target(target: f64) -> f64 {
    if target.is_finite() {
        target.max(ProgressMeter::MIN_TARGET)
    } else {
        ProgressMeter::MIN_TARGET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_meter_is_empty() {
        let m = ProgressMeter::new(10.0);
        assert_eq!(m.position, 0.0);
        assert_eq!(m.target, 10.0);
        assert!(!m.is_complete());
    }

    #[test]
    fn target_is_always_positive() {
        assert_eq!(ProgressMeter::new(0.0).target, 1.0);
        assert_eq!(ProgressMeter::new(-5.0).target, 1.0);
        assert_eq!(ProgressMeter::new(f64::NAN).target, 1.0);
        let mut m = ProgressMeter::new(5.0);
        m.reset(0.0);
        assert_eq!(m.target, 1.0);
    }

    #[test]
    fn advance_completes_at_target() {
        let mut m = ProgressMeter::new(3.0);
        m.advance(2.0);
        assert!(!m.is_complete());
        m.advance(1.0);
        assert!(m.is_complete());
        assert_eq!(m.remaining(), 0.0);
    }

    #[test]
    fn position_floors_at_zero() {
        let mut m = ProgressMeter::new(3.0);
        m.advance(-4.0);
        assert_eq!(m.position, 0.0);
        m.set_position(-1.0);
        assert_eq!(m.position, 0.0);
    }

    #[test]
    fn fraction_is_clamped() {
        let mut m = ProgressMeter::new(4.0);
        m.advance(1.0);
        assert!((m.fraction() - 0.25).abs() < f64::EPSILON);
        m.advance(10.0);
        assert_eq!(m.fraction(), 1.0);
    }

    #[test]
    fn reset_clears_position() {
        let mut m = ProgressMeter::new(4.0);
        m.advance(6.0);
        m.reset(9.0);
        assert_eq!(m.position, 0.0);
        assert_eq!(m.target, 9.0);
    }
}
