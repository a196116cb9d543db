use serde::{Deserialize, Serialize};

/// Plain interpolation record shared by every update strategy.
///
/// `current` and `target` are fractions of a full swing, rotation or
/// texture-width offset and by convention lie in `[0, 1]`; nothing here
/// enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterpolationState {
    /// Maximum change per second. Unused by `Direct`.
    pub speed: f64,
    pub current: f64,
    pub target: f64,
}

impl InterpolationState {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            current: 0.0,
            target: 0.0,
        }
    }

    #[inline]
    pub fn at(speed: f64, current: f64, target: f64) -> Self {
        Self {
            speed,
            current,
            target,
        }
    }
}
