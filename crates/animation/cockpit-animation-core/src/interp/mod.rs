//! Update strategies.
//!
//! Each strategy is a stateless function of the current
//! [`InterpolationState`], a target and a time delta. It returns the new
//! `current` plus whether anything moved; [`Animation`](crate::Animation)
//! uses the flag to decide whether an arrival happened this step.

pub mod functions;

use serde::{Deserialize, Serialize};

use crate::state::InterpolationState;

/// Result of applying a strategy once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutcome {
    pub current: f64,
    pub changed: bool,
}

impl StepOutcome {
    #[inline]
    pub fn unchanged(current: f64) -> Self {
        Self {
            current,
            changed: false,
        }
    }

    #[inline]
    pub fn moved(current: f64) -> Self {
        Self {
            current,
            changed: true,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Snap straight to the target.
    Direct,
    /// Linear approach limited to `speed * dt` per step.
    #[default]
    Target,
    /// Linear approach on the unit circle along the shorter arc.
    Wrap,
}

impl Strategy {
    #[inline]
    pub fn apply(self, state: &InterpolationState, target: f64, dt: f64) -> StepOutcome {
        match self {
            Strategy::Direct => functions::snap(state, target),
            Strategy::Target => functions::seek_target(state, target, dt),
            Strategy::Wrap => functions::seek_wrap(state, target, dt),
        }
    }
}
