//! Strategy implementations:
//! - snap (no rate limit)
//! - seek_target (bounded linear approach, terminal snap, NaN reset)
//! - seek_wrap (bounded approach on [0, 1) along the shorter arc)

use log::warn;

use super::StepOutcome;
use crate::numeric::wrap_unit;
use crate::state::InterpolationState;

/// `current := target` whenever they differ. A non-finite target is no motion.
#[inline]
pub fn snap(state: &InterpolationState, target: f64) -> StepOutcome {
    if state.current == target || !target.is_finite() {
        StepOutcome::unchanged(state.current)
    } else {
        StepOutcome::moved(target)
    }
}

/// Move toward `target` by at most `dt * speed`, landing exactly on it once
/// the remaining distance fits into one step.
///
/// A NaN result (degenerate speed/delta such as `inf * 0`, or a corrupted
/// current value) resets `current` to 0. A non-finite target is no motion.
pub fn seek_target(state: &InterpolationState, target: f64, dt: f64) -> StepOutcome {
    let current = state.current;
    if current == target || !target.is_finite() {
        return StepOutcome::unchanged(current);
    }
    let step = dt * state.speed;
    if step <= 0.0 {
        return StepOutcome::unchanged(current);
    }

    let diff = target - current;
    let mut next = if step >= diff.abs() {
        target
    } else if diff > 0.0 {
        current + step
    } else {
        current - step
    };

    if next.is_nan() {
        warn!(
            "seek_target produced NaN (current={current}, target={target}, speed={}, dt={dt}); resetting to 0",
            state.speed
        );
        next = 0.0;
    }

    // NaN current compares unequal to anything, so a reset reports a change.
    if next == current {
        StepOutcome::unchanged(current)
    } else {
        StepOutcome::moved(next)
    }
}

/// Shorter-arc signed distance from `current` to `target` on the unit
/// circle. Exactly half a turn keeps the direct direction (see DESIGN.md).
#[inline]
fn shorter_arc(current: f64, target: f64) -> f64 {
    let diff = target - current;
    if diff < 0.0 {
        if diff < -0.5 {
            diff + 1.0
        } else {
            diff
        }
    } else if diff > 0.5 {
        diff - 1.0
    } else {
        diff
    }
}

/// Move toward `target` on the unit circle by at most `dt * speed`, crossing
/// the 0/1 seam when that is shorter. The result always lies in `[0, 1]`.
pub fn seek_wrap(state: &InterpolationState, target: f64, dt: f64) -> StepOutcome {
    let current = state.current;
    let target = if (0.0..=1.0).contains(&target) {
        target
    } else {
        wrap_unit(target)
    };
    if current == target {
        return StepOutcome::unchanged(current);
    }
    let step = dt * state.speed;
    if !(step > 0.0) {
        return StepOutcome::unchanged(current);
    }

    let arc = shorter_arc(current, target);
    if step >= arc.abs() {
        return StepOutcome::moved(target);
    }

    let mut next = current + step.copysign(arc);
    if next > 1.0 {
        next -= 1.0;
    } else if next < 0.0 {
        next += 1.0;
    }
    StepOutcome::moved(next)
}
