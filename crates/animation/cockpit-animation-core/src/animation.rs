//! Animation: one interpolation state driven by one strategy.
//!
//! Two phases, implied by the distance between `current` and `target`:
//! `Idle` when they agree (within `Config::arrival_epsilon`) and `Seeking`
//! otherwise. The arrival callback fires on the step that moves the animation
//! from `Seeking` into `Idle`, and only then; staying idle never re-fires it.

use std::fmt;

use log::debug;

use crate::config::Config;
use crate::ids::AnimHandle;
use crate::interp::Strategy;
use crate::numeric::wrap_unit;
use crate::persist::{format_state, next_state_token};
use crate::state::InterpolationState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Seeking,
}

type ArrivalFn = Box<dyn FnMut(f64)>;

pub struct Animation {
    state: InterpolationState,
    strategy: Strategy,
    phase: Phase,
    handle: Option<AnimHandle>,
    on_arrival: Option<ArrivalFn>,
    cfg: Config,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("state", &self.state)
            .field("strategy", &self.strategy)
            .field("phase", &self.phase)
            .field("handle", &self.handle)
            .field("on_arrival", &self.on_arrival.is_some())
            .finish()
    }
}

impl Animation {
    /// Animation at rest at 0 with a fixed `speed` (fractions per second).
    pub fn new(strategy: Strategy, speed: f64) -> Self {
        Self::with_config(strategy, speed, Config::default())
    }

    pub fn with_config(strategy: Strategy, speed: f64, cfg: Config) -> Self {
        Self {
            state: InterpolationState::new(speed),
            strategy,
            phase: Phase::Idle,
            handle: None,
            on_arrival: None,
            cfg,
        }
    }

    pub fn direct() -> Self {
        Self::new(Strategy::Direct, 0.0)
    }

    pub fn seek(speed: f64) -> Self {
        Self::new(Strategy::Target, speed)
    }

    pub fn wrap(speed: f64) -> Self {
        Self::new(Strategy::Wrap, speed)
    }

    /// Register a callback fired with the arrival value each time the
    /// animation reaches its target.
    pub fn on_arrival<F>(mut self, callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        self.on_arrival = Some(Box::new(callback));
        self
    }

    pub fn set_on_arrival<F>(&mut self, callback: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.on_arrival = Some(Box::new(callback));
    }

    /// Record the host track handle. Assigned once at registration time.
    pub fn register(&mut self, handle: AnimHandle) {
        self.handle = Some(handle);
    }

    #[inline]
    pub fn handle(&self) -> Option<AnimHandle> {
        self.handle
    }

    /// Drive the animation one step toward `target`. Returns whether
    /// `current` moved.
    ///
    /// A non-finite target is ignored. Wrap animations store their target
    /// folded into `[0, 1]`.
    pub fn step(&mut self, target: f64, dt: f64) -> bool {
        if !target.is_finite() {
            debug!("ignoring non-finite animation target {target}");
            return false;
        }
        let target = match self.strategy {
            Strategy::Wrap if !(0.0..=1.0).contains(&target) => wrap_unit(target),
            _ => target,
        };
        self.state.target = target;
        if !self.at_target() {
            self.phase = Phase::Seeking;
        }

        let outcome = self.strategy.apply(&self.state, target, dt);
        self.state.current = outcome.current;

        if self.phase == Phase::Seeking && self.at_target() {
            self.phase = Phase::Idle;
            if outcome.changed {
                let value = self.state.current;
                if let Some(cb) = self.on_arrival.as_mut() {
                    cb(value);
                }
            }
        }
        outcome.changed
    }

    /// The live value consumed by rendering.
    #[inline]
    pub fn state(&self) -> f64 {
        self.state.current
    }

    /// Overwrite `current` and `target` at once, without animating and without
    /// firing the arrival callback. `v` is clamped to `[0, 1]`; NaN is ignored.
    pub fn set_state(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        let v = v.clamp(0.0, 1.0);
        self.state.current = v;
        self.state.target = v;
        self.phase = Phase::Idle;
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.state.target
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.state.speed = speed;
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.phase == Phase::Seeking
    }

    #[inline]
    pub fn interpolation(&self) -> &InterpolationState {
        &self.state
    }

    fn at_target(&self) -> bool {
        let diff = self.state.current - self.state.target;
        match self.strategy {
            Strategy::Wrap => {
                let d = diff.rem_euclid(1.0);
                d.min(1.0 - d) <= self.cfg.arrival_epsilon
            }
            _ => diff.abs() <= self.cfg.arrival_epsilon,
        }
    }

    /// Append `" <token>"` for the current value to `out`.
    pub fn write_state(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&format_state(self.state.current, self.cfg.state_digits));
    }

    /// Consume one token from `tokens` and restore it via
    /// [`set_state`](Self::set_state). A missing or malformed token is consumed
    /// and otherwise ignored; the prior state stays in place.
    pub fn read_state<'a, I>(&mut self, tokens: &mut I)
    where
        I: Iterator<Item = &'a str> + ?Sized,
    {
        match next_state_token(tokens) {
            Ok(v) => self.set_state(v),
            Err(e) => debug!("ignoring persisted animation state: {e}"),
        }
    }
}
