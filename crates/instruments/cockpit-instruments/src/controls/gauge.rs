use std::cell::Cell;
use std::rc::Rc;

use cockpit_animation_core::numeric::{degrees_to_fraction, range_to_fraction};
use cockpit_animation_core::{Animation, Config, Strategy};
use cockpit_signal_core::SlotHandle;

use crate::control::Control;

/// How a domain value maps onto the needle's swing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GaugeScale {
    /// Clamped linear scale; the needle stops at either end.
    Linear { min: f64, max: f64 },
    /// Full-turn dial in degrees (compass rose, clock hand); the needle takes
    /// the shorter way round.
    Degrees,
}

impl GaugeScale {
    fn to_fraction(self, v: f64) -> f64 {
        match self {
            GaugeScale::Linear { min, max } => range_to_fraction(v, min, max),
            GaugeScale::Degrees => degrees_to_fraction(v),
        }
    }

    fn strategy(self) -> Strategy {
        match self {
            GaugeScale::Linear { .. } => Strategy::Target,
            GaugeScale::Degrees => Strategy::Wrap,
        }
    }
}

/// Single-needle instrument fed by a `Signal<f64>` of domain values.
pub struct Gauge {
    name: String,
    needle: Animation,
    target: Rc<Cell<f64>>,
    input: SlotHandle<f64>,
}

impl Gauge {
    pub fn new(name: impl Into<String>, scale: GaugeScale, speed: f64, cfg: Config) -> Self {
        let target = Rc::new(Cell::new(0.0));
        let sink = target.clone();
        let input = SlotHandle::new(0.0, move |v: &f64| sink.set(scale.to_fraction(*v)));
        Self {
            name: name.into(),
            needle: Animation::with_config(scale.strategy(), speed, cfg),
            target,
            input,
        }
    }

    /// Slot to attach to the signal carrying this gauge's domain value.
    pub fn input(&self) -> &SlotHandle<f64> {
        &self.input
    }

    #[inline]
    pub fn needle(&self) -> f64 {
        self.needle.state()
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target.get()
    }
}

impl Control for Gauge {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: f64) -> bool {
        self.needle.step(self.target.get(), dt)
    }

    fn animations(&self) -> Vec<&Animation> {
        vec![&self.needle]
    }

    fn animations_mut(&mut self) -> Vec<&mut Animation> {
        vec![&mut self.needle]
    }

    fn write_state(&self, out: &mut String) {
        self.needle.write_state(out);
    }

    fn read_state(&mut self, tokens: &mut dyn Iterator<Item = &str>) {
        self.needle.read_state(tokens);
        // Hold the restored position until the source fires again.
        self.target.set(self.needle.state());
        self.input.set();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cockpit_signal_core::Signal;

    #[test]
    fn linear_gauge_tracks_signal() {
        let mut g = Gauge::new(
            "ASI",
            GaugeScale::Linear {
                min: 0.0,
                max: 200.0,
            },
            1.0,
            Config::default(),
        );
        let mut airspeed = Signal::new(0.0);
        airspeed.attach(g.input());
        airspeed.fire(100.0);
        assert_eq!(g.target(), 0.5);
        for _ in 0..10 {
            g.step(0.1);
        }
        assert_eq!(g.needle(), 0.5);
    }

    #[test]
    fn degree_gauge_wraps_short_way() {
        let mut g = Gauge::new("HDG", GaugeScale::Degrees, 0.1, Config::default());
        g.needle.set_state(degrees_to_fraction(350.0));
        g.input().notify(&10.0);
        g.step(0.1);
        // moved forward through north, not back through south
        assert!(g.needle() > 350.0 / 360.0 || g.needle() < 10.0 / 360.0);
    }
}
