use std::cell::Cell;
use std::rc::Rc;

use cockpit_animation_core::numeric::{decimal_digits, odometer_digits};
use cockpit_animation_core::persist::next_state_token;
use cockpit_animation_core::{Animation, Config, Strategy};
use cockpit_signal_core::SlotHandle;
use log::debug;

use crate::control::Control;

/// Mechanical rolling-digit counter (odometer, fuel totaliser, clock).
///
/// One wrap animation per drum, least significant first. Persisted as the raw
/// reading followed by every drum position.
pub struct RollingCounter {
    name: String,
    drums: Vec<Animation>,
    reading: Rc<Cell<f64>>,
    input: SlotHandle<f64>,
}

impl RollingCounter {
    pub fn new(name: impl Into<String>, drums: usize, speed: f64, cfg: Config) -> Self {
        let reading = Rc::new(Cell::new(0.0));
        let sink = reading.clone();
        let input = SlotHandle::new(0.0, move |v: &f64| sink.set(*v));
        Self {
            name: name.into(),
            drums: (0..drums)
                .map(|_| Animation::with_config(Strategy::Wrap, speed, cfg))
                .collect(),
            reading,
            input,
        }
    }

    pub fn input(&self) -> &SlotHandle<f64> {
        &self.input
    }

    #[inline]
    pub fn reading(&self) -> f64 {
        self.reading.get()
    }

    pub fn drum_states(&self) -> Vec<f64> {
        self.drums.iter().map(Animation::state).collect()
    }

    /// Settled digits of the current reading, least significant first, as
    /// shown once every drum has stopped.
    pub fn digits(&self) -> Vec<u8> {
        decimal_digits(self.reading.get(), self.drums.len())
    }
}

impl Control for RollingCounter {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: f64) -> bool {
        let targets = odometer_digits(self.reading.get(), self.drums.len());
        let mut moved = false;
        for (drum, target) in self.drums.iter_mut().zip(targets) {
            moved |= drum.step(target, dt);
        }
        moved
    }

    fn animations(&self) -> Vec<&Animation> {
        self.drums.iter().collect()
    }

    fn animations_mut(&mut self) -> Vec<&mut Animation> {
        self.drums.iter_mut().collect()
    }

    fn write_state(&self, out: &mut String) {
        out.push(' ');
        out.push_str(&self.reading.get().to_string());
        for drum in &self.drums {
            drum.write_state(out);
        }
    }

    fn read_state(&mut self, tokens: &mut dyn Iterator<Item = &str>) {
        match next_state_token(tokens) {
            Ok(v) if v >= 0.0 => self.reading.set(v),
            Ok(v) => debug!("{}: ignoring negative reading {v}", self.name),
            Err(e) => debug!("{}: ignoring persisted reading: {e}", self.name),
        }
        for drum in &mut self.drums {
            drum.read_state(tokens);
        }
        self.input.set();
    }
}
