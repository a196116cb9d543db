use cockpit_animation_core::persist::next_state_token;
use cockpit_animation_core::{Animation, Config, Strategy};
use cockpit_signal_core::Signal;
use log::debug;

use crate::control::{Control, MouseEvent};

/// Two-position lever switch.
///
/// Flipping broadcasts the new position on [`changed`](Self::changed_mut)
/// immediately; the lever animation follows at its own pace. Persisted as
/// `<position> <lever>`.
pub struct ToggleSwitch {
    name: String,
    on: bool,
    lever: Animation,
    changed: Signal<bool>,
}

impl ToggleSwitch {
    pub fn new(name: impl Into<String>, speed: f64, cfg: Config) -> Self {
        Self {
            name: name.into(),
            on: false,
            lever: Animation::with_config(Strategy::Target, speed, cfg),
            changed: Signal::new(false),
        }
    }

    /// Signal carrying the switch position. Attach dependents during wiring.
    pub fn changed_mut(&mut self) -> &mut Signal<bool> {
        &mut self.changed
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.changed.fire(on);
        }
    }

    pub fn flip(&mut self) {
        self.set(!self.on);
    }

    #[inline]
    pub fn lever(&self) -> f64 {
        self.lever.state()
    }
}

impl Control for ToggleSwitch {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: f64) -> bool {
        let target = if self.on { 1.0 } else { 0.0 };
        self.lever.step(target, dt)
    }

    fn animations(&self) -> Vec<&Animation> {
        vec![&self.lever]
    }

    fn animations_mut(&mut self) -> Vec<&mut Animation> {
        vec![&mut self.lever]
    }

    fn write_state(&self, out: &mut String) {
        out.push_str(if self.on { " 1" } else { " 0" });
        self.lever.write_state(out);
    }

    fn read_state(&mut self, tokens: &mut dyn Iterator<Item = &str>) {
        match next_state_token(tokens) {
            Ok(v) => {
                self.on = v >= 0.5;
                // Visible on query, but dependents only hear about it on propagate().
                self.changed.update(self.on);
            }
            Err(e) => debug!("{}: ignoring persisted position: {e}", self.name),
        }
        self.lever.read_state(tokens);
    }

    fn propagate(&mut self) {
        self.changed.refire();
    }

    fn on_mouse(&mut self, event: MouseEvent) -> bool {
        match event {
            MouseEvent::Press => {
                self.flip();
                true
            }
            MouseEvent::Release => false,
        }
    }
}
