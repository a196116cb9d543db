use std::cell::Cell;
use std::rc::Rc;

use cockpit_animation_core::numeric::uv_offset;
use cockpit_animation_core::{Animation, Config, Strategy};
use cockpit_signal_core::SlotHandle;

use crate::control::Control;

/// On/off annunciator. The glow state snaps, driving a UV offset between the
/// dark and lit texture cells. Not persisted: it always follows its source.
pub struct IndicatorLamp {
    name: String,
    glow: Animation,
    lit: Rc<Cell<bool>>,
    input: SlotHandle<bool>,
}

impl IndicatorLamp {
    pub fn new(name: impl Into<String>, cfg: Config) -> Self {
        let lit = Rc::new(Cell::new(false));
        let sink = lit.clone();
        let input = SlotHandle::new(false, move |on: &bool| sink.set(*on));
        Self {
            name: name.into(),
            glow: Animation::with_config(Strategy::Direct, 0.0, cfg),
            lit,
            input,
        }
    }

    pub fn input(&self) -> &SlotHandle<bool> {
        &self.input
    }

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.lit.get()
    }

    /// U offset selecting the dark (first) or lit (second) cell of a
    /// two-cell texture strip.
    pub fn texture_offset(&self, cell_width: f64) -> f64 {
        uv_offset(self.glow.state(), 1, cell_width)
    }
}

impl Control for IndicatorLamp {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self, dt: f64) -> bool {
        let target = if self.lit.get() { 1.0 } else { 0.0 };
        self.glow.step(target, dt)
    }

    fn animations(&self) -> Vec<&Animation> {
        vec![&self.glow]
    }

    fn animations_mut(&mut self) -> Vec<&mut Animation> {
        vec![&mut self.glow]
    }
}
