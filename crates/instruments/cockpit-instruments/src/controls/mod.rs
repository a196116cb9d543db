//! Built-in controls.

mod counter;
mod gauge;
mod lamp;
mod toggle;

pub use counter::RollingCounter;
pub use gauge::{Gauge, GaugeScale};
pub use lamp::IndicatorLamp;
pub use toggle::ToggleSwitch;
