//! cockpit-instruments
//!
//! Composed controls built from [`cockpit_animation_core::Animation`] and
//! [`cockpit_signal_core`] wiring, plus the [`Cockpit`] root that steps them
//! once per frame, routes host mouse events, and saves/restores their state
//! as text lines.
//!
//! Instruments are plain values carrying optional capability records
//! (virtual-cockpit animation tracks, panel redraw, mouse binding); the
//! cockpit dispatches over whichever records are present.

pub mod bus;
pub mod cockpit;
pub mod config;
pub mod control;
pub mod controls;
pub mod error;
pub mod ids;
pub mod instrument;

pub use bus::EventBus;
pub use cockpit::{Cockpit, Frame, TrackUpdate};
pub use config::CockpitConfig;
pub use control::{Control, MouseEvent};
pub use controls::{Gauge, GaugeScale, IndicatorLamp, RollingCounter, ToggleSwitch};
pub use error::CockpitError;
pub use ids::{InstrumentId, PanelMouseHandle, PanelRedrawHandle, VcMouseHandle};
pub use instrument::{Instrument, MouseBinding, PanelRedraw, VcAnimation};
