#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use cockpit_instruments::{
    Cockpit, CockpitConfig, Gauge, GaugeScale, IndicatorLamp, InstrumentId, RollingCounter,
    ToggleSwitch,
};
use cockpit_signal_core::{Signal, SlotHandle};

/// Small electrical/navigation panel:
/// BATTERY switch -> BATT_LAMP, and BATTERY -> bus volts -> VOLTS gauge;
/// heading -> HDG dial; distance -> ODO counter.
pub struct Vehicle {
    pub cockpit: Cockpit,
    pub heading: Signal<f64>,
    pub distance: Signal<f64>,
    pub bus_volts: Rc<RefCell<Signal<f64>>>,
    pub lamp_in: SlotHandle<bool>,
    pub battery: InstrumentId,
    pub lamp: InstrumentId,
    pub volts: InstrumentId,
    pub hdg: InstrumentId,
    pub odo: InstrumentId,
}

pub fn vehicle(cfg: CockpitConfig) -> Vehicle {
    let acfg = cfg.animation;
    let mut cockpit = Cockpit::new(cfg);

    let lamp = IndicatorLamp::new("BATT_LAMP", acfg);
    let volts = Gauge::new("VOLTS", GaugeScale::Linear { min: 0.0, max: 30.0 }, 0.5, acfg);
    let hdg = Gauge::new("HDG", GaugeScale::Degrees, 0.25, acfg);
    let odo = RollingCounter::new("ODO", 4, 2.0, acfg);

    let bus_volts = Rc::new(RefCell::new(Signal::new(0.0)));
    bus_volts.borrow_mut().attach(volts.input());

    let mut battery = ToggleSwitch::new("BATTERY", 4.0, acfg);
    battery.changed_mut().attach(lamp.input());
    let bus = bus_volts.clone();
    let feed = SlotHandle::new(false, move |on: &bool| {
        bus.borrow_mut().fire(if *on { 28.0 } else { 0.0 });
    });
    battery.changed_mut().attach(&feed);

    let mut heading = Signal::new(0.0);
    heading.attach(hdg.input());
    let mut distance = Signal::new(0.0);
    distance.attach(odo.input());

    let lamp_in = lamp.input().clone();

    let battery = cockpit.add(battery).unwrap();
    let lamp = cockpit.add(lamp).unwrap();
    let volts = cockpit.add(volts).unwrap();
    let hdg = cockpit.add(hdg).unwrap();
    let odo = cockpit.add(odo).unwrap();

    Vehicle {
        cockpit,
        heading,
        distance,
        bus_volts,
        lamp_in,
        battery,
        lamp,
        volts,
        hdg,
        odo,
    }
}

pub fn states(cockpit: &Cockpit, name: &str) -> Vec<f64> {
    cockpit
        .find(name)
        .unwrap_or_else(|| panic!("no instrument {name}"))
        .control
        .animations()
        .iter()
        .map(|a| a.state())
        .collect()
}

pub fn run(cockpit: &mut Cockpit, frames: usize, dt: f64) {
    for _ in 0..frames {
        cockpit.step(dt);
    }
}

pub fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}
