use std::cell::RefCell;
use std::rc::Rc;

use cockpit_animation_core::{AnimHandle, Animation, Config, Phase, Strategy};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(f64) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    (log, move |v| sink.borrow_mut().push(v))
}

#[test]
fn arrival_fires_once_per_arrival() {
    let (log, cb) = recorder();
    let mut a = Animation::seek(1.0).on_arrival(cb);

    for _ in 0..10 {
        a.step(0.5, 0.1);
    }
    assert_eq!(a.state(), 0.5);
    assert_eq!(a.phase(), Phase::Idle);
    assert_eq!(*log.borrow(), vec![0.5]);

    // Second arrival at a new target fires again, exactly once.
    for _ in 0..20 {
        a.step(0.0, 0.1);
    }
    assert_eq!(*log.borrow(), vec![0.5, 0.0]);
}

#[test]
fn direct_arrival_fires_on_first_step() {
    let (log, cb) = recorder();
    let mut a = Animation::direct().on_arrival(cb);
    assert!(a.step(0.7, 0.0));
    assert!(!a.step(0.7, 0.0));
    assert_eq!(*log.borrow(), vec![0.7]);
}

#[test]
fn epsilon_close_then_exact_snap_fires_once() {
    let (log, cb) = recorder();
    let cfg = Config {
        arrival_epsilon: 1e-3,
        ..Config::default()
    };
    let mut a = Animation::with_config(Strategy::Target, 1.0, cfg).on_arrival(cb);
    a.step(1.0, 0.9995);
    assert_eq!(a.phase(), Phase::Idle);
    assert!(a.state() < 1.0);
    a.step(1.0, 0.5);
    assert_eq!(a.state(), 1.0);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn wrap_arrival_across_seam_fires() {
    let (log, cb) = recorder();
    let mut a = Animation::wrap(1.0).on_arrival(cb);
    a.set_state(0.97);
    a.step(0.03, 0.02);
    assert_eq!(a.phase(), Phase::Seeking);
    approx(a.state(), 0.99, 1e-12);
    a.step(0.03, 0.02);
    approx(a.state(), 0.01, 1e-12);
    a.step(0.03, 0.02);
    assert_eq!(a.state(), 0.03);
    assert_eq!(*log.borrow(), vec![0.03]);
}

#[test]
fn set_state_clamps_and_overwrites_both() {
    let (log, cb) = recorder();
    let mut a = Animation::seek(0.1).on_arrival(cb);
    a.step(1.0, 0.1);
    assert!(a.is_moving());

    a.set_state(1.7);
    assert_eq!(a.state(), 1.0);
    assert_eq!(a.target(), 1.0);
    assert!(!a.is_moving());

    a.set_state(-3.0);
    assert_eq!(a.state(), 0.0);

    a.set_state(f64::NAN);
    assert_eq!(a.state(), 0.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn seeking_continues_toward_latest_target() {
    let mut a = Animation::seek(1.0);
    a.step(1.0, 0.3);
    approx(a.state(), 0.3, 1e-12);
    // New target mid-flight: no abort, just a new direction.
    a.step(0.0, 0.1);
    approx(a.state(), 0.2, 1e-12);
    assert!(a.is_moving());
}

#[test]
fn handle_is_opaque_passthrough() {
    let mut a = Animation::seek(1.0);
    a.register(AnimHandle(42));
    a.step(1.0, 1.0);
    assert_eq!(a.handle(), Some(AnimHandle(42)));
}

#[test]
fn speed_can_be_retuned() {
    let mut a = Animation::seek(1.0);
    a.set_speed(2.0);
    a.step(1.0, 0.25);
    approx(a.state(), 0.5, 1e-12);
    assert_eq!(a.speed(), 2.0);
    assert_eq!(a.strategy(), Strategy::Target);
}

#[test]
fn wrap_out_of_range_target_seeks_and_arrives_once() {
    let (log, cb) = recorder();
    let mut a = Animation::wrap(1.0).on_arrival(cb);
    a.set_state(0.1);

    a.step(1.25, 0.05);
    approx(a.state(), 0.15, 1e-12);
    approx(a.target(), 0.25, 1e-12);
    assert!(a.is_moving());

    for _ in 0..20 {
        a.step(1.25, 0.05);
    }
    approx(a.state(), 0.25, 1e-12);
    assert_eq!(a.phase(), Phase::Idle);
    assert_eq!(log.borrow().len(), 1);
    approx(log.borrow()[0], 0.25, 1e-12);
}

#[test]
fn wrap_negative_target_folds_onto_circle() {
    let mut a = Animation::wrap(1.0);
    a.set_state(0.9);
    a.step(-2.05, 0.1);
    approx(a.target(), 0.95, 1e-12);
    approx(a.state(), 0.95, 1e-12);
    assert_eq!(a.phase(), Phase::Idle);
}

#[test]
fn non_finite_target_leaves_state_alone() {
    let (log, cb) = recorder();
    let mut a = Animation::seek(1.0).on_arrival(cb);
    a.set_state(0.5);
    for _ in 0..10 {
        assert!(!a.step(f64::NAN, 0.1));
    }
    assert_eq!(a.state(), 0.5);
    assert_eq!(a.target(), 0.5);
    assert_eq!(a.phase(), Phase::Idle);

    let mut d = Animation::direct();
    d.set_state(0.3);
    assert!(!d.step(f64::INFINITY, 0.1));
    assert_eq!(d.state(), 0.3);
    assert!(log.borrow().is_empty());
}
