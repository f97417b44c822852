//! Kept in its own test binary: the logger is process-global.

use std::rc::Rc;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use tween_core::{Animation, Clock, ExtendMode, InterpolationState, Slot};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct Capture;

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;

#[test]
fn cycle_is_reported_as_warning() {
    log::set_logger(&LOGGER).expect("logger installs once");
    log::set_max_level(LevelFilter::Trace);

    let anim = Rc::new(Animation::interpolate(
        InterpolationState::new(1.0, 2.0, Slot::constant(0.0)).with_extend(ExtendMode::Extrapolate),
    ));
    let interp = anim.interpolation().unwrap();
    interp.set_time_slot(Slot::animation(anim.clone())).unwrap();

    // Inner pass reads 0 -> 1.0; outer pass uses t = 1.0 -> 2.0.
    assert_eq!(anim.evaluate(&Clock::new()), 2.0);

    let warnings: Vec<String> = RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.clone())
        .collect();
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("circular"));

    interp.set_time_slot(0.0).unwrap();
}
