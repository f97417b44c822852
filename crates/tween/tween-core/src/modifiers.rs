//! Animations derived from another value.

use std::cell::Cell;

use crate::animation::{Animate, Sample};
use crate::clock::Clock;
use crate::slot::Slot;

/// Wraps `source` into the range between `low` and `high`.
///
/// The bounds are slots, so they can be fixed or follow another value.
/// Their order does not matter; equal bounds read NaN.
#[derive(Clone, Debug)]
pub struct Wrap {
    pub low: Slot,
    pub high: Slot,
    pub source: Slot,
}

impl Wrap {
    pub fn new(low: impl Into<Slot>, high: impl Into<Slot>, source: impl Into<Slot>) -> Self {
        Self {
            low: low.into(),
            high: high.into(),
            source: source.into(),
        }
    }
}

impl Animate for Wrap {
    fn sample(&self, clock: &Clock) -> Sample {
        let a = self.low.read(clock);
        let b = self.high.read(clock);
        let value = self.source.read(clock);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Sample::Value(low + (value - low).rem_euclid(high - low))
    }
}

/// Rate of change of `source` per unit of clock time.
///
/// The first reading is taken on construction. Every evaluation at a new
/// clock time reports `(value - last_value) / (time - last_time)` and keeps
/// the new reading; evaluating again at the same time repeats the last rate.
#[derive(Debug)]
pub struct Rate {
    source: Slot,
    /// `(time, value)` of the last reading.
    last: Cell<(f64, f64)>,
    rate: Cell<f64>,
}

impl Rate {
    pub fn new(source: impl Into<Slot>, clock: &Clock) -> Self {
        let source = source.into();
        let value = source.read(clock);
        Self {
            source,
            last: Cell::new((clock.time(), value)),
            rate: Cell::new(0.0),
        }
    }

    pub fn source(&self) -> &Slot {
        &self.source
    }
}

impl Animate for Rate {
    fn sample(&self, clock: &Clock) -> Sample {
        let (last_time, last_value) = self.last.get();
        let time = clock.time();
        if time != last_time {
            let value = self.source.read(clock);
            self.rate.set((value - last_value) / (time - last_time));
            self.last.set((time, value));
        }
        Sample::Value(self.rate.get())
    }
}
