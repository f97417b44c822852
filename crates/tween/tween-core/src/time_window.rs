//! Absolute time windows for clock-driven tweens.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::TweenError;
use crate::interpolate::TimeSource;

/// `[start, end]` in clock time, mapped onto ratio `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Result<Self, TweenError> {
        // Negated so NaN bounds are rejected too.
        if !(start < end) {
            return Err(TweenError::EmptyWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Fill in a window from any workable combination of `startt`, `endt`
    /// and `dt`. A missing start is derived from `endt - dt` when both are
    /// given, otherwise it is the current clock time.
    pub fn resolve(
        startt: Option<f64>,
        endt: Option<f64>,
        dt: Option<f64>,
        clock: &Clock,
    ) -> Result<Self, TweenError> {
        let start = match (startt, endt, dt) {
            (Some(start), _, _) => start,
            (None, Some(end), Some(dt)) => end - dt,
            _ => clock.time(),
        };
        let end = match (endt, dt) {
            (Some(end), _) => end,
            (None, Some(dt)) => start + dt,
            (None, None) => return Err(TweenError::MissingEnd),
        };
        debug!("resolved tween window [{start}, {end}]");
        Self::new(start, end)
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn inverse_duration(&self) -> f64 {
        1.0 / self.duration()
    }

    pub fn time_source(&self) -> TimeSource {
        TimeSource::global(self.start, self.duration())
    }
}
