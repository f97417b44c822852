//! Interpolation evaluator.
//!
//! Per evaluation:
//! 1. resolve the time ratio (global clock window or a time slot),
//! 2. read `start` then `end`,
//! 3. normalize through the extend mode, returning early at the bounds,
//! 4. ease the ratio,
//! 5. blend `start + (end - start) * x`.
//!
//! Nothing is cached between calls.

use std::cell::{Ref, RefCell};

use crate::animation::Sample;
use crate::clock::Clock;
use crate::easing::functions::lerp;
use crate::easing::EasingMode;
use crate::error::TweenError;
use crate::extend::{ExtendMode, Extended};
use crate::slot::Slot;

/// Where an interpolation gets its time ratio from.
#[derive(Clone, Debug)]
pub enum TimeSource {
    /// Read `t` from a slot.
    Slot(Slot),
    /// `t = (clock.time - start_time) * inverse_duration`.
    Global {
        start_time: f64,
        inverse_duration: f64,
    },
}

impl TimeSource {
    /// Track the global clock from `start_time` over `duration`.
    ///
    /// `duration` is not checked; zero produces an infinite or NaN ratio.
    pub fn global(start_time: f64, duration: f64) -> Self {
        TimeSource::Global {
            start_time,
            inverse_duration: 1.0 / duration,
        }
    }

    pub fn ratio(&self, clock: &Clock) -> f64 {
        match self {
            TimeSource::Slot(slot) => slot.read(clock),
            TimeSource::Global {
                start_time,
                inverse_duration,
            } => (clock.time() - start_time) * inverse_duration,
        }
    }

    pub fn uses_global_time(&self) -> bool {
        matches!(self, TimeSource::Global { .. })
    }
}

impl From<Slot> for TimeSource {
    fn from(slot: Slot) -> Self {
        TimeSource::Slot(slot)
    }
}

#[derive(Clone, Debug)]
pub struct InterpolationState {
    pub start: Slot,
    pub end: Slot,
    pub time: TimeSource,
    pub easing: EasingMode,
    pub extend: ExtendMode,
}

impl InterpolationState {
    /// Linear easing and constant extend until told otherwise.
    pub fn new(start: impl Into<Slot>, end: impl Into<Slot>, time: impl Into<TimeSource>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            time: time.into(),
            easing: EasingMode::default(),
            extend: ExtendMode::default(),
        }
    }

    pub fn with_easing(mut self, easing: EasingMode) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_extend(mut self, extend: ExtendMode) -> Self {
        self.extend = extend;
        self
    }

    pub fn sample(&self, clock: &Clock) -> Sample {
        let t = self.time.ratio(clock);
        let start = self.start.read(clock);
        let end = self.end.read(clock);

        match self.extend.normalize(t) {
            Extended::Start => Sample::Value(start),
            Extended::End => Sample::Ended(end),
            Extended::Ratio(t) => Sample::Value(lerp(start, end, self.easing.apply(t))),
        }
    }
}

/// Interpolation shared through `Rc<Animation>`, reconfigurable in place.
#[derive(Debug)]
pub struct Interpolation {
    state: RefCell<InterpolationState>,
}

impl Interpolation {
    pub fn new(state: InterpolationState) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }

    pub fn sample(&self, clock: &Clock) -> Sample {
        self.state.borrow().sample(clock)
    }

    pub fn state(&self) -> Ref<'_, InterpolationState> {
        self.state.borrow()
    }

    pub fn set_start(&self, slot: impl Into<Slot>) -> Result<(), TweenError> {
        let slot = slot.into();
        self.update(|s| s.start = slot)
    }

    pub fn set_end(&self, slot: impl Into<Slot>) -> Result<(), TweenError> {
        let slot = slot.into();
        self.update(|s| s.end = slot)
    }

    /// Read `t` from `slot` instead of the global clock.
    pub fn set_time_slot(&self, slot: impl Into<Slot>) -> Result<(), TweenError> {
        let time = TimeSource::Slot(slot.into());
        self.update(|s| s.time = time)
    }

    /// Track the global clock; see [`TimeSource::global`].
    pub fn set_global_window(&self, start_time: f64, duration: f64) -> Result<(), TweenError> {
        self.update(|s| s.time = TimeSource::global(start_time, duration))
    }

    pub fn set_easing(&self, easing: EasingMode) -> Result<(), TweenError> {
        self.update(|s| s.easing = easing)
    }

    pub fn set_extend(&self, extend: ExtendMode) -> Result<(), TweenError> {
        self.update(|s| s.extend = extend)
    }

    fn update(&self, f: impl FnOnce(&mut InterpolationState)) -> Result<(), TweenError> {
        let mut state = self.state.try_borrow_mut().map_err(|_| TweenError::Busy)?;
        f(&mut state);
        Ok(())
    }
}
