//! Time cursor shared by every animation evaluated in a frame.
//!
//! The host owns one `Clock`, mutates it between frames and passes it by
//! reference into [`Animation::evaluate`](crate::Animation::evaluate).
//! Every mutation bumps `generation`, which consumers may use to invalidate
//! values they cached themselves; the core never caches.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    time: f64,
    generation: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `time`. Construction is not a mutation; generation is 0.
    pub fn starting_at(time: f64) -> Self {
        Self {
            time,
            generation: 0,
        }
    }

    #[inline]
    pub fn set_time(&mut self, time: f64) {
        self.time = time;
        self.bump();
    }

    #[inline]
    pub fn advance_time(&mut self, dt: f64) {
        self.time += dt;
        self.bump();
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Mark derived values stale without moving time.
    #[inline]
    pub fn invalidate(&mut self) {
        self.bump();
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn bump(&mut self) {
        self.generation += 1;
    }
}
