//! Cubic Bézier curves driven like an interpolation.

use crate::animation::{Animate, Sample};
use crate::clock::Clock;
use crate::extend::{ExtendMode, Extended};
use crate::interpolate::TimeSource;

/// Follows the cubic Bézier through `points` as the time ratio runs 0 to 1.
///
/// Time and extend handling match [`InterpolationState`](crate::InterpolationState):
/// under constant extend the curve holds `points[0]` before the window and
/// reports `points[3]` as ended after it.
#[derive(Clone, Debug)]
pub struct Bezier3 {
    pub points: [f64; 4],
    pub time: TimeSource,
    pub extend: ExtendMode,
}

impl Bezier3 {
    pub fn new(points: [f64; 4], time: impl Into<TimeSource>) -> Self {
        Self {
            points,
            time: time.into(),
            extend: ExtendMode::default(),
        }
    }

    pub fn with_extend(mut self, extend: ExtendMode) -> Self {
        self.extend = extend;
        self
    }

    /// Bernstein form of the curve at `t`.
    pub fn point_at(&self, t: f64) -> f64 {
        let [p0, p1, p2, p3] = self.points;
        let u = 1.0 - t;
        u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
    }
}

impl Animate for Bezier3 {
    fn sample(&self, clock: &Clock) -> Sample {
        match self.extend.normalize(self.time.ratio(clock)) {
            Extended::Start => Sample::Value(self.points[0]),
            Extended::End => Sample::Ended(self.points[3]),
            Extended::Ratio(t) => Sample::Value(self.point_at(t)),
        }
    }
}
