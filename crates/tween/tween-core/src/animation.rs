//! Animations: anything that produces a float from the clock.
//!
//! The engine ships one strategy, [`Interpolation`]. Hosts can plug in their
//! own through [`Animate`] (a plain closure works). An optional on-end hook
//! rewrites the value an animation reports once it has run past its end.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::clock::Clock;
use crate::interpolate::{Interpolation, InterpolationState};
use crate::slot::AnimationRef;

/// One evaluation result before the on-end hook is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sample {
    Value(f64),
    /// Time is past the end under a holding extend mode; carries the end value.
    Ended(f64),
}

/// Pluggable evaluation strategy.
pub trait Animate {
    fn sample(&self, clock: &Clock) -> Sample;
}

impl<F: Fn(&Clock) -> f64> Animate for F {
    fn sample(&self, clock: &Clock) -> Sample {
        Sample::Value(self(clock))
    }
}

/// Hook run when an animation read through a slot has passed its end.
///
/// Receives the reading slot and the end value and returns what that slot
/// reports. One animation shared by several slots sees each of them here.
pub type OnEnd = Rc<dyn Fn(&AnimationRef, f64) -> f64>;

enum Strategy {
    Interpolate(Interpolation),
    Custom(Box<dyn Animate>),
}

pub struct Animation {
    strategy: Strategy,
    on_end: RefCell<Option<OnEnd>>,
}

impl Animation {
    pub fn interpolate(state: InterpolationState) -> Self {
        Self::with_strategy(Strategy::Interpolate(Interpolation::new(state)))
    }

    pub fn custom(animate: impl Animate + 'static) -> Self {
        Self::with_strategy(Strategy::Custom(Box::new(animate)))
    }

    pub fn from_fn(f: impl Fn(&Clock) -> f64 + 'static) -> Self {
        Self::custom(f)
    }

    fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            on_end: RefCell::new(None),
        }
    }

    /// The interpolation behind this animation, for reconfiguration.
    pub fn interpolation(&self) -> Option<&Interpolation> {
        match &self.strategy {
            Strategy::Interpolate(interp) => Some(interp),
            Strategy::Custom(_) => None,
        }
    }

    pub fn set_on_end(&self, hook: Option<OnEnd>) {
        *self.on_end.borrow_mut() = hook;
    }

    pub fn has_on_end(&self) -> bool {
        self.on_end.borrow().is_some()
    }

    pub fn sample(&self, clock: &Clock) -> Sample {
        match &self.strategy {
            Strategy::Interpolate(interp) => interp.sample(clock),
            Strategy::Custom(animate) => animate.sample(clock),
        }
    }

    /// Value of the animation on its own. An ended sample reports the end
    /// value; the on-end hook only runs for slot reads.
    pub fn evaluate(&self, clock: &Clock) -> f64 {
        match self.sample(clock) {
            Sample::Value(value) | Sample::Ended(value) => value,
        }
    }

    /// Value as read through `slot`; an ended sample is handed to the on-end
    /// hook together with the slot.
    pub fn evaluate_in(&self, slot: &AnimationRef, clock: &Clock) -> f64 {
        match self.sample(clock) {
            Sample::Value(value) => value,
            Sample::Ended(end) => {
                // Release the borrow before calling so the hook may replace itself.
                let hook = self.on_end.borrow().clone();
                match hook {
                    Some(hook) => {
                        debug!("animation past end; running on-end hook with {end}");
                        hook(slot, end)
                    }
                    None => end,
                }
            }
        }
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.strategy {
            Strategy::Interpolate(_) => "interpolate",
            Strategy::Custom(_) => "custom",
        };
        f.debug_struct("Animation")
            .field("strategy", &kind)
            .field("on_end", &self.has_on_end())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct EndsAt(f64);

    impl Animate for EndsAt {
        fn sample(&self, clock: &Clock) -> Sample {
            if clock.time() > self.0 {
                Sample::Ended(self.0)
            } else {
                Sample::Value(clock.time())
            }
        }
    }

    #[test]
    fn closures_are_animations() {
        let anim = Animation::from_fn(|_: &Clock| 4.0);
        assert_eq!(anim.evaluate(&Clock::new()), 4.0);
        assert!(anim.interpolation().is_none());
    }

    #[test]
    fn on_end_rewrites_ended_samples_only() {
        let calls = Rc::new(Cell::new(0));
        let anim = Rc::new(Animation::custom(EndsAt(2.0)));
        let slot = AnimationRef::new(anim.clone());
        let seen = calls.clone();
        anim.set_on_end(Some(Rc::new(move |_: &AnimationRef, end: f64| {
            seen.set(seen.get() + 1);
            end * 10.0
        })));

        assert_eq!(anim.evaluate_in(&slot, &Clock::starting_at(1.0)), 1.0);
        assert_eq!(calls.get(), 0);
        assert_eq!(anim.evaluate_in(&slot, &Clock::starting_at(3.0)), 20.0);
        assert_eq!(calls.get(), 1);

        // Outside a slot the end value is reported as is.
        assert_eq!(anim.evaluate(&Clock::starting_at(3.0)), 2.0);
        assert_eq!(calls.get(), 1);

        anim.set_on_end(None);
        assert_eq!(anim.evaluate_in(&slot, &Clock::starting_at(3.0)), 2.0);
        assert_eq!(calls.get(), 1);
    }
}
