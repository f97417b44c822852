//! Slots: the float sources an interpolation reads each evaluation.
//!
//! A slot is a constant, a value owned by the binding layer, or another
//! animation. Animation slots carry their own recursion guard so a slot that
//! ends up reading itself yields `0.0` with a warning instead of overflowing
//! the stack.
//!
//! The guard is per slot instance and only catches re-entry through that
//! same instance. A longer cycle routed through distinct slots is stopped at
//! whichever slot instance repeats first. None of this is thread-safe; the
//! `Rc`/`Cell` fields keep slots on one thread.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::warn;

use crate::animation::Animation;
use crate::clock::Clock;

/// Value provided by the binding layer (a sprite attribute, a physics body).
pub trait ExternalSource: fmt::Debug {
    fn read(&self) -> f64;
}

impl ExternalSource for Cell<f64> {
    fn read(&self) -> f64 {
        self.get()
    }
}

/// Adapts a closure into an [`ExternalSource`].
pub struct ExternalFn<F>(pub F);

impl<F: Fn() -> f64> ExternalSource for ExternalFn<F> {
    fn read(&self) -> f64 {
        (self.0)()
    }
}

impl<F> fmt::Debug for ExternalFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExternalFn(..)")
    }
}

/// Slot reading another animation.
///
/// This is the context an on-end hook receives. A hook may [`settle`] the
/// slot on the end value so later reads stop evaluating the animation.
///
/// [`settle`]: AnimationRef::settle
pub struct AnimationRef {
    anim: Rc<Animation>,
    busy: Cell<bool>,
    settled: Cell<Option<f64>>,
}

impl AnimationRef {
    pub fn new(anim: Rc<Animation>) -> Self {
        Self {
            anim,
            busy: Cell::new(false),
            settled: Cell::new(None),
        }
    }

    pub fn animation(&self) -> &Rc<Animation> {
        &self.anim
    }

    /// True only while this slot is being read.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Pin this slot to `value`. Only this slot instance is affected; other
    /// slots reading the same animation keep evaluating it.
    pub fn settle(&self, value: f64) {
        self.settled.set(Some(value));
    }

    pub fn settled(&self) -> Option<f64> {
        self.settled.get()
    }

    pub fn unsettle(&self) {
        self.settled.set(None);
    }

    fn read(&self, clock: &Clock) -> f64 {
        if let Some(value) = self.settled.get() {
            return value;
        }
        let value = if self.busy.replace(true) {
            warn!("circular animation reference detected; reading 0.0");
            0.0
        } else {
            self.anim.evaluate_in(self, clock)
        };
        self.busy.set(false);
        value
    }
}

impl Clone for AnimationRef {
    /// A clone is a new slot instance with its own idle guard. A settled
    /// value carries over.
    fn clone(&self) -> Self {
        let copy = Self::new(Rc::clone(&self.anim));
        copy.settled.set(self.settled.get());
        copy
    }
}

// Animations may reference themselves, so never recurse into them here.
impl fmt::Debug for AnimationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRef")
            .field("anim", &Rc::as_ptr(&self.anim))
            .field("busy", &self.busy.get())
            .field("settled", &self.settled.get())
            .finish()
    }
}

#[derive(Clone, Debug)]
pub enum Slot {
    Animation(AnimationRef),
    Local(f64),
    External(Rc<dyn ExternalSource>),
}

impl Slot {
    pub fn constant(value: f64) -> Self {
        Slot::Local(value)
    }

    /// Read `anim` through a new slot instance.
    ///
    /// The slot holds a strong reference. An animation that reaches itself
    /// through its own slots is an `Rc` cycle and is never dropped until one
    /// of those slots is reassigned (for example with
    /// [`Interpolation::set_time_slot`](crate::Interpolation::set_time_slot)).
    pub fn animation(anim: Rc<Animation>) -> Self {
        Slot::Animation(AnimationRef::new(anim))
    }

    pub fn external(source: Rc<dyn ExternalSource>) -> Self {
        Slot::External(source)
    }

    /// Resolve the slot to a float. Never fails: a cycle reads as `0.0`.
    pub fn read(&self, clock: &Clock) -> f64 {
        match self {
            Slot::Animation(anim) => anim.read(clock),
            Slot::Local(value) => *value,
            Slot::External(source) => source.read(),
        }
    }

    pub fn is_animation(&self) -> bool {
        matches!(self, Slot::Animation(_))
    }

    pub fn as_animation(&self) -> Option<&Rc<Animation>> {
        self.as_animation_ref().map(AnimationRef::animation)
    }

    pub fn as_animation_ref(&self) -> Option<&AnimationRef> {
        match self {
            Slot::Animation(anim) => Some(anim),
            _ => None,
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Local(0.0)
    }
}

impl From<f64> for Slot {
    fn from(value: f64) -> Self {
        Slot::Local(value)
    }
}

impl From<Rc<Animation>> for Slot {
    fn from(anim: Rc<Animation>) -> Self {
        Slot::animation(anim)
    }
}

impl From<Rc<dyn ExternalSource>> for Slot {
    fn from(source: Rc<dyn ExternalSource>) -> Self {
        Slot::External(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_and_external() {
        let clock = Clock::new();
        assert_eq!(Slot::constant(4.0).read(&clock), 4.0);

        let cell = Rc::new(Cell::new(1.5));
        let slot = Slot::external(cell.clone());
        assert_eq!(slot.read(&clock), 1.5);
        cell.set(-2.0);
        assert_eq!(slot.read(&clock), -2.0);

        let slot = Slot::external(Rc::new(ExternalFn(|| 9.0)));
        assert_eq!(slot.read(&clock), 9.0);
    }

    #[test]
    fn animation_slot_reads_through() {
        let clock = Clock::starting_at(3.0);
        let anim = Rc::new(Animation::from_fn(|clock: &Clock| clock.time() * 2.0));
        let slot = Slot::animation(anim);
        assert!(slot.is_animation());
        assert_eq!(slot.read(&clock), 6.0);
        match &slot {
            Slot::Animation(r) => assert!(!r.is_busy()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn cloned_slot_has_fresh_guard() {
        let anim = Rc::new(Animation::from_fn(|_: &Clock| 1.0));
        let slot = AnimationRef::new(anim);
        slot.busy.set(true);
        let copy = slot.clone();
        assert!(!copy.is_busy());
        assert!(Rc::ptr_eq(copy.animation(), slot.animation()));
    }

    #[test]
    fn settled_slot_stops_evaluating() {
        let anim = Rc::new(Animation::from_fn(|clock: &Clock| clock.time()));
        let slot = Slot::animation(anim.clone());
        let other = Slot::animation(anim);
        let anim_ref = slot.as_animation_ref().unwrap();

        anim_ref.settle(7.0);
        assert_eq!(slot.read(&Clock::starting_at(3.0)), 7.0);
        assert_eq!(other.read(&Clock::starting_at(3.0)), 3.0);
        assert_eq!(slot.clone().read(&Clock::new()), 7.0);

        anim_ref.unsettle();
        assert_eq!(slot.read(&Clock::starting_at(3.0)), 3.0);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Slot::default().read(&Clock::new()), 0.0);
        assert!(Slot::default().as_animation().is_none());
    }
}
