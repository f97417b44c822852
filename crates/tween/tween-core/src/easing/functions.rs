//! Easing curves as plain functions of normalized time.
//!
//! Each function maps `t` (conventionally in [0,1]) to eased progress `x`.
//! Inputs outside [0,1] are not clamped; extrapolating extend modes feed them
//! through unchanged.

use std::f64::consts::{FRAC_PI_2, PI};

/// Overshoot amount for the back family.
pub const BACK_OVERSHOOT: f64 = 1.70158;
/// Extra overshoot factor applied by `in_out_back`.
const BACK_IN_OUT_SCALE: f64 = 1.525;

const BOUNCE_GAIN: f64 = 7.5625;
const BOUNCE_SPAN: f64 = 2.75;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, x: f64) -> f64 {
    a + (b - a) * x
}

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// `1 - cos(t·π/2)`, written through `sin` so both endpoints are exact.
#[inline]
pub fn in_sine(t: f64) -> f64 {
    1.0 - ((1.0 - t) * FRAC_PI_2).sin()
}

#[inline]
pub fn out_sine(t: f64) -> f64 {
    (t * FRAC_PI_2).sin()
}

#[inline]
pub fn in_out_sine(t: f64) -> f64 {
    -(t * PI).cos() * 0.5 + 0.5
}

/// `(e^t - 1) / (e - 1)`; the denominator uses the same `exp` so `f(1)` is exact.
#[inline]
pub fn exponential(t: f64) -> f64 {
    (t.exp() - 1.0) / (1f64.exp() - 1.0)
}

#[inline]
pub fn in_quad(t: f64) -> f64 {
    t * t
}

#[inline]
pub fn out_quad(t: f64) -> f64 {
    -t * t + 2.0 * t
}

#[inline]
pub fn in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        t * t * 2.0
    } else {
        -2.0 * t * t + 4.0 * t - 1.0
    }
}

#[inline]
pub fn in_cubic(t: f64) -> f64 {
    t * t * t
}

#[inline]
pub fn out_cubic(t: f64) -> f64 {
    (t - 1.0).powi(3) + 1.0
}

#[inline]
pub fn in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t.powi(3)
    } else {
        let t = t - 2.0;
        0.5 * t.powi(3) + 1.0
    }
}

#[inline]
pub fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
pub fn out_circ(t: f64) -> f64 {
    let t = t - 1.0;
    (1.0 - t * t).sqrt()
}

#[inline]
pub fn in_out_circ(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * (1.0 - (1.0 - t * t).sqrt())
    } else {
        let t = t - 2.0;
        0.5 * ((1.0 - t * t).sqrt() + 1.0)
    }
}

#[inline]
pub fn in_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    t * t * ((s + 1.0) * t - s)
}

#[inline]
pub fn out_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = t - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

#[inline]
pub fn in_out_back(t: f64) -> f64 {
    let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * (t * t * ((s + 1.0) * t - s))
    } else {
        let t = t - 2.0;
        0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
    }
}

/// Four parabolic hops, each `7.5625 * t'^2 + offset` on a shifted `t'`.
pub fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_SPAN {
        BOUNCE_GAIN * t * t
    } else if t < 2.0 / BOUNCE_SPAN {
        let t = t - 1.5 / BOUNCE_SPAN;
        BOUNCE_GAIN * t * t + 0.75
    } else if t < 2.5 / BOUNCE_SPAN {
        let t = t - 2.25 / BOUNCE_SPAN;
        BOUNCE_GAIN * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_SPAN;
        BOUNCE_GAIN * t * t + 0.984375
    }
}

#[inline]
pub fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

#[inline]
pub fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        0.5 - out_bounce(1.0 - t * 2.0) * 0.5
    } else {
        out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
    }
}
