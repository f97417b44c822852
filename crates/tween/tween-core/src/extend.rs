//! Extend modes: what a tween does with time ratios outside [0,1].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Ratios up to this much past 1.0 are not wrapped by `Repeat`, so float
/// noise at the end of a cycle does not snap the value back to the start.
pub const REPEAT_TOLERANCE: f64 = 1.0001;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ExtendMode {
    /// Hold `start` before the window and `end` after it.
    #[default]
    Constant,
    /// Keep following the curve outside the window.
    Extrapolate,
    /// Start over from `start` after reaching `end`.
    Repeat,
    /// Ping-pong between `start` and `end`.
    Reverse,
}

/// Result of normalizing a raw ratio.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Extended {
    /// Feed this ratio to the easing curve.
    Ratio(f64),
    /// Before the window under `Constant`: the value is `start`.
    Start,
    /// Past the window under `Constant`: the value is `end` (after on-end).
    End,
}

impl ExtendMode {
    pub const ALL: [ExtendMode; 4] = [
        ExtendMode::Constant,
        ExtendMode::Extrapolate,
        ExtendMode::Repeat,
        ExtendMode::Reverse,
    ];

    pub fn code(self) -> i32 {
        match self {
            ExtendMode::Constant => 1,
            ExtendMode::Extrapolate => 2,
            ExtendMode::Repeat => 3,
            ExtendMode::Reverse => 4,
        }
    }

    /// Unknown codes leave the ratio untouched, i.e. behave as `Extrapolate`.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ExtendMode::Constant,
            3 => ExtendMode::Repeat,
            4 => ExtendMode::Reverse,
            _ => ExtendMode::Extrapolate,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExtendMode::Constant => "constant",
            ExtendMode::Extrapolate => "extrapolate",
            ExtendMode::Repeat => "repeat",
            ExtendMode::Reverse => "reverse",
        }
    }

    #[inline]
    pub fn normalize(self, t: f64) -> Extended {
        normalize(self, t)
    }
}

/// Map a raw time ratio according to `mode`.
///
/// Integer parts are taken with truncation toward zero. NaN fails every
/// comparison and comes back as `Ratio(NaN)`.
pub fn normalize(mode: ExtendMode, t: f64) -> Extended {
    match mode {
        ExtendMode::Constant => {
            if t < 0.0 {
                Extended::Start
            } else if t > 1.0 {
                Extended::End
            } else {
                Extended::Ratio(t)
            }
        }
        ExtendMode::Extrapolate => Extended::Ratio(t),
        ExtendMode::Repeat => {
            if t > REPEAT_TOLERANCE {
                Extended::Ratio(t - t.trunc())
            } else if t < 0.0 {
                Extended::Ratio(1.0 + t - t.trunc())
            } else {
                Extended::Ratio(t)
            }
        }
        ExtendMode::Reverse => {
            let t = if t < 0.0 { -t } else { t };
            let whole = t.trunc();
            let frac = t - whole;
            if whole % 2.0 == 1.0 {
                Extended::Ratio(1.0 - frac)
            } else {
                Extended::Ratio(frac)
            }
        }
    }
}

impl FromStr for ExtendMode {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .ok_or_else(|| TweenError::UnknownExtend(s.to_string()))
    }
}

impl TryFrom<String> for ExtendMode {
    type Error = TweenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExtendMode> for &'static str {
    fn from(mode: ExtendMode) -> Self {
        mode.name()
    }
}

impl fmt::Display for ExtendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
