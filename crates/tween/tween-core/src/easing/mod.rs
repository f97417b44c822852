//! Easing modes and their names.
//!
//! `EasingMode` selects one of the curves in [`functions`]. Modes have a
//! canonical snake_case name (used by serde) and a stable numeric code for
//! hosts that pass plain integers; unknown codes fall back to linear.

pub mod functions;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum EasingMode {
    #[default]
    Linear,
    /// Legacy name for [`EasingMode::InSine`].
    Cosine,
    /// Legacy name for [`EasingMode::OutSine`].
    Sine,
    Exponential,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
    InSine,
    OutSine,
    InOutSine,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl EasingMode {
    pub const ALL: [EasingMode; 22] = [
        EasingMode::Linear,
        EasingMode::Cosine,
        EasingMode::Sine,
        EasingMode::Exponential,
        EasingMode::InCirc,
        EasingMode::OutCirc,
        EasingMode::InOutCirc,
        EasingMode::InBack,
        EasingMode::OutBack,
        EasingMode::InOutBack,
        EasingMode::InBounce,
        EasingMode::OutBounce,
        EasingMode::InOutBounce,
        EasingMode::InSine,
        EasingMode::OutSine,
        EasingMode::InOutSine,
        EasingMode::InQuad,
        EasingMode::OutQuad,
        EasingMode::InOutQuad,
        EasingMode::InCubic,
        EasingMode::OutCubic,
        EasingMode::InOutCubic,
    ];

    /// Map eased progress for normalized time `t`.
    pub fn apply(self, t: f64) -> f64 {
        use functions::*;
        match self {
            EasingMode::Linear => linear(t),
            EasingMode::Cosine | EasingMode::InSine => in_sine(t),
            EasingMode::Sine | EasingMode::OutSine => out_sine(t),
            EasingMode::InOutSine => in_out_sine(t),
            EasingMode::Exponential => exponential(t),
            EasingMode::InCirc => in_circ(t),
            EasingMode::OutCirc => out_circ(t),
            EasingMode::InOutCirc => in_out_circ(t),
            EasingMode::InBack => in_back(t),
            EasingMode::OutBack => out_back(t),
            EasingMode::InOutBack => in_out_back(t),
            EasingMode::InBounce => in_bounce(t),
            EasingMode::OutBounce => out_bounce(t),
            EasingMode::InOutBounce => in_out_bounce(t),
            EasingMode::InQuad => in_quad(t),
            EasingMode::OutQuad => out_quad(t),
            EasingMode::InOutQuad => in_out_quad(t),
            EasingMode::InCubic => in_cubic(t),
            EasingMode::OutCubic => out_cubic(t),
            EasingMode::InOutCubic => in_out_cubic(t),
        }
    }

    /// Numeric code, 1-based in declaration order.
    pub fn code(self) -> i32 {
        match Self::ALL.iter().position(|m| *m == self) {
            Some(idx) => idx as i32 + 1,
            None => 1,
        }
    }

    /// Inverse of [`EasingMode::code`]; anything out of range is linear.
    pub fn from_code(code: i32) -> Self {
        code.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| Self::ALL.get(idx).copied())
            .unwrap_or(EasingMode::Linear)
    }

    /// Whether the curve may leave [0,1] for `t` inside [0,1].
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            EasingMode::InBack | EasingMode::OutBack | EasingMode::InOutBack
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            EasingMode::Linear => "linear",
            EasingMode::Cosine => "cosine",
            EasingMode::Sine => "sine",
            EasingMode::Exponential => "exponential",
            EasingMode::InCirc => "in_circ",
            EasingMode::OutCirc => "out_circ",
            EasingMode::InOutCirc => "in_out_circ",
            EasingMode::InBack => "in_back",
            EasingMode::OutBack => "out_back",
            EasingMode::InOutBack => "in_out_back",
            EasingMode::InBounce => "in_bounce",
            EasingMode::OutBounce => "out_bounce",
            EasingMode::InOutBounce => "in_out_bounce",
            EasingMode::InSine => "in_sine",
            EasingMode::OutSine => "out_sine",
            EasingMode::InOutSine => "in_out_sine",
            EasingMode::InQuad => "in_quad",
            EasingMode::OutQuad => "out_quad",
            EasingMode::InOutQuad => "in_out_quad",
            EasingMode::InCubic => "in_cubic",
            EasingMode::OutCubic => "out_cubic",
            EasingMode::InOutCubic => "in_out_cubic",
        }
    }

    /// Resolve an `ease_*` authoring alias: `ease_<family>` is in-out,
    /// `ease_in_<family>` / `ease_out_<family>` are the one-sided variants.
    fn from_alias(name: &str) -> Option<Self> {
        if name == "lerp" {
            return Some(EasingMode::Linear);
        }
        let rest = name.strip_prefix("ease_")?;
        let (direction, family) = if let Some(family) = rest.strip_prefix("in_") {
            ("in", family)
        } else if let Some(family) = rest.strip_prefix("out_") {
            ("out", family)
        } else {
            ("in_out", rest)
        };
        if family == "exponential" {
            return (direction == "in").then_some(EasingMode::Exponential);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().strip_prefix(direction).and_then(|s| s.strip_prefix('_')) == Some(family))
    }
}

impl FromStr for EasingMode {
    type Err = TweenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name() == name)
            .or_else(|| Self::from_alias(&name))
            .ok_or_else(|| TweenError::UnknownEasing(s.to_string()))
    }
}

impl TryFrom<String> for EasingMode {
    type Error = TweenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EasingMode> for &'static str {
    fn from(mode: EasingMode) -> Self {
        mode.name()
    }
}

impl fmt::Display for EasingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for mode in EasingMode::ALL {
            assert_eq!(EasingMode::from_code(mode.code()), mode);
        }
        assert_eq!(EasingMode::Linear.code(), 1);
        assert_eq!(EasingMode::InOutCubic.code(), 22);
    }

    #[test]
    fn unknown_codes_fall_back_to_linear() {
        assert_eq!(EasingMode::from_code(0), EasingMode::Linear);
        assert_eq!(EasingMode::from_code(-7), EasingMode::Linear);
        assert_eq!(EasingMode::from_code(23), EasingMode::Linear);
        assert_eq!(EasingMode::from_code(i32::MIN), EasingMode::Linear);
        assert_eq!(EasingMode::from_code(i32::MAX), EasingMode::Linear);
    }

    #[test]
    fn legacy_names_share_curves() {
        for t in [0.0, 0.25, 0.5, 0.8, 1.0] {
            assert_eq!(EasingMode::Cosine.apply(t), EasingMode::InSine.apply(t));
            assert_eq!(EasingMode::Sine.apply(t), EasingMode::OutSine.apply(t));
        }
    }

    #[test]
    fn parses_canonical_names_and_aliases() {
        for mode in EasingMode::ALL {
            assert_eq!(mode.name().parse::<EasingMode>().unwrap(), mode);
        }
        assert_eq!("lerp".parse::<EasingMode>().unwrap(), EasingMode::Linear);
        assert_eq!("ease_sine".parse::<EasingMode>().unwrap(), EasingMode::InOutSine);
        assert_eq!("ease_in_quad".parse::<EasingMode>().unwrap(), EasingMode::InQuad);
        assert_eq!("ease_out_bounce".parse::<EasingMode>().unwrap(), EasingMode::OutBounce);
        assert_eq!("ease_back".parse::<EasingMode>().unwrap(), EasingMode::InOutBack);
        assert_eq!(
            "ease_in_exponential".parse::<EasingMode>().unwrap(),
            EasingMode::Exponential
        );
        assert_eq!(" In_Circ ".parse::<EasingMode>().unwrap(), EasingMode::InCirc);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "wobble".parse::<EasingMode>(),
            Err(TweenError::UnknownEasing("wobble".into()))
        );
        assert!("ease_out_exponential".parse::<EasingMode>().is_err());
        assert!("ease_".parse::<EasingMode>().is_err());
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&EasingMode::InOutBounce).unwrap();
        assert_eq!(json, "\"in_out_bounce\"");
        let mode: EasingMode = serde_json::from_str("\"ease_in_cubic\"").unwrap();
        assert_eq!(mode, EasingMode::InCubic);
        assert!(serde_json::from_str::<EasingMode>("\"nope\"").is_err());
    }
}
