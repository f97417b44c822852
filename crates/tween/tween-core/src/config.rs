//! Defaults applied when building tweens from descriptions.

use serde::{Deserialize, Serialize};

use crate::easing::EasingMode;
use crate::extend::ExtendMode;

/// Keep this minimal; expand without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extend mode for descriptions that do not name one.
    pub default_extend: ExtendMode,
    /// Easing for descriptions that do not name one.
    pub default_easing: EasingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_extend: ExtendMode::Constant,
            default_easing: EasingMode::Linear,
        }
    }
}
