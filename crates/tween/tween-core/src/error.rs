use thiserror::Error;

/// Errors raised while describing or reconfiguring tweens.
///
/// Evaluation itself never fails: cycles and bad numeric configuration are
/// handled in place (see [`Slot::read`](crate::Slot::read)).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TweenError {
    #[error("unknown easing mode '{0}'")]
    UnknownEasing(String),
    #[error("unknown extend mode '{0}'")]
    UnknownExtend(String),
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("either dt or endt must be given")]
    MissingEnd,
    #[error("time window is empty: startt {start} must be before endt {end}")]
    EmptyWindow { start: f64, end: f64 },
    #[error("tween json parse error: {0}")]
    Parse(String),
    #[error("interpolation is being evaluated and cannot be reconfigured")]
    Busy,
    #[error("a chain needs at least one segment")]
    EmptyChain,
    #[error("component count mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
