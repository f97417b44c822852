//! Tween Core
//!
//! Scalar interpolation for animated properties. An [`Animation`] reads its
//! inputs through [`Slot`]s (constants, host-owned values or other
//! animations), maps clock time onto a ratio, normalizes it with an
//! [`ExtendMode`], eases it with an [`EasingMode`] and blends start to end.
//! [`Chain`], [`Bezier3`], [`Wrap`] and [`Rate`] build on the same slots.
//!
//! Everything here is single-threaded and evaluated on demand; the host
//! advances one [`Clock`] per frame and passes it to every evaluation.

pub mod animation;
pub mod bezier;
pub mod chain;
pub mod clock;
pub mod config;
pub mod easing;
pub mod error;
pub mod extend;
pub mod interpolate;
pub mod modifiers;
pub mod slot;
pub mod time_window;
pub mod tween_spec;

// Re-exports for consumers (binding layers)
pub use animation::{Animate, Animation, OnEnd, Sample};
pub use bezier::Bezier3;
pub use chain::{Chain, ChainSpec};
pub use clock::Clock;
pub use config::Config;
pub use easing::EasingMode;
pub use error::TweenError;
pub use extend::{ExtendMode, Extended};
pub use interpolate::{Interpolation, InterpolationState, TimeSource};
pub use modifiers::{Rate, Wrap};
pub use slot::{AnimationRef, ExternalFn, ExternalSource, Slot};
pub use time_window::TimeWindow;
pub use tween_spec::{parse_tween_json, TimeSpec, TweenSpec};
