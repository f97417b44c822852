use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::clock::Clock;
use crate::config::Config;
use crate::easing::EasingMode;
use crate::error::TweenError;
use crate::extend::ExtendMode;
use crate::interpolate::{InterpolationState, TimeSource};
use crate::slot::Slot;
use crate::time_window::TimeWindow;

/// Serializable recipe for an interpolation.
///
/// Any field may be left out. Missing fields are filled when the tween is
/// built: `start` from the value the target held before (see
/// [`TweenSpec::build_from`]), the time window from the clock, and the modes
/// from [`Config`]. When `t` is given the window fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TweenSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<TimeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<ExtendMode>,
    #[serde(default, alias = "method", skip_serializing_if = "Option::is_none")]
    pub easing: Option<EasingMode>,
}

/// Explicit time ratio: a fixed number or another tween (which defaults to
/// running from 0 to 1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeSpec {
    Fixed(f64),
    Tween(Box<TweenSpec>),
}

/// Parse a tween description from JSON.
pub fn parse_tween_json(s: &str) -> Result<TweenSpec, TweenError> {
    serde_json::from_str(s).map_err(|e| TweenError::Parse(e.to_string()))
}

impl TweenSpec {
    pub fn lerp() -> Self {
        Self::with_easing(EasingMode::Linear)
    }

    /// In-out easing of `family` (`sine`, `quad`, `cubic`, `circ`, `back`, `bounce`).
    pub fn ease(family: &str) -> Result<Self, TweenError> {
        Self::named(format!("ease_{family}"))
    }

    pub fn ease_in(family: &str) -> Result<Self, TweenError> {
        Self::named(format!("ease_in_{family}"))
    }

    pub fn ease_out(family: &str) -> Result<Self, TweenError> {
        Self::named(format!("ease_out_{family}"))
    }

    fn named(name: String) -> Result<Self, TweenError> {
        Ok(Self::with_easing(name.parse()?))
    }

    fn with_easing(easing: EasingMode) -> Self {
        Self {
            easing: Some(easing),
            ..Self::default()
        }
    }

    pub fn start_value(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end_value(mut self, end: f64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn startt(mut self, startt: f64) -> Self {
        self.startt = Some(startt);
        self
    }

    pub fn endt(mut self, endt: f64) -> Self {
        self.endt = Some(endt);
        self
    }

    pub fn dt(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    pub fn at(mut self, t: f64) -> Self {
        self.t = Some(TimeSpec::Fixed(t));
        self
    }

    pub fn driven_by(mut self, t: TweenSpec) -> Self {
        self.t = Some(TimeSpec::Tween(Box::new(t)));
        self
    }

    pub fn extend(mut self, extend: ExtendMode) -> Self {
        self.extend = Some(extend);
        self
    }

    /// One description per component of a vector tween, zipping `starts`
    /// with `ends`. A side left as `None` stays as this description has it.
    pub fn per_component(
        &self,
        starts: Option<&[f64]>,
        ends: Option<&[f64]>,
    ) -> Result<Vec<TweenSpec>, TweenError> {
        let len = match (starts, ends) {
            (Some(s), Some(e)) if s.len() != e.len() => {
                return Err(TweenError::LengthMismatch {
                    expected: s.len(),
                    found: e.len(),
                })
            }
            (Some(s), _) => s.len(),
            (None, Some(e)) => e.len(),
            (None, None) => return Err(TweenError::MissingField("end")),
        };
        Ok((0..len)
            .map(|i| {
                let mut spec = self.clone();
                spec.start = starts.and_then(|s| s.get(i).copied()).or(spec.start);
                spec.end = ends.and_then(|e| e.get(i).copied()).or(spec.end);
                spec
            })
            .collect())
    }

    /// Build an animation; `start` and `end` must both be present.
    pub fn build(&self, cfg: &Config, clock: &Clock) -> Result<Rc<Animation>, TweenError> {
        self.build_with(cfg, clock, None, None).map(|built| built.anim)
    }

    /// Build an animation replacing a target whose value is `current`;
    /// a missing `start` continues from there.
    pub fn build_from(
        &self,
        cfg: &Config,
        clock: &Clock,
        current: f64,
    ) -> Result<Rc<Animation>, TweenError> {
        self.build_with(cfg, clock, Some(current), None)
            .map(|built| built.anim)
    }

    pub(crate) fn build_with(
        &self,
        cfg: &Config,
        clock: &Clock,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Result<Built, TweenError> {
        let start = self
            .start
            .or(start)
            .ok_or(TweenError::MissingField("start"))?;
        let end = self.end.or(end).ok_or(TweenError::MissingField("end"))?;

        let (time, window) = match &self.t {
            Some(TimeSpec::Fixed(t)) => (TimeSource::Slot(Slot::constant(*t)), None),
            Some(TimeSpec::Tween(inner)) => {
                let driver = inner.build_with(cfg, clock, Some(0.0), Some(1.0))?;
                (TimeSource::Slot(Slot::animation(driver.anim)), None)
            }
            None => {
                let window = TimeWindow::resolve(self.startt, self.endt, self.dt, clock)?;
                (window.time_source(), Some(window))
            }
        };

        let state = InterpolationState::new(start, end, time)
            .with_easing(self.easing.unwrap_or(cfg.default_easing))
            .with_extend(self.extend.unwrap_or(cfg.default_extend));
        Ok(Built {
            anim: Rc::new(Animation::interpolate(state)),
            end,
            window,
        })
    }
}

/// A built tween plus what a following chain segment continues from.
pub(crate) struct Built {
    pub(crate) anim: Rc<Animation>,
    pub(crate) end: f64,
    /// `None` when time comes from `t` rather than the clock.
    pub(crate) window: Option<TimeWindow>,
}
