//! Sequential tweens.
//!
//! A [`Chain`] plays its segments one after another: a segment is sampled
//! until it reports that it has ended, then the next one takes over. Once
//! the last segment has ended the chain itself reports the end, so an
//! on-end hook on the chain runs exactly as for a single tween.
//!
//! [`ChainSpec`] builds a chain from descriptions. Each segment's `end` and
//! window end are handed to the next as its missing `start` and `startt`.

use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::animation::{Animate, Animation, Sample};
use crate::clock::Clock;
use crate::config::Config;
use crate::error::TweenError;
use crate::tween_spec::TweenSpec;

/// Segments sampled in order.
///
/// Segments are sampled directly, so their own on-end hooks never run. A
/// segment that never ends (any extend mode but constant) holds the chain
/// there. An empty chain reads `0.0`.
#[derive(Debug)]
pub struct Chain {
    segments: Vec<Rc<Animation>>,
}

impl Chain {
    pub fn new(segments: Vec<Rc<Animation>>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Rc<Animation>] {
        &self.segments
    }
}

impl Animate for Chain {
    fn sample(&self, clock: &Clock) -> Sample {
        let Some((last, rest)) = self.segments.split_last() else {
            return Sample::Value(0.0);
        };
        for segment in rest {
            match segment.sample(clock) {
                Sample::Ended(_) => continue,
                sample => return sample,
            }
        }
        last.sample(clock)
    }
}

/// Serializable chain: a JSON array of tween descriptions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainSpec {
    pub segments: Vec<TweenSpec>,
}

impl ChainSpec {
    pub fn new(segments: Vec<TweenSpec>) -> Self {
        Self { segments }
    }

    pub fn then(mut self, segment: TweenSpec) -> Self {
        self.segments.push(segment);
        self
    }

    /// Build the chain; the first segment must carry its own `start`.
    pub fn build(&self, cfg: &Config, clock: &Clock) -> Result<Rc<Animation>, TweenError> {
        self.build_with(cfg, clock, None)
    }

    /// Build the chain for a target currently at `current`, which fills
    /// the first segment's missing `start`.
    pub fn build_from(
        &self,
        cfg: &Config,
        clock: &Clock,
        current: f64,
    ) -> Result<Rc<Animation>, TweenError> {
        self.build_with(cfg, clock, Some(current))
    }

    fn build_with(
        &self,
        cfg: &Config,
        clock: &Clock,
        current: Option<f64>,
    ) -> Result<Rc<Animation>, TweenError> {
        if self.segments.is_empty() {
            return Err(TweenError::EmptyChain);
        }

        let mut start = current;
        let mut startt = None;
        let mut segments = Vec::with_capacity(self.segments.len());
        for (idx, spec) in self.segments.iter().enumerate() {
            let mut spec = spec.clone();
            spec.startt = spec.startt.or(startt);
            let built = spec.build_with(cfg, clock, start, None)?;
            debug!(
                "chain segment {idx} hands off end {} at {:?}",
                built.end,
                built.window.map(|w| w.end)
            );
            start = Some(built.end);
            // A segment driven by `t` has no window; the next one starts from the clock.
            startt = built.window.map(|w| w.end);
            segments.push(built.anim);
        }
        Ok(Rc::new(Animation::custom(Chain::new(segments))))
    }

    /// Turn per-segment component lists into one chain per component.
    ///
    /// Every segment must have the same number of components.
    pub fn per_component(segments: Vec<Vec<TweenSpec>>) -> Result<Vec<ChainSpec>, TweenError> {
        let width = segments.first().map(Vec::len).ok_or(TweenError::EmptyChain)?;
        if let Some(row) = segments.iter().find(|row| row.len() != width) {
            return Err(TweenError::LengthMismatch {
                expected: width,
                found: row.len(),
            });
        }

        let mut chains = vec![ChainSpec::default(); width];
        for row in segments {
            for (chain, spec) in chains.iter_mut().zip(row) {
                chain.segments.push(spec);
            }
        }
        Ok(chains)
    }
}
