//! JSON tween definitions.
//!
//! Lets a game describe its tweens as data and attach callbacks after
//! building:
//!
//! ```json
//! { "sequence": { "loop": true, "tweens": [
//!     { "linear": { "start": 0.0, "end": 1.0, "delta": 0.1, "interval": "10 ms" } },
//!     { "delay": { "delay": "3 s" } },
//!     "no_op"
//! ] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::Result;
use crate::time::{parse_nanos, Timestamp};
use crate::tween::{
    AnyTween, DelayTween, InterpolatedStepTween, LinearStepTween, NoOpTween, SequenceTween,
};

/// A duration given either as integer nanoseconds or as `"<amount> <unit>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeDef {
    Nanos(Timestamp),
    Text(String),
}

impl TimeDef {
    pub fn to_nanos(&self) -> Result<Timestamp> {
        match self {
            TimeDef::Nanos(ns) => Ok(*ns),
            TimeDef::Text(text) => parse_nanos(text),
        }
    }
}

impl From<Timestamp> for TimeDef {
    fn from(ns: Timestamp) -> Self {
        TimeDef::Nanos(ns)
    }
}

/// Data description of a tween tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TweenDef {
    Delay {
        delay: TimeDef,
        #[serde(default)]
        payload: Option<f32>,
    },
    Linear {
        start: f32,
        end: f32,
        delta: f32,
        interval: TimeDef,
    },
    Interpolated {
        #[serde(default)]
        easing: Easing,
        start: f32,
        end: f32,
        delta: f32,
        interval: TimeDef,
    },
    Sequence {
        #[serde(default, rename = "loop")]
        looping: bool,
        #[serde(default)]
        commute: bool,
        #[serde(default)]
        tweens: Vec<TweenDef>,
    },
    NoOp,
}

impl TweenDef {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the tween tree, validating every fixed-step definition.
    pub fn build(&self) -> Result<AnyTween> {
        let tween = match self {
            TweenDef::Delay { delay, payload } => {
                let mut tween = DelayTween::new(delay.to_nanos()?);
                if let Some(value) = payload {
                    tween = tween.with_payload(*value);
                }
                tween.into()
            }
            TweenDef::Linear { start, end, delta, interval } => {
                LinearStepTween::new(*start, *end, *delta, interval.to_nanos()?)?.into()
            }
            TweenDef::Interpolated { easing, start, end, delta, interval } => {
                let interval = interval.to_nanos()?;
                InterpolatedStepTween::new(*easing, *start, *end, *delta, interval)?.into()
            }
            TweenDef::Sequence { looping, commute, tweens } => {
                let children = tweens.iter().map(TweenDef::build).collect::<Result<Vec<_>>>()?;
                log::debug!(
                    "built sequence of {} (loop: {}, commute: {})",
                    children.len(),
                    looping,
                    commute
                );
                let mut seq: SequenceTween = children.into_iter().collect();
                seq.set_loop(*looping);
                seq.set_commute(*commute);
                seq.into()
            }
            TweenDef::NoOp => NoOpTween.into(),
        };
        Ok(tween)
    }
}
