//! Error types for tween construction, timing strings and manifests.
//!
//! `update` never fails: every runtime anomaly is a silent no-op. Errors only
//! surface while building tweens.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TweenError {
    /// `end` cannot be reached from `start` by repeatedly adding `delta`.
    #[error("end value {end} is not reachable from {start} with delta {delta}")]
    UnreachableEnd { start: f32, end: f32, delta: f32 },

    /// A time string that is not `"<amount> <unit>"`.
    #[error("invalid time value [{0}]")]
    InvalidTimeValue(String),

    /// A time unit other than `s`, `ms` or `ns`.
    #[error("invalid time unit [{0}]")]
    InvalidTimeUnit(String),

    /// Malformed tween manifest JSON.
    #[error("invalid tween manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl TweenError {
    /// Whether this error rejects a caller-supplied argument, as opposed to a
    /// malformed manifest document.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, TweenError::Manifest(_))
    }
}

pub type Result<T> = std::result::Result<T, TweenError>;

/// Checks that `end` is reachable from `start` by steps of `delta` in one
/// direction.
pub(crate) fn check_reachable(start: f32, end: f32, delta: f32) -> Result<()> {
    let reachable = if delta > 0.0 {
        end >= start
    } else if delta < 0.0 {
        end <= start
    } else {
        // zero (or NaN) delta never moves the value
        end == start
    };

    if reachable {
        Ok(())
    } else {
        Err(TweenError::UnreachableEnd { start, end, delta })
    }
}
