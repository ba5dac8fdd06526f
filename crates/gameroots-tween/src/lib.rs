pub mod callback;
pub mod easing;
pub mod error;
pub mod manifest;
pub mod time;
pub mod tween;

// Re-export key types at crate root for convenience
pub use callback::{TweenCallback, TweenEvent};
pub use easing::{ease, lerp, Easing};
pub use error::{Result, TweenError};
pub use manifest::{TimeDef, TweenDef};
pub use time::{
    millis_to_nanos, nanos_to_millis, nanos_to_secs, parse_nanos, parse_nanos_with_unit,
    secs_to_millis, secs_to_nanos, Timestamp,
};
pub use tween::{
    AnyTween, DelayTween, InterpolatedStepTween, LinearStepTween, NoOpTween, SequenceTween, Tween,
};
