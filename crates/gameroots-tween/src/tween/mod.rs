// tween/mod.rs
//
// The Tween capability and the closed set of tween variants.
//
// Usage:
//   let mut day_night: SequenceTween =
//       [dawn.into(), day.into(), dusk.into()].into_iter().collect();
//   day_night.set_loop(true);
//   day_night.update(now_nanos);   // once per frame, from the host loop

pub mod delay;
pub mod noop;
pub mod sequence;
pub mod step;

pub use delay::DelayTween;
pub use noop::NoOpTween;
pub use sequence::SequenceTween;
pub use step::{InterpolatedStepTween, LinearStepTween};

use crate::callback::TweenCallback;
use crate::time::Timestamp;

/// A unit of time-driven state, advanced by explicit `update` calls.
///
/// `update` is a no-op once `is_done()` holds, until `reset()`.
pub trait Tween {
    /// Re-arm for reuse. Calling it twice is the same as calling it once.
    fn reset(&mut self);

    /// Advance by one frame. `time` must not be earlier than the previous call.
    fn update(&mut self, time: Timestamp);

    fn is_done(&self) -> bool;

    /// Whether the last `update` produced an observable change.
    fn is_updated(&self) -> bool;
}

/// Every tween variant behind one value type, so sequences can hold a mix.
pub enum AnyTween {
    Delay(DelayTween),
    LinearStep(LinearStepTween),
    InterpolatedStep(InterpolatedStepTween),
    Sequence(SequenceTween),
    NoOp(NoOpTween),
    /// Caller-defined tween.
    Custom(Box<dyn Tween>),
}

impl AnyTween {
    /// Attach a callback to a primitive tween. Returns `false` for
    /// sequences, no-ops and custom tweens, which have no lifecycle hooks.
    pub fn set_callback(&mut self, callback: impl TweenCallback + 'static) -> bool {
        match self {
            AnyTween::Delay(t) => t.set_callback(callback),
            AnyTween::LinearStep(t) => t.set_callback(callback),
            AnyTween::InterpolatedStep(t) => t.set_callback(callback),
            AnyTween::Sequence(_) | AnyTween::NoOp(_) | AnyTween::Custom(_) => return false,
        }
        true
    }

    /// Current scalar of a fixed-step tween, or the payload of a delay.
    pub fn value(&self) -> Option<f32> {
        match self {
            AnyTween::Delay(t) => t.payload(),
            AnyTween::LinearStep(t) => Some(t.value()),
            AnyTween::InterpolatedStep(t) => Some(t.value()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceTween> {
        match self {
            AnyTween::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut SequenceTween> {
        match self {
            AnyTween::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn Tween {
        match self {
            AnyTween::Delay(t) => t,
            AnyTween::LinearStep(t) => t,
            AnyTween::InterpolatedStep(t) => t,
            AnyTween::Sequence(t) => t,
            AnyTween::NoOp(t) => t,
            AnyTween::Custom(t) => &**t,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Tween {
        match self {
            AnyTween::Delay(t) => t,
            AnyTween::LinearStep(t) => t,
            AnyTween::InterpolatedStep(t) => t,
            AnyTween::Sequence(t) => t,
            AnyTween::NoOp(t) => t,
            AnyTween::Custom(t) => &mut **t,
        }
    }
}

impl Tween for AnyTween {
    fn reset(&mut self) {
        self.as_dyn_mut().reset();
    }

    fn update(&mut self, time: Timestamp) {
        self.as_dyn_mut().update(time);
    }

    fn is_done(&self) -> bool {
        self.as_dyn().is_done()
    }

    fn is_updated(&self) -> bool {
        self.as_dyn().is_updated()
    }
}

impl std::fmt::Debug for AnyTween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyTween::Delay(t) => f.debug_tuple("Delay").field(t).finish(),
            AnyTween::LinearStep(t) => f.debug_tuple("LinearStep").field(t).finish(),
            AnyTween::InterpolatedStep(t) => f.debug_tuple("InterpolatedStep").field(t).finish(),
            AnyTween::Sequence(t) => f.debug_tuple("Sequence").field(t).finish(),
            AnyTween::NoOp(t) => f.debug_tuple("NoOp").field(t).finish(),
            AnyTween::Custom(t) => f
                .debug_struct("Custom")
                .field("done", &t.is_done())
                .field("updated", &t.is_updated())
                .finish(),
        }
    }
}

impl From<DelayTween> for AnyTween {
    fn from(t: DelayTween) -> Self {
        AnyTween::Delay(t)
    }
}

impl From<LinearStepTween> for AnyTween {
    fn from(t: LinearStepTween) -> Self {
        AnyTween::LinearStep(t)
    }
}

impl From<InterpolatedStepTween> for AnyTween {
    fn from(t: InterpolatedStepTween) -> Self {
        AnyTween::InterpolatedStep(t)
    }
}

impl From<SequenceTween> for AnyTween {
    fn from(t: SequenceTween) -> Self {
        AnyTween::Sequence(t)
    }
}

impl From<NoOpTween> for AnyTween {
    fn from(t: NoOpTween) -> Self {
        AnyTween::NoOp(t)
    }
}

impl From<Box<dyn Tween>> for AnyTween {
    fn from(t: Box<dyn Tween>) -> Self {
        AnyTween::Custom(t)
    }
}
