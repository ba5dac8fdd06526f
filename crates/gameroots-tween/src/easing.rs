// easing.rs
//
// Named easing curves for InterpolatedStepTween.
// Pure math over a normalized input; no tween state lives here.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Easing curve, addressable by its snake_case name in manifests
/// (`"quad_in"`, `"bounce_out"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity (no easing).
    #[default]
    Linear,
    /// Slow start.
    QuadIn,
    /// Slow end.
    QuadOut,
    /// Slow start and end.
    QuadInOut,
    /// Stronger slow start.
    CubicIn,
    /// Stronger slow end.
    CubicOut,
    /// Stronger slow start and end.
    CubicInOut,
    /// Very strong slow start.
    QuartIn,
    /// Very strong slow end.
    QuartOut,
    /// Very strong slow start and end.
    QuartInOut,
    /// Quarter sine wave, gentle start.
    SineIn,
    /// Quarter sine wave, gentle end.
    SineOut,
    /// Half sine wave, gentle at both ends.
    SineInOut,
    /// Exponential start (dramatic).
    ExpoIn,
    /// Exponential end.
    ExpoOut,
    ExpoInOut,
    /// Pulls back below zero before rising.
    BackIn,
    /// Overshoots one before settling.
    BackOut,
    /// Pulls back, then overshoots.
    BackInOut,
    /// Bouncy finish.
    BounceOut,
    /// Elastic spring.
    ElasticOut,
}

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;
const BACK_C3: f32 = BACK_C1 + 1.0;

impl Easing {
    pub const ALL: [Easing; 21] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceOut,
        Easing::ElasticOut,
    ];

    /// Map `t` through the curve. `t` is clamped to [0, 1]; the result starts
    /// at 0 and ends at 1 but may leave that range in between (Back, Elastic).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        self.eval(t.clamp(0.0, 1.0))
    }

    /// Evaluate the curve formula at `t` without clamping, so inputs outside
    /// [0, 1] extrapolate (`QuadIn.eval(2.0) == 4.0`).
    pub fn eval(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t).powi(2),
            Easing::QuadInOut => in_out(
                t,
                |t| 2.0 * t * t,
                |t| 1.0 - (2.0 - 2.0 * t).powi(2) / 2.0,
            ),

            Easing::CubicIn => t.powi(3),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => in_out(
                t,
                |t| 4.0 * t.powi(3),
                |t| 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            ),

            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => in_out(
                t,
                |t| 8.0 * t.powi(4),
                |t| 1.0 - (2.0 - 2.0 * t).powi(4) / 2.0,
            ),

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => (1.0 - (PI * t).cos()) / 2.0,

            Easing::ExpoIn if t == 0.0 => 0.0,
            Easing::ExpoIn => 2.0_f32.powf(10.0 * t - 10.0),
            Easing::ExpoOut if t == 1.0 => 1.0,
            Easing::ExpoOut => 1.0 - 2.0_f32.powf(-10.0 * t),
            Easing::ExpoInOut if t == 0.0 || t == 1.0 => t,
            Easing::ExpoInOut => in_out(
                t,
                |t| 2.0_f32.powf(20.0 * t - 10.0) / 2.0,
                |t| (2.0 - 2.0_f32.powf(10.0 - 20.0 * t)) / 2.0,
            ),

            Easing::BackIn => BACK_C3 * t.powi(3) - BACK_C1 * t * t,
            Easing::BackOut => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Easing::BackInOut => in_out(
                t,
                |t| (2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2) / 2.0,
                |t| {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((BACK_C2 + 1.0) * u + BACK_C2) + 2.0) / 2.0
                },
            ),

            Easing::BounceOut => bounce_out(t),

            Easing::ElasticOut if t == 0.0 || t == 1.0 => t,
            Easing::ElasticOut => {
                const C4: f32 = (2.0 * PI) / 3.0;
                2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
            }
        }
    }
}

#[inline]
fn in_out(t: f32, first: impl Fn(f32) -> f32, second: impl Fn(f32) -> f32) -> f32 {
    if t < 0.5 {
        first(t)
    } else {
        second(t)
    }
}

fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let (offset, base) = if t < 1.0 / D1 {
        (0.0, 0.0)
    } else if t < 2.0 / D1 {
        (1.5 / D1, 0.75)
    } else if t < 2.5 / D1 {
        (2.25 / D1, 0.9375)
    } else {
        (2.625 / D1, 0.984375)
    };
    let t = t - offset;
    N1 * t * t + base
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate between two values along an easing curve.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}
