//! Fixed-step tweens.
//!
//! Both variants move an input from `start` towards `end` by `delta`, at
//! most once per `interval` nanoseconds. The linear tween emits the input
//! itself; the interpolated tween maps it through an [`Easing`] curve first.

use super::Tween;
use crate::callback::{CallbackSlot, TweenCallback};
use crate::easing::Easing;
use crate::error::{check_reachable, Result};
use crate::time::{elapsed, Timestamp};

/// What a single `update` call should do.
enum Tick {
    /// Inactive, done, or the interval has not passed yet.
    Idle,
    /// First update since reset: record the origin, no stepping.
    Started,
    /// More than one interval since the last step.
    Step,
}

/// Timing and flag bookkeeping shared by both fixed-step tweens.
#[derive(Debug, Clone, Copy)]
struct Stepper {
    start: f32,
    end: f32,
    delta: f32,
    interval: Timestamp,
    last_step: Option<Timestamp>,
    active: bool,
    updated: bool,
    ticked: bool,
    done: bool,
}

impl Stepper {
    fn new(start: f32, end: f32, delta: f32, interval: Timestamp) -> Result<Self> {
        check_reachable(start, end, delta)?;
        Ok(Self {
            start,
            end,
            delta,
            interval,
            last_step: None,
            active: true,
            updated: false,
            ticked: false,
            done: false,
        })
    }

    fn reset(&mut self) {
        self.last_step = None;
        self.updated = false;
        self.ticked = false;
        self.done = false;
    }

    fn tick(&mut self, time: Timestamp) -> Tick {
        self.updated = false;
        self.ticked = false;
        if !self.active || self.done {
            return Tick::Idle;
        }

        match self.last_step {
            None => {
                self.last_step = Some(time);
                Tick::Started
            }
            Some(last) if elapsed(last, time) > self.interval => Tick::Step,
            Some(_) => Tick::Idle,
        }
    }

    /// Whether `value` has reached or passed `end` in the stepping direction.
    fn reached(&self, value: f32) -> bool {
        if self.delta > 0.0 {
            value >= self.end
        } else if self.delta < 0.0 {
            value <= self.end
        } else {
            true
        }
    }

    fn commit(&mut self, time: Timestamp, done: bool) {
        self.last_step = Some(time);
        self.ticked = true;
        self.updated = true;
        self.done = done;
    }

    fn set_delta(&mut self, delta: f32) -> Result<()> {
        check_reachable(self.start, self.end, delta)?;
        self.delta = delta;
        Ok(())
    }
}

/// Steps a scalar linearly from `start` to `end`.
#[derive(Debug)]
pub struct LinearStepTween {
    stepper: Stepper,
    value: f32,
    callback: CallbackSlot,
}

impl LinearStepTween {
    /// Fails when `delta` points away from `end`.
    pub fn new(start: f32, end: f32, delta: f32, interval: Timestamp) -> Result<Self> {
        Ok(Self {
            stepper: Stepper::new(start, end, delta, interval)?,
            value: start,
            callback: CallbackSlot::default(),
        })
    }

    pub fn with_callback(mut self, callback: impl TweenCallback + 'static) -> Self {
        self.set_callback(callback);
        self
    }

    pub fn set_callback(&mut self, callback: impl TweenCallback + 'static) {
        self.callback.set(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback.clear();
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn start_value(&self) -> f32 {
        self.stepper.start
    }

    pub fn end_value(&self) -> f32 {
        self.stepper.end
    }

    pub fn value_delta(&self) -> f32 {
        self.stepper.delta
    }

    /// Change the step size. Rejected like in `new` when it points away from `end`.
    pub fn set_value_delta(&mut self, delta: f32) -> Result<()> {
        self.stepper.set_delta(delta)
    }

    pub fn interval(&self) -> Timestamp {
        self.stepper.interval
    }

    /// Whether the last update stepped the value.
    pub fn is_ticked(&self) -> bool {
        self.stepper.ticked
    }

    pub fn is_active(&self) -> bool {
        self.stepper.active
    }

    /// An inactive tween ignores updates without changing `is_done()`.
    pub fn set_active(&mut self, active: bool) {
        self.stepper.active = active;
    }
}

impl Tween for LinearStepTween {
    fn reset(&mut self) {
        self.stepper.reset();
        self.value = self.stepper.start;
    }

    fn update(&mut self, time: Timestamp) {
        match self.stepper.tick(time) {
            Tick::Idle => {}
            Tick::Started => {
                log::trace!(
                    "linear tween {} -> {} started at {}",
                    self.stepper.start,
                    self.stepper.end,
                    time
                );
                self.callback.start(time, self.value);
            }
            Tick::Step => {
                self.value += self.stepper.delta;
                let done = self.stepper.reached(self.value);
                if done {
                    self.value = self.stepper.end;
                }
                self.stepper.commit(time, done);

                self.callback.update(time, self.value);
                if done {
                    log::trace!("linear tween reached {} at {}", self.value, time);
                    self.callback.end(time, self.value);
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.stepper.done
    }

    fn is_updated(&self) -> bool {
        self.stepper.updated
    }
}

/// Steps an input from `start` to `end` and emits it mapped through an
/// easing curve.
///
/// The curve is evaluated on the raw input, so ranges outside [0, 1]
/// extrapolate. The tween ends when the eased output reaches `end`, or when
/// the input does for curves that never get there (SineOut past 1); the final
/// emitted value is exactly `end`. Before the first step the value is `NaN`.
#[derive(Debug)]
pub struct InterpolatedStepTween {
    stepper: Stepper,
    easing: Easing,
    input: f32,
    value: f32,
    callback: CallbackSlot,
}

impl InterpolatedStepTween {
    /// Fails when `delta` points away from `end`.
    pub fn new(
        easing: Easing,
        start: f32,
        end: f32,
        delta: f32,
        interval: Timestamp,
    ) -> Result<Self> {
        Ok(Self {
            stepper: Stepper::new(start, end, delta, interval)?,
            easing,
            input: start,
            value: f32::NAN,
            callback: CallbackSlot::default(),
        })
    }

    pub fn with_callback(mut self, callback: impl TweenCallback + 'static) -> Self {
        self.set_callback(callback);
        self
    }

    pub fn set_callback(&mut self, callback: impl TweenCallback + 'static) {
        self.callback.set(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback.clear();
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Last emitted (eased) value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Stepped input before easing.
    pub fn input(&self) -> f32 {
        self.input
    }

    pub fn start_value(&self) -> f32 {
        self.stepper.start
    }

    pub fn end_value(&self) -> f32 {
        self.stepper.end
    }

    pub fn value_delta(&self) -> f32 {
        self.stepper.delta
    }

    pub fn set_value_delta(&mut self, delta: f32) -> Result<()> {
        self.stepper.set_delta(delta)
    }

    pub fn interval(&self) -> Timestamp {
        self.stepper.interval
    }

    pub fn is_ticked(&self) -> bool {
        self.stepper.ticked
    }

    pub fn is_active(&self) -> bool {
        self.stepper.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.stepper.active = active;
    }
}

impl Tween for InterpolatedStepTween {
    fn reset(&mut self) {
        self.stepper.reset();
        self.input = self.stepper.start;
        self.value = f32::NAN;
    }

    fn update(&mut self, time: Timestamp) {
        match self.stepper.tick(time) {
            Tick::Idle => {}
            Tick::Started => {
                log::trace!(
                    "{:?} tween {} -> {} started at {}",
                    self.easing,
                    self.stepper.start,
                    self.stepper.end,
                    time
                );
                self.callback.start(time, self.value);
            }
            Tick::Step => {
                self.input += self.stepper.delta;
                self.value = self.easing.eval(self.input);

                // input check guards curves that level off before `end`
                let done = self.stepper.reached(self.value) || self.stepper.reached(self.input);
                if done {
                    self.value = self.stepper.end;
                }
                self.stepper.commit(time, done);

                self.callback.update(time, self.value);
                if done {
                    log::trace!("{:?} tween reached {} at {}", self.easing, self.value, time);
                    self.callback.end(time, self.value);
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.stepper.done
    }

    fn is_updated(&self) -> bool {
        self.stepper.updated
    }
}
