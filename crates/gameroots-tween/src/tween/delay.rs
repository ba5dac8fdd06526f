//! Hold for a fixed duration.

use super::Tween;
use crate::callback::{CallbackSlot, TweenCallback};
use crate::time::{elapsed, Timestamp};

/// Holds for `delay` nanoseconds, measured from its first update.
///
/// Fires `on_start` on the first update and `on_update` on every later one.
/// `on_end` follows in the call where the delay has fully elapsed. All hooks
/// receive the constant payload, or `NaN` without one.
#[derive(Debug, Default)]
pub struct DelayTween {
    delay: Timestamp,
    payload: Option<f32>,
    origin: Option<Timestamp>,
    done: bool,
    updated: bool,
    callback: CallbackSlot,
}

impl DelayTween {
    pub fn new(delay: Timestamp) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    pub fn with_payload(mut self, value: f32) -> Self {
        self.payload = Some(value);
        self
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

    pub fn delay(&self) -> Timestamp {
        self.delay
    }

    pub fn payload(&self) -> Option<f32> {
        self.payload
    }

    /// Timestamp of the first update since construction or `reset`.
    pub fn started_at(&self) -> Option<Timestamp> {
        self.origin
    }

    fn emitted(&self) -> f32 {
        self.payload.unwrap_or(f32::NAN)
    }
}

impl Tween for DelayTween {
    fn reset(&mut self) {
        self.origin = None;
        self.done = false;
        self.updated = false;
    }

    fn update(&mut self, time: Timestamp) {
        self.updated = false;
        if self.done {
            return;
        }

        let value = self.emitted();
        let Some(origin) = self.origin else {
            self.origin = Some(time);
            self.updated = true;
            log::trace!("delay of {}ns started at {}", self.delay, time);
            self.callback.start(time, value);
            return;
        };

        self.callback.update(time, value);

        if elapsed(origin, time) >= self.delay {
            self.done = true;
            self.updated = true;
            log::trace!("delay of {}ns ended at {}", self.delay, time);
            self.callback.end(time, value);
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn is_updated(&self) -> bool {
        self.updated
    }
}
