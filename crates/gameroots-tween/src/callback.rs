//! Lifecycle callbacks fired by primitive tweens.

use crate::time::Timestamp;

/// Hooks invoked at the three lifecycle points of a tween.
///
/// Every hook defaults to a no-op, so implementors only override what they
/// need. `value` is the tween's current scalar, or `f32::NAN` for tweens
/// without one.
pub trait TweenCallback {
    fn on_start(&mut self, _time: Timestamp, _value: f32) {}

    fn on_update(&mut self, _time: Timestamp, _value: f32) {}

    fn on_end(&mut self, _time: Timestamp, _value: f32) {}
}

/// A single lifecycle notification, for closure-based callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEvent {
    Start { time: Timestamp, value: f32 },
    Update { time: Timestamp, value: f32 },
    End { time: Timestamp, value: f32 },
}

impl TweenEvent {
    pub fn time(&self) -> Timestamp {
        match *self {
            TweenEvent::Start { time, .. }
            | TweenEvent::Update { time, .. }
            | TweenEvent::End { time, .. } => time,
        }
    }

    pub fn value(&self) -> f32 {
        match *self {
            TweenEvent::Start { value, .. }
            | TweenEvent::Update { value, .. }
            | TweenEvent::End { value, .. } => value,
        }
    }
}

impl<F> TweenCallback for F
where
    F: FnMut(TweenEvent),
{
    fn on_start(&mut self, time: Timestamp, value: f32) {
        self(TweenEvent::Start { time, value });
    }

    fn on_update(&mut self, time: Timestamp, value: f32) {
        self(TweenEvent::Update { time, value });
    }

    fn on_end(&mut self, time: Timestamp, value: f32) {
        self(TweenEvent::End { time, value });
    }
}

/// Optional callback slot shared by the primitive tweens.
#[derive(Default)]
pub(crate) struct CallbackSlot(Option<Box<dyn TweenCallback>>);

impl CallbackSlot {
    pub fn set(&mut self, callback: Box<dyn TweenCallback>) {
        self.0 = Some(callback);
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn start(&mut self, time: Timestamp, value: f32) {
        if let Some(cb) = self.0.as_deref_mut() {
            cb.on_start(time, value);
        }
    }

    pub fn update(&mut self, time: Timestamp, value: f32) {
        if let Some(cb) = self.0.as_deref_mut() {
            cb.on_update(time, value);
        }
    }

    pub fn end(&mut self, time: Timestamp, value: f32) {
        if let Some(cb) = self.0.as_deref_mut() {
            cb.on_end(time, value);
        }
    }
}

impl std::fmt::Debug for CallbackSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_set() { "Some(<callback>)" } else { "None" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Counter(Rc<RefCell<u32>>);

    impl TweenCallback for Counter {
        fn on_end(&mut self, _time: Timestamp, _value: f32) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn empty_slot_is_silent() {
        let mut slot = CallbackSlot::default();
        slot.start(0, 1.0);
        slot.update(1, 1.0);
        slot.end(2, 1.0);
        assert!(!slot.is_set());
    }

    #[test]
    fn unimplemented_hooks_are_noops() {
        let ends = Rc::new(RefCell::new(0));
        let mut slot = CallbackSlot::default();
        slot.set(Box::new(Counter(ends.clone())));

        slot.start(0, 0.0);
        slot.update(1, 0.0);
        assert_eq!(*ends.borrow(), 0);

        slot.end(2, 0.0);
        assert_eq!(*ends.borrow(), 1);
    }

    #[test]
    fn closure_receives_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut slot = CallbackSlot::default();
        slot.set(Box::new(move |e: TweenEvent| sink.borrow_mut().push(e)));

        slot.start(5, 0.25);
        slot.end(9, 1.0);

        let events = events.borrow();
        assert_eq!(events[0], TweenEvent::Start { time: 5, value: 0.25 });
        assert_eq!(events[1].time(), 9);
        assert_eq!(events[1].value(), 1.0);
    }
}
