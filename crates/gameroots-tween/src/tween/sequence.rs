//! Ordered tween sequences.
//!
//! A sequence plays its children one at a time. When the last (or, running
//! backwards, the first) child finishes, the sequence either wraps around
//! (`loop`), turns back (`commute`, ping-pong) or finishes. `loop` wins when
//! both are set.

use super::{AnyTween, Tween};
use crate::time::Timestamp;

#[derive(Debug)]
pub struct SequenceTween {
    tweens: Vec<AnyTween>,
    /// Always a valid index into `tweens` unless the sequence is done or empty.
    active: usize,
    forward: bool,
    looping: bool,
    commute: bool,
    done: bool,
    updated: bool,
}

impl Default for SequenceTween {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            active: 0,
            forward: true,
            looping: false,
            commute: false,
            done: false,
            updated: false,
        }
    }
}

impl SequenceTween {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child. Children play in insertion order.
    pub fn push(&mut self, tween: impl Into<AnyTween>) {
        self.tweens.push(tween.into());
    }

    pub fn with(mut self, tween: impl Into<AnyTween>) -> Self {
        self.push(tween);
        self
    }

    // -- Builder methods --

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_commute(mut self, commute: bool) -> Self {
        self.commute = commute;
        self
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn is_loop(&self) -> bool {
        self.looping
    }

    pub fn set_commute(&mut self, commute: bool) {
        self.commute = commute;
    }

    pub fn is_commute(&self) -> bool {
        self.commute
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnyTween> {
        self.tweens.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnyTween> {
        self.tweens.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnyTween> {
        self.tweens.iter()
    }

    /// Index of the child receiving updates, `None` once done or when empty.
    pub fn active_index(&self) -> Option<usize> {
        (!self.done && self.active < self.tweens.len()).then_some(self.active)
    }

    /// Whether traversal currently runs from the last child towards the first.
    pub fn is_reversed(&self) -> bool {
        !self.forward
    }

    /// Move the cursor past a finished child. Returns the next child index,
    /// or `None` when the sequence ends here.
    fn advance(&mut self) -> Option<usize> {
        let len = self.tweens.len();
        let next = if self.forward {
            Some(self.active + 1).filter(|&i| i < len)
        } else {
            self.active.checked_sub(1)
        };

        match next {
            Some(index) => Some(index),
            None if self.looping => {
                let index = if self.forward { 0 } else { len - 1 };
                log::debug!("sequence of {} wraps to {}", len, index);
                Some(index)
            }
            None if self.commute => {
                // bounce back from the boundary, replaying the boundary child
                self.forward = !self.forward;
                log::debug!(
                    "sequence of {} turns {} at {}",
                    len,
                    if self.forward { "forward" } else { "backward" },
                    self.active
                );
                Some(self.active)
            }
            None => None,
        }
    }
}

impl Tween for SequenceTween {
    /// Rewind to the first child, running forward, and re-arm that child.
    fn reset(&mut self) {
        self.active = 0;
        self.forward = true;
        self.done = false;
        self.updated = false;
        if let Some(first) = self.tweens.first_mut() {
            first.reset();
        }
    }

    fn update(&mut self, time: Timestamp) {
        self.updated = false;
        if self.done {
            return;
        }

        let Some(current) = self.tweens.get_mut(self.active) else {
            log::debug!("empty sequence finished at {}", time);
            self.done = true;
            return;
        };

        current.update(time);
        let child_updated = current.is_updated();

        if current.is_done() {
            match self.advance() {
                Some(next) => {
                    self.active = next;
                    self.tweens[next].reset();
                }
                None => {
                    log::debug!("sequence of {} finished at {}", self.tweens.len(), time);
                    self.done = true;
                }
            }
        }

        self.updated = child_updated;
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn is_updated(&self) -> bool {
        self.updated
    }
}

impl FromIterator<AnyTween> for SequenceTween {
    fn from_iter<I: IntoIterator<Item = AnyTween>>(iter: I) -> Self {
        Self {
            tweens: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Extend<AnyTween> for SequenceTween {
    fn extend<I: IntoIterator<Item = AnyTween>>(&mut self, iter: I) {
        self.tweens.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::TweenEvent;
    use crate::tween::{DelayTween, NoOpTween};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Starts = Rc<RefCell<Vec<usize>>>;

    /// A child that starts on one update and finishes on the next, logging
    /// its id on start.
    fn marked(id: usize, starts: &Starts) -> DelayTween {
        let sink = starts.clone();
        DelayTween::new(0).with_callback(move |e: TweenEvent| {
            if let TweenEvent::Start { .. } = e {
                sink.borrow_mut().push(id);
            }
        })
    }

    fn sequence_of(count: usize) -> (SequenceTween, Starts) {
        let starts: Starts = Rc::new(RefCell::new(Vec::new()));
        let seq: SequenceTween = (0..count).map(|id| AnyTween::from(marked(id, &starts))).collect();
        (seq, starts)
    }

    fn drive(seq: &mut SequenceTween, updates: u64) {
        for t in 0..updates {
            seq.update(t);
        }
    }

    #[test]
    fn plain_sequence_plays_once() {
        let (mut seq, starts) = sequence_of(3);

        drive(&mut seq, 5);
        assert!(!seq.is_done());
        seq.update(5);
        assert!(seq.is_done());
        assert_eq!(*starts.borrow(), vec![0, 1, 2]);
        assert_eq!(seq.active_index(), None);

        drive(&mut seq, 10);
        assert!(seq.is_done());
        assert!(!seq.is_updated());
        assert_eq!(starts.borrow().len(), 3);
    }

    #[test]
    fn commute_bounces_between_ends() {
        let (mut seq, starts) = sequence_of(2);
        seq.set_commute(true);

        drive(&mut seq, 16);
        assert!(!seq.is_done());
        assert_eq!(*starts.borrow(), vec![0, 1, 1, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn loop_restarts_at_first_child() {
        let (mut seq, starts) = sequence_of(2);
        seq.set_loop(true);

        drive(&mut seq, 12);
        assert!(!seq.is_done());
        assert_eq!(*starts.borrow(), vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn loop_takes_precedence_over_commute() {
        let (seq, starts) = sequence_of(3);
        let mut seq = seq.with_loop(true).with_commute(true);

        drive(&mut seq, 8);
        assert_eq!(*starts.borrow(), vec![0, 1, 2, 0]);
        assert!(!seq.is_reversed());
    }

    #[test]
    fn single_child_commute_repeats() {
        let (mut seq, starts) = sequence_of(1);
        seq.set_commute(true);

        drive(&mut seq, 6);
        assert_eq!(*starts.borrow(), vec![0, 0, 0]);
        assert!(!seq.is_done());
    }

    #[test]
    fn empty_sequence_finishes_immediately() {
        let mut seq = SequenceTween::new().with_loop(true);
        seq.reset();
        assert!(!seq.is_done());

        seq.update(0);
        assert!(seq.is_done());
        assert!(!seq.is_updated());
    }

    #[test]
    fn updated_mirrors_active_child() {
        let mut seq = SequenceTween::new().with(DelayTween::new(100)).with(NoOpTween);

        seq.update(0);
        assert!(seq.is_updated());
        seq.update(50);
        assert!(!seq.is_updated());

        // the finishing call reports the delay's update, then the no-op takes over
        seq.update(100);
        assert!(seq.is_updated());
        assert_eq!(seq.active_index(), Some(1));

        seq.update(200);
        assert!(!seq.is_updated());
        assert!(!seq.is_done());
    }

    #[test]
    fn reset_replays_from_the_start() {
        let (mut seq, starts) = sequence_of(2);
        drive(&mut seq, 4);
        assert!(seq.is_done());

        seq.reset();
        assert!(!seq.is_done());
        assert_eq!(seq.active_index(), Some(0));

        drive(&mut seq, 4);
        assert!(seq.is_done());
        assert_eq!(*starts.borrow(), vec![0, 1, 0, 1]);
    }

    #[test]
    fn nested_sequence_is_rearmed_by_parent() {
        let starts: Starts = Rc::new(RefCell::new(Vec::new()));
        let inner = SequenceTween::new().with(marked(10, &starts)).with(marked(11, &starts));
        let mut outer = SequenceTween::new()
            .with(inner)
            .with(marked(0, &starts))
            .with_loop(true);

        drive(&mut outer, 12);
        assert_eq!(*starts.borrow(), vec![10, 11, 0, 10, 11, 0]);
        assert!(!outer.is_done());
    }

    #[test]
    fn extended_children_play_in_order() {
        let (mut seq, starts) = sequence_of(1);
        seq.extend([
            AnyTween::from(marked(1, &starts)),
            AnyTween::from(marked(2, &starts)),
            AnyTween::from(marked(3, &starts)),
        ]);

        assert_eq!(seq.len(), 4);
        assert!(seq.iter().all(|t| matches!(t, AnyTween::Delay(_))));

        drive(&mut seq, 20);
        assert!(seq.is_done());
        assert_eq!(*starts.borrow(), vec![0, 1, 2, 3]);
    }
}
