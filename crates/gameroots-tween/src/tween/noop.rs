use super::Tween;
use crate::time::Timestamp;

/// Placeholder that never finishes and never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpTween;

impl Tween for NoOpTween {
    fn reset(&mut self) {}

    fn update(&mut self, _time: Timestamp) {}

    fn is_done(&self) -> bool {
        false
    }

    fn is_updated(&self) -> bool {
        false
    }
}
