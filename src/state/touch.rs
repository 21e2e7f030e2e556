// Multi-touch position state: one entry per finger currently down.
use crate::model::{TouchInput, TouchPoint};

#[derive(Default, Debug, Clone)]
pub struct TouchTracker {
    active: Vec<TouchPoint>,
}

impl TouchTracker {
    /// Replaces the active set with the event's pointers. The previous set is
    /// dropped rather than diffed, so slots never outlive the event that
    /// reported them. Always consumes the event.
    pub fn handle(&mut self, input: &TouchInput) -> bool {
        self.active.clear();
        self.active.extend(
            input
                .pointers
                .iter()
                .enumerate()
                .map(|(slot, &pos)| TouchPoint { slot, pos }),
        );
        tracing::trace!(kind = ?input.kind, count = self.active.len(), "touch set replaced");
        true
    }

    pub fn active(&self) -> &[TouchPoint] {
        &self.active
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }
}
