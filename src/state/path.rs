// Freehand stroke following the primary finger.
use crate::model::{Point, TouchInput, TouchKind};

/// Points of the current stroke. The last stroke stays visible after the
/// finger lifts and is only cleared by the next `Begin`.
#[derive(Default, Debug, Clone)]
pub struct PathTracker {
    points: Vec<Point>,
}

impl PathTracker {
    /// Returns whether the event was consumed. Only `Begin` and `Move` are;
    /// every other kind leaves the path untouched.
    pub fn handle(&mut self, input: &TouchInput) -> bool {
        match input.kind {
            TouchKind::Begin => {
                tracing::debug!(discarded = self.points.len(), "stroke begin");
                self.points.clear();
                true
            }
            TouchKind::Move => {
                if let Some(p) = input.primary() {
                    self.points.push(p);
                }
                true
            }
            TouchKind::PointerDown | TouchKind::PointerUp | TouchKind::End | TouchKind::Cancel => {
                false
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(kind: TouchKind, x: f64, y: f64) -> TouchInput {
        TouchInput::new(kind, vec![Point::new(x, y)])
    }

    #[test]
    fn begin_always_resets() {
        let mut p = PathTracker::default();
        p.handle(&at(TouchKind::Begin, 0.0, 0.0));
        for i in 0..50 {
            p.handle(&at(TouchKind::Move, i as f64, 0.0));
        }
        assert_eq!(p.len(), 50);
        assert!(p.handle(&at(TouchKind::Begin, 3.0, 3.0)));
        assert!(p.is_empty());
    }

    #[test]
    fn moves_append_in_order() {
        let mut p = PathTracker::default();
        p.handle(&at(TouchKind::Begin, 0.0, 0.0));
        p.handle(&at(TouchKind::Move, 1.0, 2.0));
        p.handle(&at(TouchKind::Move, 3.0, 4.0));
        p.handle(&at(TouchKind::Move, 5.0, 6.0));
        assert_eq!(
            p.points(),
            &[Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
        );
    }

    #[test]
    fn other_kinds_leave_path_alone() {
        let mut p = PathTracker::default();
        p.handle(&at(TouchKind::Begin, 0.0, 0.0));
        p.handle(&at(TouchKind::Move, 1.0, 1.0));
        let before = p.points().to_vec();
        for kind in [
            TouchKind::End,
            TouchKind::Cancel,
            TouchKind::PointerDown,
            TouchKind::PointerUp,
        ] {
            assert!(!p.handle(&at(kind, 99.0, 99.0)));
            assert_eq!(p.points(), before.as_slice());
        }
    }

    #[test]
    fn move_follows_first_pointer() {
        let mut p = PathTracker::default();
        p.handle(&at(TouchKind::Begin, 0.0, 0.0));
        p.handle(&TouchInput::new(
            TouchKind::Move,
            vec![Point::new(4.0, 4.0), Point::new(8.0, 8.0)],
        ));
        assert_eq!(p.points(), &[Point::new(4.0, 4.0)]);
    }

    #[test]
    fn move_without_pointers_is_consumed_but_adds_nothing() {
        let mut p = PathTracker::default();
        assert!(p.handle(&TouchInput::new(TouchKind::Move, vec![])));
        assert!(p.is_empty());
    }
}
