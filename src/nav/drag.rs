#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGesture {
    /// Dragged leftwards past the threshold.
    TurnForward,
    /// Dragged rightwards past the threshold.
    TurnBackward,
}

/// Horizontal swipe detection for page turns.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    threshold: u32,
    start_x: Option<i32>,
}

impl DragTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Start a drag at `x`. Refused while a page is turning.
    pub fn press(&mut self, x: i32, turning: bool) -> bool {
        if turning {
            return false;
        }
        self.start_x = Some(x);
        true
    }

    /// Finish the drag. Only a horizontal travel strictly beyond the threshold turns a page.
    pub fn release(&mut self, x: i32) -> Option<DragGesture> {
        let start = self.start_x.take()?;
        let diff = i64::from(x) - i64::from(start);
        if diff.unsigned_abs() <= u64::from(self.threshold) {
            return None;
        }
        if diff < 0 {
            Some(DragGesture::TurnForward)
        } else {
            Some(DragGesture::TurnBackward)
        }
    }

    /// The pointer left the surface; forget the drag.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragGesture, DragTracker};

    #[test]
    fn long_left_drag_turns_forward() {
        let mut drag = DragTracker::new(100);
        assert!(drag.press(500, false));
        assert_eq!(drag.release(350), Some(DragGesture::TurnForward));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn short_drag_does_nothing() {
        let mut drag = DragTracker::new(100);
        drag.press(500, false);
        assert_eq!(drag.release(450), None);

        drag.press(500, false);
        assert_eq!(drag.release(600), None, "exactly the threshold is not enough");
    }

    #[test]
    fn long_right_drag_turns_backward() {
        let mut drag = DragTracker::new(100);
        drag.press(100, false);
        assert_eq!(drag.release(260), Some(DragGesture::TurnBackward));
    }

    #[test]
    fn drag_cannot_start_mid_turn_or_survive_cancel() {
        let mut drag = DragTracker::new(10);
        assert!(!drag.press(50, true));
        assert_eq!(drag.release(0), None);

        drag.press(50, false);
        drag.cancel();
        assert_eq!(drag.release(0), None);
    }
}
