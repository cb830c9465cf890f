use std::time::Instant;

/// Owns the settle deadline of the page turn in flight.
#[derive(Debug, Default)]
pub(crate) struct FlipActor {
    deadline: Option<Instant>,
}

impl FlipActor {
    pub(crate) fn arm(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True once `now` reached the deadline. Disarms itself.
    pub(crate) fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

pub(crate) struct UiActor {
    needs_redraw: bool,
}

impl UiActor {
    pub(crate) fn new() -> Self {
        Self { needs_redraw: true }
    }

    pub(crate) fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub(crate) fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    pub(crate) fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }
}
