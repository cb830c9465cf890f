use std::time::{Duration, Instant};

/// A reaction that stays visible for a fixed time after being triggered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flash {
    until: Option<Instant>,
}

impl Flash {
    pub fn trigger(&mut self, now: Instant, duration: Duration) {
        self.until = Some(now + duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Drop an expired reaction. Returns true if it just went away.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}
