use std::time::Instant;

use crate::event::AppEvent;

use super::core::App;
use super::state::Phase;

impl App {
    /// Advance the loading bar by one tick. Does nothing once the book is open.
    pub fn on_loading_tick(&mut self, now: Instant) -> Vec<AppEvent> {
        if self.state.phase != Phase::Loading {
            return Vec::new();
        }

        let tick = self.state.loading.tick();
        let mut events = Vec::new();
        if let Some(progress) = tick.milestone {
            events.push(AppEvent::LoadMilestone {
                progress,
                coins: self.state.loading.coins_collected(),
            });
        }
        if self.state.loading.take_load_complete() {
            events.push(AppEvent::LoadComplete);
        }
        for event in &events {
            self.observe(event, now);
        }
        self.ui.mark_redraw();
        events
    }

    /// Commit the page turn whose settle deadline has passed.
    pub fn on_settle_due(&mut self, now: Instant) -> Option<AppEvent> {
        if !self.flip.take_due(now) {
            return None;
        }
        let turn = self.state.book.settle()?;
        let event = AppEvent::PageTurned(turn);
        self.observe(&event, now);
        Some(event)
    }

    pub fn on_idle_step(&mut self) {
        if self.state.phase != Phase::Book {
            return;
        }
        self.state.walker.step();
        self.ui.mark_redraw();
    }

    /// Retire reactions whose time is up.
    pub fn on_animation_tick(&mut self, now: Instant) {
        let state = &mut self.state;
        let mut changed = state.milestone_pop.expire(now);
        changed |= state.coins.expire(now);
        changed |= state.walker.expire(now);
        changed |= state.stickers.expire(now);
        if changed {
            self.ui.mark_redraw();
        }
    }
}
