use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::error::AppResult;
use crate::ui::{self, HitMap};

use super::core::App;
use super::state::{AppState, Mode, Phase};
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(
        &mut self,
        session: &mut impl TerminalSurface,
        now: Instant,
    ) -> AppResult<()> {
        let state = &self.state;
        let hits = &mut self.hits;
        hits.clear();
        session.draw(|frame| draw_scene(frame, state, now, hits))?;
        self.ui.clear_redraw();
        Ok(())
    }
}

fn draw_scene(frame: &mut Frame<'_>, state: &AppState, now: Instant, hits: &mut HitMap) {
    let layout = ui::split_layout(frame.area(), state.debug_status_visible);

    match state.phase {
        Phase::Loading => ui::draw_loading_screen(
            frame,
            layout.viewer,
            &state.loading,
            state.milestone_pop.is_active(now),
            hits,
        ),
        Phase::Book => {
            let book = ui::book_layout(layout.viewer);
            ui::draw_book(frame, book, state, now, hits);

            let sky = Rect::new(
                layout.viewer.x,
                layout.viewer.y,
                layout.viewer.width,
                book.indicator.y.saturating_sub(layout.viewer.y),
            );
            ui::draw_coins(frame, sky, &state.coins, now, hits);
            ui::draw_walker(frame, book.ground, &state.walker, now, hits);

            if state.mode == Mode::Lightbox {
                ui::draw_lightbox_overlay(frame, layout.viewer, &state.lightbox, hits);
            }
        }
    }

    ui::draw_chrome(frame, layout, state);
}
