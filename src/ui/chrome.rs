use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Mode};

use super::layout::UiLayout;

pub fn draw_chrome(frame: &mut Frame<'_>, layout: UiLayout, app: &AppState) {
    let mode = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Lightbox => "PHOTO",
    };
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };

    let status_text = format!(
        "{} | {} | coins x{} | {} | {}",
        app.phase.as_str(),
        app.position_label(),
        app.coins.total_collected(),
        mode,
        message
    );
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Black).bg(Color::Gray))
        .wrap(Wrap { trim: true });

    if app.debug_status_visible && layout.status.height >= 2 {
        let top = Rect::new(layout.status.x, layout.status.y, layout.status.width, 1);
        frame.render_widget(status, top);

        let nav = app.book.state();
        let command_id = app
            .status
            .last_action_id
            .map(|id| id.as_str())
            .unwrap_or("-");
        let pending = app
            .book
            .pending()
            .map(|turn| format!("{}->{}", turn.from, turn.to))
            .unwrap_or_else(|| "-".to_string());
        let debug_text = format!(
            "cmd={command_id} | index={} | turning={} | dir={} | pending={pending} | load={}% | walker={:.0}",
            nav.current_index,
            nav.is_transitioning,
            nav.direction.as_str(),
            app.loading.progress(),
            app.walker.x(),
        );
        let bottom = Rect::new(
            layout.status.x,
            layout.status.y + 1,
            layout.status.width,
            layout.status.height.saturating_sub(1).max(1),
        );
        frame.render_widget(Paragraph::new(debug_text).wrap(Wrap { trim: true }), bottom);
        return;
    }

    frame.render_widget(status, layout.status);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::app::{AppState, Phase};
    use crate::content::ContentLibrary;
    use crate::ui::layout::split_layout;
    use crate::widgets::SplitMix;

    use super::draw_chrome;

    fn status_rows(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 10)).expect("terminal");
        terminal
            .draw(|frame| {
                let layout = split_layout(frame.area(), app.debug_status_visible);
                draw_chrome(frame, layout, app);
            })
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn status_line_shows_position_and_coins() {
        let library = ContentLibrary::builtin().expect("builtin content");
        let mut app = AppState::new(library, SplitMix::new(1)).expect("state");
        app.phase = Phase::Book;
        app.book.next();
        app.book.settle();

        let text = status_rows(&app);
        assert!(text.contains("BOOK | 1 / 5 | coins x0 | NORMAL"));
        assert!(!text.contains("turning="));
    }

    #[test]
    fn debug_row_reports_transition_state() {
        let library = ContentLibrary::builtin().expect("builtin content");
        let mut app = AppState::new(library, SplitMix::new(1)).expect("state");
        app.phase = Phase::Book;
        app.debug_status_visible = true;
        app.book.next();

        let text = status_rows(&app);
        assert!(text.contains("turning=true"));
        assert!(text.contains("pending=-1->0"));
    }
}
