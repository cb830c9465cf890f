use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::loading::LoadingSequencer;

use super::hits::{HitMap, HitTarget};
use super::layout::{centered_rect, percent_offset};
use super::text::display_width;

const PANEL_WIDTH: u16 = 60;
const PANEL_HEIGHT: u16 = 14;
const ENTER_LABEL: &str = "[ PRESS START ]";
const RUNNER: &str = "ᗧ";

pub fn draw_loading_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    loading: &LoadingSequencer,
    pop_visible: bool,
    hits: &mut HitMap,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
    let block = Block::default()
        .title(" WORLD 1-1 ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);
    if inner.width < 4 || inner.height < 6 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // coins and stars
            Constraint::Length(1), // question blocks
            Constraint::Length(1), // runner track
            Constraint::Length(1), // gauge
            Constraint::Length(1), // spacer
            Constraint::Min(1),    // button
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "LOADING SCRAPBOOK",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    let mut counter = vec![
        Span::styled("◉", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" x{:02}  ", loading.coins_collected())),
        Span::styled(
            "★".repeat(loading.power_stars_visible()),
            Style::default().fg(Color::LightYellow),
        ),
    ];
    if pop_visible {
        counter.push(Span::styled(
            "  +100",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(counter)).alignment(Alignment::Center),
        rows[1],
    );

    let blocks: Vec<Span<'_>> = loading
        .question_blocks_hit()
        .iter()
        .flat_map(|hit| {
            let cell = if *hit {
                Span::styled("[■]", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled("[?]", Style::default().fg(Color::Yellow))
            };
            [cell, Span::raw("   ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(blocks)).alignment(Alignment::Center),
        rows[2],
    );

    let track = rows[3];
    let runner_x = percent_offset(track.x, track.width, f32::from(loading.runner_percent()));
    frame.render_widget(
        Paragraph::new("_".repeat(usize::from(track.width)))
            .style(Style::default().fg(Color::Green)),
        track,
    );
    frame.render_widget(
        Paragraph::new(RUNNER).style(Style::default().fg(Color::Red)),
        Rect::new(runner_x, track.y, 1, 1),
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Red).bg(Color::Black))
        .percent(u16::from(loading.progress()))
        .label(format!("{}%", loading.progress()));
    frame.render_widget(gauge, rows[4]);

    if loading.is_complete() {
        let button = centered_rect(rows[6], display_width(ENTER_LABEL), 1);
        frame.render_widget(
            Paragraph::new(ENTER_LABEL).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            button,
        );
        hits.push(button, HitTarget::EnterBook);
    } else {
        frame.render_widget(
            Paragraph::new("collecting memories...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            rows[6],
        );
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::loading::LoadingSequencer;
    use crate::ui::hits::{HitMap, HitTarget};

    use super::draw_loading_screen;

    fn render(loading: &LoadingSequencer, pop: bool) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| draw_loading_screen(frame, frame.area(), loading, pop, &mut hits))
            .expect("draw");
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, hits)
    }

    #[test]
    fn in_progress_screen_has_no_start_button() {
        let mut loading = LoadingSequencer::new();
        for _ in 0..42 {
            loading.tick();
        }
        let (text, hits) = render(&loading, false);
        assert!(text.contains("LOADING SCRAPBOOK"));
        assert!(text.contains("42%"));
        assert!(!text.contains("PRESS START"));
        assert!(hits.is_empty());
    }

    #[test]
    fn completed_screen_offers_a_clickable_start_button() {
        let mut loading = LoadingSequencer::new();
        for _ in 0..100 {
            loading.tick();
        }
        let (text, hits) = render(&loading, true);
        assert!(text.contains("PRESS START"));
        assert!(text.contains("+100"));
        assert_eq!(hits.len(), 1);

        let found = (0..20u16)
            .flat_map(|row| (0..80u16).map(move |col| (col, row)))
            .any(|(col, row)| hits.target_at(col, row) == Some(HitTarget::EnterBook));
        assert!(found);
    }
}
