use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::widgets::PhotoLightbox;

use super::hits::{HitMap, HitTarget};
use super::layout::centered_rect;

pub fn draw_lightbox_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    lightbox: &PhotoLightbox,
    hits: &mut HitMap,
) {
    let Some(photo) = lightbox.current() else {
        return;
    };
    if area.width < 12 || area.height < 7 {
        return;
    }

    let popup_width = area.width.saturating_sub(8).min(72);
    let popup_height = area.height.saturating_sub(4).clamp(7, 20);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(
            " photo {}/{} ",
            lightbox.current_index() + 1,
            lightbox.len()
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    hits.push(area, HitTarget::LightboxClose);
    hits.push(popup, HitTarget::LightboxNext);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // picture
            Constraint::Length(1), // caption
            Constraint::Length(1), // link
            Constraint::Length(1), // controls
        ])
        .split(inner);

    let mut picture = vec![
        Line::styled(
            format!("[{}]", photo.alt),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::styled(
            format!("{} frame", photo.variant.as_str()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if photo.rotation.abs() >= 1.0 {
        picture.push(Line::styled(
            format!("tilted {:+.0}°", photo.rotation),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let picture_area = centered_rect(
        chunks[0],
        chunks[0].width,
        u16::try_from(picture.len()).unwrap_or(1),
    );
    frame.render_widget(
        Paragraph::new(picture)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        picture_area,
    );

    if let Some(caption) = &photo.caption {
        frame.render_widget(
            Paragraph::new(caption.clone()).alignment(Alignment::Center),
            chunks[1],
        );
    }
    if let Some(link) = &photo.link {
        frame.render_widget(
            Paragraph::new(format!("↗ {link}"))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan)),
            chunks[2],
        );
    }

    let controls = chunks[3];
    let prev = Rect::new(controls.x, controls.y, 3.min(controls.width), 1);
    let next = Rect::new(
        controls.right().saturating_sub(3),
        controls.y,
        3.min(controls.width),
        1,
    );
    let button = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new("esc close")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        controls,
    );
    frame.render_widget(Paragraph::new(" ◀ ").style(button), prev);
    frame.render_widget(Paragraph::new(" ▶ ").style(button), next);
    hits.push(prev, HitTarget::LightboxPrev);
    hits.push(next, HitTarget::LightboxNext);
}
