use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::content::{
    BackCoverText, CoverText, PageSpread, Photo, PhotoVariant, StickerKind,
};
use crate::nav::{FlipDirection, Position};

use super::hits::{HitMap, HitTarget};
use super::layout::{BookLayout, centered_rect};
use super::text::{display_width, truncate_to_width};

const OPEN_LABEL: &str = "[ Open ▶ ]";
const CLOSE_LABEL: &str = "[ ◀ Back to cover ]";
const MAX_PHOTOS_PER_ROW: usize = 3;
const PHOTO_ROW_HEIGHT: u16 = 7;
const MESSAGE_BOX_HEIGHT: u16 = 4;

pub fn draw_book(
    frame: &mut Frame<'_>,
    layout: BookLayout,
    app: &AppState,
    now: Instant,
    hits: &mut HitMap,
) {
    if layout.book.width < 8 || layout.book.height < 5 {
        return;
    }

    match app.position() {
        Position::Cover => draw_cover(frame, layout.book, app.library.cover(), hits),
        Position::BackCover => {
            draw_back_cover(frame, layout.book, app.library.back_cover(), hits)
        }
        Position::Spread(index) => {
            if let Some(spread) = app.library.spread(index) {
                draw_spread(frame, layout, spread, hits);
                draw_stickers(frame, layout.book, app, index, spread, now, hits);
            }
        }
    }

    if let Some(turn) = app.book.pending() {
        shade_turning_page(frame, layout, app.position(), turn.direction);
    }
    draw_arrows(frame, layout, app, hits);
    draw_indicator(frame, layout.indicator, app, hits);
}

fn draw_cover(frame: &mut Frame<'_>, area: Rect, cover: &CoverText, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let mut lines = vec![
        Line::styled(
            truncate_to_width(&cover.title, width),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(truncate_to_width(&cover.subtitle, width)),
    ];
    if !cover.year.is_empty() {
        lines.push(Line::styled(
            cover.year.clone(),
            Style::default().fg(Color::LightRed),
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        truncate_to_width(&cover.tagline, width),
        Style::default().add_modifier(Modifier::ITALIC),
    ));

    let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let text_area = centered_rect(inner, inner.width, text_height.saturating_add(2));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    let button_row = Rect::new(
        inner.x,
        text_area.bottom().min(inner.bottom().saturating_sub(1)),
        inner.width,
        1,
    );
    draw_button(frame, button_row, OPEN_LABEL, HitTarget::OpenBook, hits);
}

fn draw_back_cover(
    frame: &mut Frame<'_>,
    area: Rect,
    back: &BackCoverText,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(
            back.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    lines.extend(back.closing_lines.iter().map(|line| Line::raw(line.clone())));
    if !back.credits.is_empty() {
        lines.push(Line::raw(""));
        lines.extend(back.credits.iter().map(|line| {
            Line::styled(line.clone(), Style::default().fg(Color::DarkGray))
        }));
    }

    let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let text_area = centered_rect(
        inner,
        inner.width,
        text_height.min(inner.height.saturating_sub(1)),
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );

    let button_row = Rect::new(
        inner.x,
        text_area.bottom().min(inner.bottom().saturating_sub(1)),
        inner.width,
        1,
    );
    draw_button(frame, button_row, CLOSE_LABEL, HitTarget::CloseBook, hits);
}

fn draw_button(
    frame: &mut Frame<'_>,
    row: Rect,
    label: &str,
    target: HitTarget,
    hits: &mut HitMap,
) {
    if row.width == 0 || row.height == 0 {
        return;
    }
    let button = centered_rect(row, display_width(label), 1);
    frame.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        button,
    );
    hits.push(button, target);
}

fn draw_spread(frame: &mut Frame<'_>, layout: BookLayout, spread: &PageSpread, hits: &mut HitMap) {
    let left_photos: Vec<&Photo> = spread.left_photos_all().collect();
    let right_photos: Vec<&Photo> = spread.right_photos_all().collect();

    if spread.is_title_only() {
        draw_title_page(frame, layout.left, &spread.left_title);
        draw_title_page(frame, layout.right, &spread.right_title);
        return;
    }

    let left_body = left_body_lines(spread);
    let left_body_area = draw_page(
        frame,
        layout.left,
        &spread.left_title,
        &left_photos,
        0,
        hits,
    );
    draw_body(frame, left_body_area, left_body);

    let mut right_body_area = draw_page(
        frame,
        layout.right,
        &spread.right_title,
        &right_photos,
        left_photos.len(),
        hits,
    );
    if let Some(message) = &spread.message_box
        && right_body_area.height > MESSAGE_BOX_HEIGHT
    {
        let box_area = Rect::new(
            right_body_area.x,
            right_body_area.bottom() - MESSAGE_BOX_HEIGHT,
            right_body_area.width,
            MESSAGE_BOX_HEIGHT,
        );
        let block = Block::default()
            .title(format!(" {} ", message.label))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        frame.render_widget(
            Paragraph::new(message.text.clone())
                .block(block)
                .wrap(Wrap { trim: true }),
            box_area,
        );
        right_body_area.height -= MESSAGE_BOX_HEIGHT;
    }
    draw_body(frame, right_body_area, right_body_lines(spread));

    if let Some(center) = &spread.center_photo {
        let area = centered_rect(
            layout.book,
            (layout.book.width / 3).clamp(12, 28),
            PHOTO_ROW_HEIGHT.min(layout.book.height / 2),
        );
        frame.render_widget(Clear, area);
        draw_photo(frame, area, center);
        hits.push(
            area,
            HitTarget::Photo(left_photos.len() + right_photos.len()),
        );
    }
}

fn draw_title_page(frame: &mut Frame<'_>, area: Rect, title: &str) {
    let block = page_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let row = centered_rect(inner, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            truncate_to_width(title, usize::from(inner.width)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        row,
    );
}

fn page_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
}

/// Frame, title and photo row of one page. Returns the area left for text.
fn draw_page(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    photos: &[&Photo],
    first_photo_index: usize,
    hits: &mut HitMap,
) -> Rect {
    let block = page_block();
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return inner;
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            truncate_to_width(title, usize::from(inner.width)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    let mut rest = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );

    if photos.is_empty() || rest.height < 4 {
        return rest;
    }

    let row_height = PHOTO_ROW_HEIGHT.min(rest.height / 2).max(3);
    let row = Rect::new(rest.x, rest.y, rest.width, row_height);
    let shown = photos.len().min(MAX_PHOTOS_PER_ROW);
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, shown as u32); shown])
        .split(row);
    for (offset, (photo, cell)) in photos.iter().zip(cells.iter()).enumerate() {
        draw_photo(frame, *cell, photo);
        hits.push(*cell, HitTarget::Photo(first_photo_index + offset));
    }

    rest.y += row_height;
    rest.height -= row_height;
    rest
}

fn draw_photo(frame: &mut Frame<'_>, area: Rect, photo: &Photo) {
    let alignment = if photo.rotation <= -1.0 {
        Alignment::Left
    } else if photo.rotation >= 1.0 {
        Alignment::Right
    } else {
        Alignment::Center
    };

    let block = match photo.variant {
        PhotoVariant::Polaroid => Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
        PhotoVariant::Vintage => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow)),
        PhotoVariant::Filmstrip => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("▮ ▮ ▮"),
        PhotoVariant::Taped => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("═╪═")
            .title_alignment(Alignment::Center),
        PhotoVariant::Frameless => Block::default(),
    };

    let width = usize::from(area.width.saturating_sub(2));
    let mut lines = vec![Line::styled(
        truncate_to_width(&format!("[{}]", photo.alt), width),
        Style::default().add_modifier(Modifier::ITALIC),
    )];
    if let Some(caption) = &photo.caption {
        lines.push(Line::styled(
            truncate_to_width(caption, width),
            Style::default().fg(Color::Gray),
        ));
    }
    if photo.link.is_some() {
        lines.push(Line::styled("↗", Style::default().fg(Color::Cyan)));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn left_body_lines(spread: &PageSpread) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = spread
        .left_text
        .iter()
        .map(|paragraph| Line::raw(paragraph.clone()))
        .collect();
    lines.extend(
        spread
            .left_list
            .iter()
            .map(|item| Line::from(vec![Span::raw("• "), Span::raw(item.clone())])),
    );
    lines
}

fn right_body_lines(spread: &PageSpread) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = spread
        .right_text
        .iter()
        .map(|paragraph| Line::raw(paragraph.clone()))
        .collect();
    for section in &spread.right_text_sections {
        lines.push(Line::styled(
            section.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::raw(section.content.clone()));
    }
    lines
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    if lines.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    Left,
    Right,
}

/// Reads placement hints such as "top-4 right-4". Unknown hints sit top right.
fn sticker_anchor(position: &str) -> (Vertical, Horizontal) {
    let mut vertical = Vertical::Top;
    let mut horizontal = Horizontal::Right;
    for token in position.split_whitespace() {
        if token.starts_with("bottom") {
            vertical = Vertical::Bottom;
        } else if token.starts_with("top") {
            vertical = Vertical::Top;
        } else if token.starts_with("left") {
            horizontal = Horizontal::Left;
        } else if token.starts_with("right") {
            horizontal = Horizontal::Right;
        }
    }
    (vertical, horizontal)
}

fn sticker_glyph(kind: StickerKind) -> (&'static str, Color) {
    match kind {
        StickerKind::Mushroom => ("♠", Color::Red),
        StickerKind::Star => ("★", Color::Yellow),
        StickerKind::Coin => ("◉", Color::Yellow),
        StickerKind::Flower => ("✿", Color::Magenta),
        StickerKind::Block => ("▣", Color::LightYellow),
        StickerKind::Pipe => ("╥", Color::Green),
    }
}

fn draw_stickers(
    frame: &mut Frame<'_>,
    book: Rect,
    app: &AppState,
    spread_index: usize,
    spread: &PageSpread,
    now: Instant,
    hits: &mut HitMap,
) {
    if book.width < 8 || book.height < 4 {
        return;
    }
    let mut used = [[0u16; 2]; 2];
    for (index, sticker) in spread.stickers.iter().enumerate() {
        let (vertical, horizontal) = sticker_anchor(&sticker.position);
        let slot = &mut used[vertical as usize][horizontal as usize];
        let inset = 2 + *slot * 4;
        *slot += 1;

        let bumped = app.stickers.is_bumped(spread_index, index, now);
        let mut y = match vertical {
            Vertical::Top => book.y + 1,
            Vertical::Bottom => book.bottom().saturating_sub(2),
        };
        if bumped && y > book.y {
            y -= 1;
        }
        let x = match horizontal {
            Horizontal::Left => book.x + inset,
            Horizontal::Right => book.right().saturating_sub(inset + 3),
        };
        let area = Rect::new(x, y, 3, 1).intersection(book);

        let (glyph, color) = sticker_glyph(sticker.kind);
        let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if bumped {
            style = style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new(format!(" {glyph} ")).style(style), area);
        hits.push(
            area,
            HitTarget::Sticker {
                spread: spread_index,
                sticker: index,
            },
        );
    }
}

fn shade_turning_page(
    frame: &mut Frame<'_>,
    layout: BookLayout,
    position: Position,
    direction: FlipDirection,
) {
    let area = match (position, direction) {
        (Position::Spread(_), FlipDirection::Forward) => layout.right,
        (Position::Spread(_), FlipDirection::Backward) => layout.left,
        _ => layout.book,
    };
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let marker = match direction {
        FlipDirection::Forward => "«",
        FlipDirection::Backward => "»",
    };
    let gutter = Rect::new(layout.left.right().saturating_sub(1), layout.book.y, 2, 1)
        .intersection(layout.book);
    frame.render_widget(
        Paragraph::new(marker.repeat(2)).style(Style::default().fg(Color::Cyan)),
        gutter,
    );
}

fn draw_arrows(frame: &mut Frame<'_>, layout: BookLayout, app: &AppState, hits: &mut HitMap) {
    let index = app.book.current_index();
    let end = app.spread_count() as isize;
    let row = layout.book.y + layout.book.height / 2;
    let arrow_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    if index > -1 && layout.book.x >= 2 {
        let area = Rect::new(layout.book.x - 2, row, 1, 1);
        frame.render_widget(Paragraph::new("◀").style(arrow_style), area);
        hits.push(area, HitTarget::PrevArrow);
    }
    let right = layout.book.right() + 1;
    if index < end && right < frame.area().right() {
        let area = Rect::new(right, row, 1, 1);
        frame.render_widget(Paragraph::new("▶").style(arrow_style), area);
        hits.push(area, HitTarget::NextArrow);
    }
}

fn draw_indicator(frame: &mut Frame<'_>, area: Rect, app: &AppState, hits: &mut HitMap) {
    let count = app.spread_count();
    if count == 0 || area.width == 0 || area.height == 0 {
        return;
    }
    let current = app.position().spread();

    let width = u16::try_from(count * 2 - 1).unwrap_or(u16::MAX);
    let strip = centered_rect(area, width, 1);
    for index in 0..count {
        let Ok(offset) = u16::try_from(index * 2) else {
            break;
        };
        if offset >= strip.width {
            break;
        }
        let cell = Rect::new(strip.x + offset, strip.y, 1, 1);
        let (glyph, style) = if current == Some(index) {
            ("●", Style::default().fg(Color::Yellow))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(glyph).style(style), cell);
        hits.push(cell, HitTarget::IndicatorDot(index));
    }

    let hint = "←/→ turn  drag to flip";
    if strip.x >= area.x + display_width(hint) + 2 {
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            Rect::new(area.x + 1, area.y, display_width(hint), 1),
        );
    }
}
