use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub viewer: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect, debug_status_visible: bool) -> UiLayout {
    let status_height = if debug_status_visible { 2 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_height)])
        .split(area);

    UiLayout {
        viewer: chunks[0],
        status: chunks[1],
    }
}

/// Where the open book goes inside the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLayout {
    pub book: Rect,
    pub left: Rect,
    pub right: Rect,
    pub indicator: Rect,
    /// Bottom strip the walker paces along.
    pub ground: Rect,
}

const BOOK_MAX_WIDTH: u16 = 110;
const BOOK_MAX_HEIGHT: u16 = 34;

pub fn book_layout(viewer: Rect) -> BookLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(viewer);
    let stage = rows[0];
    let book = centered_rect(
        stage,
        stage.width.saturating_sub(4).min(BOOK_MAX_WIDTH),
        stage.height.min(BOOK_MAX_HEIGHT),
    );
    let pages = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(book);

    BookLayout {
        book,
        left: pages[0],
        right: pages[1],
        indicator: rows[1],
        ground: rows[2],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Cell at `percent` of the way across `span` cells starting at `origin`.
pub(crate) fn percent_offset(origin: u16, span: u16, percent: f32) -> u16 {
    let percent = percent.clamp(0.0, 100.0);
    let offset = (f32::from(span.saturating_sub(1)) * percent / 100.0).round() as u16;
    origin + offset
}
