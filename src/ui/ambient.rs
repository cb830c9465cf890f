use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::widgets::{CoinField, Heading, IdleWalker};

use super::hits::{HitMap, HitTarget};
use super::layout::percent_offset;
use super::text::{display_width, truncate_to_width};

const WALKER_RIGHT: &str = "ᗧ>";
const WALKER_LEFT: &str = "<ᗤ";

pub fn draw_coins(
    frame: &mut Frame<'_>,
    area: Rect,
    coins: &CoinField,
    now: Instant,
    hits: &mut HitMap,
) {
    if area.width < 3 || area.height == 0 {
        return;
    }
    let style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    for coin in coins.coins().iter().filter(|coin| !coin.collected) {
        let (x, y) = coin_cell(area, coin.x, coin.y);
        let cell = Rect::new(x, y, 3, 1).intersection(area);
        frame.render_widget(Paragraph::new("(◉)").style(style), cell);
        hits.push(cell, HitTarget::Coin(coin.id));
    }

    if let Some((x, y)) = coins.score_pop(now) {
        let (x, y) = coin_cell(area, x, y);
        let row = y.saturating_sub(1).max(area.y);
        let pop = Rect::new(x, row, 4, 1).intersection(area);
        frame.render_widget(
            Paragraph::new("+100").style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            pop,
        );
    }
}

fn coin_cell(area: Rect, x_percent: f32, y_percent: f32) -> (u16, u16) {
    let x = percent_offset(area.x, area.width.saturating_sub(2), x_percent);
    let y = percent_offset(area.y, area.height, y_percent);
    (x, y)
}

/// Draws the walker on the bottom row of `ground`, one row higher while it jumps.
pub fn draw_walker(
    frame: &mut Frame<'_>,
    ground: Rect,
    walker: &IdleWalker,
    now: Instant,
    hits: &mut HitMap,
) {
    if ground.width < 3 || ground.height == 0 {
        return;
    }
    let glyph = match walker.heading() {
        Heading::Right => WALKER_RIGHT,
        Heading::Left => WALKER_LEFT,
    };
    let glyph_width = display_width(glyph);
    let x = percent_offset(ground.x, ground.width.saturating_sub(glyph_width), walker.x());
    let floor = ground.bottom() - 1;
    let y = if walker.is_jumping(now) {
        floor.saturating_sub(1).max(ground.y)
    } else {
        floor
    };

    let body = Rect::new(x, y, glyph_width, 1).intersection(ground);
    frame.render_widget(
        Paragraph::new(glyph).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        body,
    );
    hits.push(body, HitTarget::Walker);

    if let Some(line) = walker.speech(now) {
        let bubble_x = body.right() + 1;
        let room = usize::from(ground.right().saturating_sub(bubble_x));
        if room > 4 {
            let text = truncate_to_width(&format!("« {line} »"), room);
            let bubble = Rect::new(bubble_x, ground.y, display_width(&text), 1);
            frame.render_widget(
                Paragraph::new(text).style(Style::default().fg(Color::White)),
                bubble,
            );
        }
    }
}
