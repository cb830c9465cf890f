use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Mode};
use crate::config::Config;
use crate::ui::HitTarget;

use super::{book_app, test_app};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
}

fn drag(app: &mut App, from: u16, to: u16, now: Instant) {
    app.handle_input_event(mouse(MouseEventKind::Down(MouseButton::Left), from), now);
    app.handle_input_event(mouse(MouseEventKind::Drag(MouseButton::Left), to), now);
    app.handle_input_event(mouse(MouseEventKind::Up(MouseButton::Left), to), now);
}

fn wide_drag_app(now: Instant) -> App {
    let mut config = Config::default();
    config.input.drag_threshold = 100;
    let mut app = test_app(config);
    app.skip_loading(now);
    app
}

#[test]
fn leftward_drag_past_threshold_turns_forward() {
    let now = Instant::now();
    let mut app = wide_drag_app(now);

    drag(&mut app, 500, 350, now);
    assert!(app.state.book.is_transitioning());
    assert_eq!(app.state.book.pending().map(|turn| turn.to), Some(0));
}

#[test]
fn short_drag_turns_nothing() {
    let now = Instant::now();
    let mut app = wide_drag_app(now);

    drag(&mut app, 500, 450, now);
    assert!(!app.state.book.is_transitioning());
    drag(&mut app, 500, 600, now);
    assert!(!app.state.book.is_transitioning());
}

#[test]
fn rightward_drag_turns_backward() {
    let mut now = Instant::now();
    let mut app = wide_drag_app(now);
    drag(&mut app, 500, 350, now);
    now += Duration::from_millis(600);
    app.on_settle_due(now);

    drag(&mut app, 200, 420, now);
    assert_eq!(app.state.book.pending().map(|turn| turn.to), Some(-1));
}

#[test]
fn drag_started_mid_turn_is_ignored() {
    let now = Instant::now();
    let mut app = wide_drag_app(now);
    drag(&mut app, 500, 350, now);

    app.handle_input_event(mouse(MouseEventKind::Down(MouseButton::Left), 500), now);
    assert!(!app.drag.is_dragging());
}

#[test]
fn resize_cancels_a_drag_in_progress() {
    let now = Instant::now();
    let mut app = wide_drag_app(now);
    app.handle_input_event(mouse(MouseEventKind::Down(MouseButton::Left), 500), now);
    assert!(app.drag.is_dragging());

    app.handle_input_event(Event::Resize(100, 40), now);
    app.handle_input_event(mouse(MouseEventKind::Up(MouseButton::Left), 100), now);
    assert!(!app.state.book.is_transitioning());
}

#[test]
fn keys_drive_the_same_guarded_moves() {
    let now = Instant::now();
    let mut app = book_app(now);

    app.handle_input_event(key(KeyCode::Right), now);
    assert!(app.state.book.is_transitioning());
    app.handle_input_event(key(KeyCode::Char(' ')), now);
    app.handle_input_event(key(KeyCode::Left), now);
    assert_eq!(app.state.book.pending().map(|turn| turn.to), Some(0));

    let outcome = app.handle_input_event(key(KeyCode::Char('q')), now);
    assert!(outcome.quit_requested);
}

#[test]
fn clicking_a_hit_region_issues_its_command_instead_of_dragging() {
    let now = Instant::now();
    let mut app = book_app(now);
    app.hits.push(Rect::new(10, 0, 3, 1), HitTarget::Coin(2));

    app.handle_input_event(mouse(MouseEventKind::Down(MouseButton::Left), 11), now);
    assert!(!app.drag.is_dragging());
    assert_eq!(app.state.coins.total_collected(), 1);
    assert!(app.state.coins.coins()[2].collected);
}

#[test]
fn lightbox_takes_arrow_keys_until_escape() {
    let mut now = Instant::now();
    let mut app = book_app(now);
    app.handle_input_event(key(KeyCode::Right), now);
    now += Duration::from_millis(600);
    app.on_settle_due(now);

    app.handle_input_event(key(KeyCode::Char('p')), now);
    assert_eq!(app.state.mode, Mode::Lightbox);
    app.handle_input_event(key(KeyCode::Right), now);
    assert_eq!(app.state.lightbox.current_index(), 1);
    app.handle_input_event(key(KeyCode::Right), now);
    assert_eq!(app.state.lightbox.current_index(), 0);
    assert!(!app.state.book.is_transitioning());

    app.handle_input_event(key(KeyCode::Esc), now);
    assert_eq!(app.state.mode, Mode::Normal);
    app.handle_input_event(key(KeyCode::Right), now);
    assert!(app.state.book.is_transitioning());
}

#[test]
fn poking_the_walker_with_m_shows_a_speech_line() {
    let now = Instant::now();
    let mut app = book_app(now);
    app.handle_input_event(key(KeyCode::Char('m')), now);

    assert_eq!(app.state.walker.pokes(), 1);
    assert!(app.state.walker.speech(now).is_some());
    assert!(app.state.walker.is_jumping(now));
    app.on_animation_tick(now + Duration::from_secs(2));
    assert!(app.state.walker.speech(now + Duration::from_secs(2)).is_none());
}
