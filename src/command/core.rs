use std::time::Instant;

use crate::app::{AppState, Mode, Phase};
use crate::nav::{NavOutcome, PageFlipper, Position};

use super::types::{ActionId, CommandOutcome};

pub(crate) fn enter_book(app: &mut AppState) -> CommandOutcome {
    if app.phase == Phase::Book {
        app.status.set(ActionId::EnterBook, "already inside the book");
        return CommandOutcome::Noop;
    }
    if !app.loading.enter() {
        app.status.set(
            ActionId::EnterBook,
            format!("still loading ({}%)", app.loading.progress()),
        );
        return CommandOutcome::Noop;
    }
    app.phase = Phase::Book;
    app.status.set(ActionId::EnterBook, "opened the scrapbook");
    CommandOutcome::Applied
}

pub(crate) fn next_page(app: &mut AppState) -> CommandOutcome {
    navigate(app, ActionId::NextPage, |book| book.next())
}

pub(crate) fn prev_page(app: &mut AppState) -> CommandOutcome {
    navigate(app, ActionId::PrevPage, |book| book.prev())
}

pub(crate) fn cover(app: &mut AppState) -> CommandOutcome {
    navigate(app, ActionId::Cover, |book| book.jump_to_cover())
}

pub(crate) fn jump_to(app: &mut AppState, index: isize) -> CommandOutcome {
    navigate(app, ActionId::JumpTo, |book| book.jump_to(index))
}

fn navigate(
    app: &mut AppState,
    id: ActionId,
    request: impl FnOnce(&mut PageFlipper) -> NavOutcome,
) -> CommandOutcome {
    if app.phase != Phase::Book {
        app.status.set(id, "the book is not open yet");
        return CommandOutcome::Noop;
    }
    if app.mode == Mode::Lightbox {
        app.status.set(id, "close the photo viewer first");
        return CommandOutcome::Noop;
    }

    match request(&mut app.book) {
        NavOutcome::Started(transition) => {
            let target = Position::from_index(transition.to, app.spread_count());
            let label = match target {
                Some(Position::Cover) => "cover".to_string(),
                Some(Position::Spread(index)) => {
                    format!("page {} / {}", index + 1, app.spread_count())
                }
                Some(Position::BackCover) | None => "back cover".to_string(),
            };
            app.status.set(
                id,
                format!("turning {} to {label}", transition.direction.as_str()),
            );
            CommandOutcome::Applied
        }
        NavOutcome::Ignored(reason) => {
            tracing::debug!(action = id.as_str(), reason = reason.as_str(), "navigation ignored");
            app.status.set(id, reason.as_str());
            CommandOutcome::Noop
        }
    }
}

pub(crate) fn open_lightbox(app: &mut AppState, photo: usize) -> CommandOutcome {
    if app.phase != Phase::Book || app.book.is_transitioning() {
        app.status.set(ActionId::OpenLightbox, "nothing to look at right now");
        return CommandOutcome::Noop;
    }
    let photos: Vec<_> = app
        .current_spread()
        .map(|spread| spread.photos().into_iter().cloned().collect())
        .unwrap_or_default();
    if !app.lightbox.open(photos, photo) {
        app.status.set(ActionId::OpenLightbox, "no photos on this page");
        return CommandOutcome::Noop;
    }
    app.mode = Mode::Lightbox;
    describe_lightbox(app, ActionId::OpenLightbox);
    CommandOutcome::Applied
}

pub(crate) fn lightbox_step(app: &mut AppState, forward: bool) -> CommandOutcome {
    let id = if forward {
        ActionId::LightboxNext
    } else {
        ActionId::LightboxPrev
    };
    let moved = if forward {
        app.lightbox.next()
    } else {
        app.lightbox.prev()
    };
    if !moved {
        app.status.set(id, "photo viewer is closed");
        return CommandOutcome::Noop;
    }
    describe_lightbox(app, id);
    CommandOutcome::Applied
}

pub(crate) fn close_lightbox(app: &mut AppState) -> CommandOutcome {
    if !app.lightbox.close() {
        app.status.set(ActionId::CloseLightbox, "photo viewer is closed");
        return CommandOutcome::Noop;
    }
    app.mode = Mode::Normal;
    app.status.set(ActionId::CloseLightbox, "closed photo viewer");
    CommandOutcome::Applied
}

fn describe_lightbox(app: &mut AppState, id: ActionId) {
    let position = format!(
        "photo {}/{}",
        app.lightbox.current_index() + 1,
        app.lightbox.len()
    );
    let message = match app.lightbox.current_link() {
        Some(link) => format!("{position} | link: {link}"),
        None => position,
    };
    app.status.set(id, message);
}

pub(crate) fn collect_coin(app: &mut AppState, id: usize, now: Instant) -> CommandOutcome {
    match app.coins.collect(id, now) {
        Some(total) => {
            app.status.set(ActionId::CollectCoin, format!("+100 (coins x{total})"));
            CommandOutcome::Applied
        }
        None => {
            app.status.set(ActionId::CollectCoin, "that coin is gone");
            CommandOutcome::Noop
        }
    }
}

pub(crate) fn poke_walker(app: &mut AppState, now: Instant) -> CommandOutcome {
    let line = app.walker.poke(now, &mut app.rng);
    app.status.set(ActionId::PokeWalker, line);
    CommandOutcome::Applied
}

pub(crate) fn bump_sticker(
    app: &mut AppState,
    spread: usize,
    sticker: usize,
    now: Instant,
) -> CommandOutcome {
    let exists = app
        .library
        .spread(spread)
        .is_some_and(|page| sticker < page.stickers.len());
    if !exists {
        app.status.set(ActionId::BumpSticker, "no sticker there");
        return CommandOutcome::Noop;
    }
    app.stickers.bump(spread, sticker, now);
    app.status.set(ActionId::BumpSticker, "boing");
    CommandOutcome::Applied
}

pub(crate) fn toggle_debug_status(app: &mut AppState) -> CommandOutcome {
    app.debug_status_visible = !app.debug_status_visible;
    let state = if app.debug_status_visible { "on" } else { "off" };
    app.status
        .set(ActionId::DebugStatusToggle, format!("debug status: {state}"));
    CommandOutcome::Applied
}

pub(crate) fn cancel(app: &mut AppState) -> CommandOutcome {
    if app.mode == Mode::Lightbox {
        return close_lightbox(app);
    }
    app.status.set(ActionId::Cancel, "nothing to cancel");
    CommandOutcome::Noop
}
