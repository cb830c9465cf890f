use std::time::Instant;

use crate::app::{AppState, Phase};
use crate::event::AppEvent;

use super::core::{
    bump_sticker, cancel, close_lightbox, collect_coin, cover, enter_book, jump_to,
    lightbox_step, next_page, open_lightbox, poke_walker, prev_page, toggle_debug_status,
};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

struct Snapshot {
    phase: Phase,
    pending_turn: bool,
    coins: u32,
}

impl Snapshot {
    fn of(app: &AppState) -> Self {
        Self {
            phase: app.phase,
            pending_turn: app.book.pending().is_some(),
            coins: app.coins.total_collected(),
        }
    }
}

pub fn dispatch(app: &mut AppState, cmd: Command, now: Instant) -> CommandDispatchResult {
    let before = Snapshot::of(app);
    let action_id = cmd.action_id();

    let outcome = if app.phase == Phase::Loading && !allowed_while_loading(&cmd) {
        app.status.set(action_id, "still on the loading screen");
        CommandOutcome::Noop
    } else {
        match cmd {
            Command::EnterBook => enter_book(app),
            Command::NextPage => next_page(app),
            Command::PrevPage => prev_page(app),
            Command::Cover => cover(app),
            Command::JumpTo { index } => jump_to(app, index),
            Command::OpenLightbox { photo } => open_lightbox(app, photo),
            Command::LightboxNext => lightbox_step(app, true),
            Command::LightboxPrev => lightbox_step(app, false),
            Command::CloseLightbox => close_lightbox(app),
            Command::CollectCoin { id } => collect_coin(app, id, now),
            Command::PokeWalker => poke_walker(app, now),
            Command::BumpSticker { spread, sticker } => bump_sticker(app, spread, sticker, now),
            Command::DebugStatusToggle => toggle_debug_status(app),
            Command::Cancel => cancel(app),
            Command::Quit => {
                app.status.set(ActionId::Quit, "quit requested");
                CommandOutcome::QuitRequested
            }
        }
    };

    let mut emitted_events = collect_transition_events(app, &before);
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    CommandDispatchResult {
        outcome,
        emitted_events,
    }
}

fn allowed_while_loading(cmd: &Command) -> bool {
    matches!(
        cmd,
        Command::EnterBook | Command::DebugStatusToggle | Command::Cancel | Command::Quit
    )
}

fn collect_transition_events(app: &AppState, before: &Snapshot) -> Vec<AppEvent> {
    let mut events = Vec::new();
    if app.phase != before.phase {
        events.push(AppEvent::PhaseChanged {
            from: before.phase,
            to: app.phase,
        });
    }
    if !before.pending_turn
        && let Some(transition) = app.book.pending()
    {
        events.push(AppEvent::TransitionStarted(transition));
    }
    if app.coins.total_collected() != before.coins {
        events.push(AppEvent::CoinCollected {
            total: app.coins.total_collected(),
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crate::app::{AppState, Mode, Phase};
    use crate::command::{ActionId, Command, CommandOutcome};
    use crate::content::ContentLibrary;
    use crate::event::AppEvent;
    use crate::nav::FlipDirection;
    use crate::widgets::SplitMix;

    use super::dispatch;

    fn book_state() -> AppState {
        let library = ContentLibrary::builtin().expect("builtin content");
        let mut app = AppState::new(library, SplitMix::new(9)).expect("state");
        for _ in 0..100 {
            app.loading.tick();
        }
        app
    }

    #[test]
    fn navigation_is_refused_on_the_loading_screen() {
        let mut app = book_state();
        let result = dispatch(&mut app, Command::NextPage, Instant::now());
        assert_eq!(result.outcome, CommandOutcome::Noop);
        assert!(!app.book.is_transitioning());
        assert_eq!(result.emitted_events.len(), 1);
    }

    #[test]
    fn enter_book_emits_phase_change() {
        let mut app = book_state();
        let result = dispatch(&mut app, Command::EnterBook, Instant::now());
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(app.phase, Phase::Book);
        assert!(matches!(
            result.emitted_events[0],
            AppEvent::PhaseChanged {
                from: Phase::Loading,
                to: Phase::Book
            }
        ));
    }

    #[test]
    fn dispatch_next_page_emits_transition_started_and_command_executed() {
        let mut app = book_state();
        dispatch(&mut app, Command::EnterBook, Instant::now());

        let result = dispatch(&mut app, Command::NextPage, Instant::now());
        assert_eq!(result.outcome, CommandOutcome::Applied);
        assert_eq!(result.emitted_events.len(), 2);
        match result.emitted_events[0] {
            AppEvent::TransitionStarted(transition) => {
                assert_eq!((transition.from, transition.to), (-1, 0));
                assert_eq!(transition.direction, FlipDirection::Forward);
            }
            ref other => panic!("unexpected event {other:?}"),
        }
        assert!(matches!(
            result.emitted_events[1],
            AppEvent::CommandExecuted {
                id: ActionId::NextPage,
                outcome: CommandOutcome::Applied
            }
        ));

        let second = dispatch(&mut app, Command::NextPage, Instant::now());
        assert_eq!(second.outcome, CommandOutcome::Noop);
        assert_eq!(second.emitted_events.len(), 1);
    }

    #[test]
    fn lightbox_blocks_page_turns_until_closed() {
        let mut app = book_state();
        let now = Instant::now();
        dispatch(&mut app, Command::EnterBook, now);
        dispatch(&mut app, Command::NextPage, now);
        app.book.settle();

        let opened = dispatch(&mut app, Command::OpenLightbox { photo: 0 }, now);
        assert_eq!(opened.outcome, CommandOutcome::Applied);
        assert_eq!(app.mode, Mode::Lightbox);
        assert_eq!(app.lightbox.len(), 2);

        let blocked = dispatch(&mut app, Command::NextPage, now);
        assert_eq!(blocked.outcome, CommandOutcome::Noop);
        assert!(!app.book.is_transitioning());

        assert_eq!(
            dispatch(&mut app, Command::Cancel, now).outcome,
            CommandOutcome::Applied
        );
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(
            dispatch(&mut app, Command::NextPage, now).outcome,
            CommandOutcome::Applied
        );
    }

    #[test]
    fn collecting_a_coin_twice_counts_once() {
        let mut app = book_state();
        let now = Instant::now();
        dispatch(&mut app, Command::EnterBook, now);

        let first = dispatch(&mut app, Command::CollectCoin { id: 2 }, now);
        assert!(matches!(
            first.emitted_events[0],
            AppEvent::CoinCollected { total: 1 }
        ));
        let again = dispatch(&mut app, Command::CollectCoin { id: 2 }, now);
        assert_eq!(again.outcome, CommandOutcome::Noop);
        assert_eq!(app.coins.total_collected(), 1);
    }

    #[test]
    fn quit_is_always_available() {
        let mut app = book_state();
        let result = dispatch(&mut app, Command::Quit, Instant::now());
        assert_eq!(result.outcome, CommandOutcome::QuitRequested);
    }
}
