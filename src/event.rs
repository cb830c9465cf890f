use crossterm::event::Event;

use crate::app::Phase;
use crate::command::{ActionId, CommandOutcome};
use crate::nav::Transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// A page turn was accepted; the index moves once it settles.
    TransitionStarted(Transition),
    /// A page turn settled and the book now shows `to`.
    PageTurned(Transition),
    LoadMilestone {
        progress: u8,
        coins: u32,
    },
    LoadComplete,
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    CoinCollected {
        total: u32,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    LoadingTick,
    IdleStep,
    AnimationTick,
    SettleDue,
    Wake,
}
