use std::time::{Duration, Instant};

use crate::command::{ActionId, Command, CommandDispatchResult, dispatch};
use crate::config::Config;
use crate::content::ContentLibrary;
use crate::error::AppResult;
use crate::event::AppEvent;
use crate::input::KeymapPreset;
use crate::nav::DragTracker;
use crate::ui::HitMap;
use crate::widgets::SplitMix;

use super::actors::{FlipActor, UiActor};
use super::state::{AppState, Phase};

const MILESTONE_POP: Duration = Duration::from_millis(300);

pub struct App {
    pub state: AppState,
    pub config: Config,
    pub(crate) keymap: KeymapPreset,
    pub(crate) flip: FlipActor,
    pub(crate) ui: UiActor,
    pub(crate) drag: DragTracker,
    pub(crate) hits: HitMap,
}

impl App {
    pub fn new(config: Config, library: ContentLibrary) -> AppResult<Self> {
        Self::new_with_rng(config, library, SplitMix::from_clock())
    }

    pub fn new_with_rng(config: Config, library: ContentLibrary, rng: SplitMix) -> AppResult<Self> {
        let state = AppState::new(library, rng)?;
        let keymap = KeymapPreset::parse(&config.keymap.preset);
        let drag = DragTracker::new(config.input.drag_threshold);
        tracing::info!(
            spreads = state.spread_count(),
            keymap = config.keymap.preset.as_str(),
            drag_threshold = config.input.drag_threshold,
            "app initialized"
        );

        Ok(Self {
            state,
            config,
            keymap,
            flip: FlipActor::default(),
            ui: UiActor::new(),
            drag,
            hits: HitMap::default(),
        })
    }

    /// Jump straight to the closed book, as if the loading bar had run and start was pressed.
    pub fn skip_loading(&mut self, now: Instant) {
        while !self.state.loading.is_complete() {
            self.state.loading.tick();
        }
        if self.state.loading.take_load_complete() {
            self.observe(&AppEvent::LoadComplete, now);
        }
        self.apply_command(Command::EnterBook, now);
    }

    pub fn apply_command(&mut self, command: Command, now: Instant) -> CommandDispatchResult {
        let result = dispatch(&mut self.state, command, now);
        for event in &result.emitted_events {
            self.observe(event, now);
        }
        self.ui.mark_redraw();
        result
    }

    pub(crate) fn observe(&mut self, event: &AppEvent, now: Instant) {
        match event {
            AppEvent::TransitionStarted(turn) => {
                let due = now + self.config.timing.settle_delay();
                self.flip.arm(due);
                tracing::debug!(from = turn.from, to = turn.to, "settle armed");
            }
            AppEvent::PageTurned(turn) => {
                tracing::debug!(
                    from = turn.from,
                    to = turn.to,
                    direction = turn.direction.as_str(),
                    "page turned"
                );
                let label = self.state.position_label();
                self.state.status.set(ActionId::PageTurn, label);
            }
            AppEvent::LoadMilestone { progress, coins } => {
                self.state.milestone_pop.trigger(now, MILESTONE_POP);
                tracing::debug!(progress, coins, "loading milestone");
            }
            AppEvent::LoadComplete => {
                tracing::info!("loading complete");
                self.state
                    .status
                    .set(ActionId::Loading, "ready! press enter to start");
            }
            AppEvent::PhaseChanged { from, to } => {
                tracing::info!(from = from.as_str(), to = to.as_str(), "phase changed");
            }
            AppEvent::CoinCollected { total } => {
                tracing::debug!(total, "coin collected");
            }
            AppEvent::CommandExecuted { id, outcome } => {
                tracing::trace!(command = id.as_str(), ?outcome, "command executed");
            }
        }
        self.ui.mark_redraw();
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn needs_redraw(&self) -> bool {
        self.ui.needs_redraw()
    }

    /// When the page turn in flight settles, if one is in flight.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.flip.deadline()
    }
}
