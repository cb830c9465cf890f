use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{self, MissedTickBehavior};

use crate::command::ActionId;
use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::state::Phase;
use super::terminal_session::{TerminalSession, TerminalSurface};

struct LoopRuntime {
    session: TerminalSession,
    loading_tick: time::Interval,
    idle_tick: time::Interval,
    animation_tick: time::Interval,
    wake_timeout: Duration,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue,
    Break,
}

struct Timers<'a> {
    loading_tick: &'a mut time::Interval,
    idle_tick: &'a mut time::Interval,
    animation_tick: &'a mut time::Interval,
    loading_active: bool,
    settle_deadline: Option<Instant>,
    wake_timeout: Duration,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        let result = self.drive(&mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        tracing::info!("terminal restored");
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let timing = &self.config.timing;
        let session = TerminalSession::enter()?;
        if let Ok(size) = session.size() {
            tracing::debug!(width = size.width, height = size.height, "terminal session entered");
        }

        let mut loading_tick = time::interval(timing.loading_tick());
        loading_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut idle_tick = time::interval(timing.idle_step());
        idle_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut animation_tick = time::interval(timing.animation_tick());
        animation_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let (loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();

        Ok(LoopRuntime {
            session,
            loading_tick,
            idle_tick,
            animation_tick,
            wake_timeout: timing.input_poll_timeout(),
            loop_event_rx,
            loop_event_runtime,
        })
    }

    async fn drive(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if self.ui.needs_redraw() {
                self.render_frame(&mut runtime.session, Instant::now())?;
            }

            let waited = wait_next_event(
                &mut runtime.loop_event_rx,
                Timers {
                    loading_tick: &mut runtime.loading_tick,
                    idle_tick: &mut runtime.idle_tick,
                    animation_tick: &mut runtime.animation_tick,
                    loading_active: self.state.phase == Phase::Loading,
                    settle_deadline: self.flip.deadline(),
                    wake_timeout: runtime.wake_timeout,
                },
            )
            .await;
            if matches!(
                self.handle_waited_event(waited, runtime)?,
                LoopControl::Break
            ) {
                return Ok(());
            }
        }
    }

    fn handle_waited_event(
        &mut self,
        waited: WaitEvent,
        runtime: &mut LoopRuntime,
    ) -> AppResult<LoopControl> {
        let now = Instant::now();
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let resized = matches!(event, crossterm::event::Event::Resize(_, _));
                let outcome = self.handle_input_event(event, now);
                if resized {
                    runtime.session.clear()?;
                }
                if outcome.quit_requested {
                    tracing::info!("quit requested");
                    return Ok(LoopControl::Break);
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                tracing::warn!(%message, "terminal input error");
                self.state
                    .status
                    .set(ActionId::Input, format!("input error: {message}"));
                self.ui.mark_redraw();
            }
            WaitEvent::Event(DomainEvent::LoadingTick) => {
                self.on_loading_tick(now);
            }
            WaitEvent::Event(DomainEvent::SettleDue) => {
                self.on_settle_due(now);
            }
            WaitEvent::Event(DomainEvent::IdleStep) => {
                self.on_idle_step();
            }
            WaitEvent::Event(DomainEvent::AnimationTick) => {
                self.on_animation_tick(now);
            }
            WaitEvent::Event(DomainEvent::Wake) => {}
            WaitEvent::Closed => return Ok(LoopControl::Break),
        }
        Ok(LoopControl::Continue)
    }
}

async fn wait_next_event(
    loop_event_rx: &mut UnboundedReceiver<DomainEvent>,
    timers: Timers<'_>,
) -> WaitEvent {
    let Timers {
        loading_tick,
        idle_tick,
        animation_tick,
        loading_active,
        settle_deadline,
        wake_timeout,
    } = timers;
    let settle_at = settle_deadline
        .map(time::Instant::from_std)
        .unwrap_or_else(|| time::Instant::now() + wake_timeout);

    tokio::select! {
        biased;
        maybe_loop = loop_event_rx.recv() => {
            match maybe_loop {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = time::sleep_until(settle_at), if settle_deadline.is_some() => {
            WaitEvent::Event(DomainEvent::SettleDue)
        },
        _ = loading_tick.tick(), if loading_active => {
            WaitEvent::Event(DomainEvent::LoadingTick)
        },
        _ = animation_tick.tick() => {
            WaitEvent::Event(DomainEvent::AnimationTick)
        },
        _ = idle_tick.tick() => {
            WaitEvent::Event(DomainEvent::IdleStep)
        },
        _ = time::sleep(wake_timeout) => {
            WaitEvent::Event(DomainEvent::Wake)
        }
    }
}
