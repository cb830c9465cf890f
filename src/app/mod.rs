mod actors;
mod core;
mod event_bus;
mod event_loop;
mod input_ops;
mod state;
pub(crate) mod terminal_session;
mod timer_ops;
mod view_ops;

#[cfg(test)]
mod tests;

pub use core::App;
pub use state::{AppState, Mode, Phase, StatusState};
