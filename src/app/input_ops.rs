use std::time::Instant;

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::command::{Command, CommandOutcome};
use crate::input::map_key_to_command_with_preset;
use crate::nav::DragGesture;
use crate::ui::HitTarget;

use super::core::App;
use super::state::{Mode, Phase};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event, now: Instant) -> InputEventOutcome {
        let command = match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                map_key_to_command_with_preset(key, self.state.phase, self.state.mode, self.keymap)
            }
            Event::Mouse(mouse) => self.command_for_mouse(mouse),
            Event::Resize(_, _) => {
                self.drag.cancel();
                self.ui.mark_redraw();
                None
            }
            Event::FocusLost => {
                self.drag.cancel();
                None
            }
            _ => None,
        };

        let Some(command) = command else {
            return InputEventOutcome::default();
        };
        let result = self.apply_command(command, now);
        InputEventOutcome {
            quit_requested: result.outcome == CommandOutcome::QuitRequested,
        }
    }

    fn command_for_mouse(&mut self, mouse: MouseEvent) -> Option<Command> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.hits.target_at(mouse.column, mouse.row) {
                    self.drag.cancel();
                    return Some(command_for_hit(target));
                }
                if self.state.phase == Phase::Book && self.state.mode == Mode::Normal {
                    self.drag
                        .press(i32::from(mouse.column), self.state.book.is_transitioning());
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.drag.release(i32::from(mouse.column))? {
                    DragGesture::TurnForward => Some(Command::NextPage),
                    DragGesture::TurnBackward => Some(Command::PrevPage),
                }
            }
            _ => None,
        }
    }
}

pub(crate) fn command_for_hit(target: HitTarget) -> Command {
    match target {
        HitTarget::EnterBook => Command::EnterBook,
        HitTarget::OpenBook | HitTarget::NextArrow => Command::NextPage,
        HitTarget::PrevArrow => Command::PrevPage,
        HitTarget::CloseBook => Command::Cover,
        HitTarget::IndicatorDot(index) => Command::JumpTo {
            index: isize::try_from(index).unwrap_or(isize::MAX),
        },
        HitTarget::Photo(photo) => Command::OpenLightbox { photo },
        HitTarget::Sticker { spread, sticker } => Command::BumpSticker { spread, sticker },
        HitTarget::Coin(id) => Command::CollectCoin { id },
        HitTarget::Walker => Command::PokeWalker,
        HitTarget::LightboxPrev => Command::LightboxPrev,
        HitTarget::LightboxNext => Command::LightboxNext,
        HitTarget::LightboxClose => Command::CloseLightbox,
    }
}

#[cfg(test)]
mod tests {
    use crate::command::Command;
    use crate::ui::HitTarget;

    use super::command_for_hit;

    #[test]
    fn hit_targets_map_to_their_commands() {
        assert_eq!(
            command_for_hit(HitTarget::IndicatorDot(3)),
            Command::JumpTo { index: 3 }
        );
        assert_eq!(command_for_hit(HitTarget::OpenBook), Command::NextPage);
        assert_eq!(command_for_hit(HitTarget::CloseBook), Command::Cover);
        assert_eq!(
            command_for_hit(HitTarget::Photo(2)),
            Command::OpenLightbox { photo: 2 }
        );
        assert_eq!(
            command_for_hit(HitTarget::Coin(4)),
            Command::CollectCoin { id: 4 }
        );
    }
}
