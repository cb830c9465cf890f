use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Mode, Phase};
use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, phase: Phase, mode: Mode) -> Option<Command> {
    map_key_to_command_with_preset(key, phase, mode, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    phase: Phase,
    mode: Mode,
    preset: KeymapPreset,
) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match (phase, mode) {
        (Phase::Loading, _) => map_loading_key(key),
        (Phase::Book, Mode::Lightbox) => map_lightbox_key(key, preset),
        (Phase::Book, Mode::Normal) => match preset {
            KeymapPreset::Default => map_book_key_default(key),
            KeymapPreset::Vim => map_book_key_vim(key),
        },
    }
}

fn map_loading_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::EnterBook),
        KeyCode::Char('d') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_book_key_default(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Command::NextPage),
        KeyCode::Left => Some(Command::PrevPage),
        KeyCode::Home => Some(Command::Cover),
        KeyCode::Char(digit @ '1'..='9') => Some(Command::JumpTo {
            index: digit as isize - '1' as isize,
        }),
        KeyCode::Char('p') => Some(Command::OpenLightbox { photo: 0 }),
        KeyCode::Char('m') => Some(Command::PokeWalker),
        KeyCode::Char('d') => Some(Command::DebugStatusToggle),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_book_key_vim(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('l') => Some(Command::NextPage),
        KeyCode::Char('h') => Some(Command::PrevPage),
        KeyCode::Char('g') => Some(Command::Cover),
        _ => map_book_key_default(key),
    }
}

fn map_lightbox_key(key: KeyEvent, preset: KeymapPreset) -> Option<Command> {
    match (key.code, preset) {
        (KeyCode::Char('l'), KeymapPreset::Vim) => Some(Command::LightboxNext),
        (KeyCode::Char('h'), KeymapPreset::Vim) => Some(Command::LightboxPrev),
        (KeyCode::Right | KeyCode::Char(' '), _) => Some(Command::LightboxNext),
        (KeyCode::Left, _) => Some(Command::LightboxPrev),
        (KeyCode::Esc | KeyCode::Char('p'), _) => Some(Command::CloseLightbox),
        (KeyCode::Char('q'), _) => Some(Command::Quit),
        _ => None,
    }
}
