use crate::command::ActionId;
use crate::content::{ContentLibrary, PageSpread};
use crate::error::AppResult;
use crate::loading::LoadingSequencer;
use crate::nav::{PageFlipper, Position};
use crate::widgets::{
    CoinField, DEFAULT_COIN_COUNT, Flash, IdleWalker, PhotoLightbox, SplitMix, StickerReactions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Book,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "LOADING",
            Self::Book => "BOOK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Lightbox,
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

impl StatusState {
    pub(crate) fn set(&mut self, id: ActionId, message: impl Into<String>) {
        self.last_action_id = Some(id);
        self.message = message.into();
    }
}

pub struct AppState {
    pub phase: Phase,
    pub mode: Mode,
    pub book: PageFlipper,
    pub loading: LoadingSequencer,
    /// "+100" pop on the loading screen after a milestone.
    pub milestone_pop: Flash,
    pub coins: CoinField,
    pub walker: IdleWalker,
    pub stickers: StickerReactions,
    pub lightbox: PhotoLightbox,
    pub rng: SplitMix,
    pub status: StatusState,
    pub debug_status_visible: bool,
    pub library: ContentLibrary,
}

impl AppState {
    pub fn new(library: ContentLibrary, mut rng: SplitMix) -> AppResult<Self> {
        let book = PageFlipper::new(library.spread_count())?;
        let coins = CoinField::scatter(DEFAULT_COIN_COUNT, &mut rng);
        Ok(Self {
            phase: Phase::Loading,
            mode: Mode::Normal,
            book,
            loading: LoadingSequencer::new(),
            milestone_pop: Flash::default(),
            coins,
            walker: IdleWalker::default(),
            stickers: StickerReactions::default(),
            lightbox: PhotoLightbox::default(),
            rng,
            status: StatusState::default(),
            debug_status_visible: false,
            library,
        })
    }

    pub fn spread_count(&self) -> usize {
        self.library.spread_count()
    }

    pub fn position(&self) -> Position {
        self.book.position()
    }

    pub fn current_spread(&self) -> Option<&PageSpread> {
        self.position()
            .spread()
            .and_then(|index| self.library.spread(index))
    }

    /// "cover", "3 / 5" or "back cover".
    pub fn position_label(&self) -> String {
        match self.position() {
            Position::Cover => "cover".to_string(),
            Position::Spread(index) => format!("{} / {}", index + 1, self.spread_count()),
            Position::BackCover => "back cover".to_string(),
        }
    }
}
