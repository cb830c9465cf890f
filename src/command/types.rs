#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EnterBook,
    NextPage,
    PrevPage,
    Cover,
    /// Indicator activation: jump to any signed index in `[-1, N]`.
    JumpTo {
        index: isize,
    },
    OpenLightbox {
        photo: usize,
    },
    LightboxNext,
    LightboxPrev,
    CloseLightbox,
    CollectCoin {
        id: usize,
    },
    PokeWalker,
    BumpSticker {
        spread: usize,
        sticker: usize,
    },
    DebugStatusToggle,
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    EnterBook,
    NextPage,
    PrevPage,
    Cover,
    JumpTo,
    OpenLightbox,
    LightboxNext,
    LightboxPrev,
    CloseLightbox,
    CollectCoin,
    PokeWalker,
    BumpSticker,
    DebugStatusToggle,
    Cancel,
    Quit,
    Input,
    Loading,
    PageTurn,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnterBook => "enter-book",
            Self::NextPage => "next-page",
            Self::PrevPage => "prev-page",
            Self::Cover => "cover",
            Self::JumpTo => "jump-to",
            Self::OpenLightbox => "open-lightbox",
            Self::LightboxNext => "lightbox-next",
            Self::LightboxPrev => "lightbox-prev",
            Self::CloseLightbox => "close-lightbox",
            Self::CollectCoin => "collect-coin",
            Self::PokeWalker => "poke-walker",
            Self::BumpSticker => "bump-sticker",
            Self::DebugStatusToggle => "debug-status-toggle",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::Loading => "loading",
            Self::PageTurn => "page-turn",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::EnterBook => ActionId::EnterBook,
            Self::NextPage => ActionId::NextPage,
            Self::PrevPage => ActionId::PrevPage,
            Self::Cover => ActionId::Cover,
            Self::JumpTo { .. } => ActionId::JumpTo,
            Self::OpenLightbox { .. } => ActionId::OpenLightbox,
            Self::LightboxNext => ActionId::LightboxNext,
            Self::LightboxPrev => ActionId::LightboxPrev,
            Self::CloseLightbox => ActionId::CloseLightbox,
            Self::CollectCoin { .. } => ActionId::CollectCoin,
            Self::PokeWalker => ActionId::PokeWalker,
            Self::BumpSticker { .. } => ActionId::BumpSticker,
            Self::DebugStatusToggle => ActionId::DebugStatusToggle,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }

    /// Commands that move the book and therefore go through the turn guard.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextPage | Self::PrevPage | Self::Cover | Self::JumpTo { .. }
        )
    }
}
