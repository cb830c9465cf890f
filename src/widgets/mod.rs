mod coins;
mod flash;
mod lightbox;
mod rng;
mod stickers;
mod walker;

pub use coins::{CoinField, DEFAULT_COIN_COUNT, FloatingCoin};
pub use flash::Flash;
pub use lightbox::PhotoLightbox;
pub use rng::SplitMix;
pub use stickers::StickerReactions;
pub use walker::{Heading, IdleWalker, SPEECH_LINES};
