mod library;
mod model;

pub use library::{BackCoverText, ContentLibrary, CoverText};
pub use model::{MessageBox, PageSpread, Photo, PhotoVariant, Sticker, StickerKind, TextSection};
