mod ambient;
mod book;
mod chrome;
mod hits;
mod layout;
mod loading;
mod overlay;
mod text;

pub use ambient::{draw_coins, draw_walker};
pub use book::draw_book;
pub use chrome::draw_chrome;
pub use hits::{HitMap, HitTarget};
pub use layout::{BookLayout, UiLayout, book_layout, split_layout};
pub use loading::draw_loading_screen;
pub use overlay::draw_lightbox_overlay;
