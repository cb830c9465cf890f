mod input_flow;

use std::time::Instant;

use crate::app::App;
use crate::config::Config;
use crate::content::ContentLibrary;
use crate::widgets::SplitMix;

pub(super) fn test_app(config: Config) -> App {
    let library = ContentLibrary::builtin().expect("builtin content");
    App::new_with_rng(config, library, SplitMix::new(7)).expect("app init")
}

/// An app already inside the book, on the cover.
pub(super) fn book_app(now: Instant) -> App {
    let mut app = test_app(Config::default());
    app.skip_loading(now);
    app
}
