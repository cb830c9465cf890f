use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::flash::Flash;

const BUMP: Duration = Duration::from_millis(300);

/// Stickers wiggle for a moment when poked. Keyed by `(spread, sticker)`.
#[derive(Debug, Clone, Default)]
pub struct StickerReactions {
    bumps: HashMap<(usize, usize), Flash>,
}

impl StickerReactions {
    pub fn bump(&mut self, spread: usize, sticker: usize, now: Instant) {
        self.bumps
            .entry((spread, sticker))
            .or_default()
            .trigger(now, BUMP);
    }

    pub fn is_bumped(&self, spread: usize, sticker: usize, now: Instant) -> bool {
        self.bumps
            .get(&(spread, sticker))
            .is_some_and(|flash| flash.is_active(now))
    }

    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.bumps.len();
        self.bumps.retain(|_, flash| !flash.expire(now));
        before != self.bumps.len()
    }
}
