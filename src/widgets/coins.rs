use std::time::{Duration, Instant};

use super::flash::Flash;
use super::rng::SplitMix;

pub const DEFAULT_COIN_COUNT: usize = 5;
const SCORE_POP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingCoin {
    pub id: usize,
    /// Horizontal placement, percent of the surface width.
    pub x: f32,
    /// Vertical placement, percent of the surface height.
    pub y: f32,
    pub collected: bool,
}

/// Coins scattered over the book that can each be picked up once.
#[derive(Debug, Clone)]
pub struct CoinField {
    coins: Vec<FloatingCoin>,
    total_collected: u32,
    score_pop: Flash,
    last_pop_at: Option<(f32, f32)>,
}

impl CoinField {
    pub fn scatter(count: usize, rng: &mut SplitMix) -> Self {
        let coins = (0..count)
            .map(|id| FloatingCoin {
                id,
                x: rng.range_f32(10.0, 90.0),
                y: rng.range_f32(15.0, 75.0),
                collected: false,
            })
            .collect();
        Self {
            coins,
            total_collected: 0,
            score_pop: Flash::default(),
            last_pop_at: None,
        }
    }

    pub fn coins(&self) -> &[FloatingCoin] {
        &self.coins
    }

    pub fn total_collected(&self) -> u32 {
        self.total_collected
    }

    /// Pick up a coin. Returns the new total, or `None` when the coin is gone or unknown.
    pub fn collect(&mut self, id: usize, now: Instant) -> Option<u32> {
        let coin = self.coins.iter_mut().find(|coin| coin.id == id)?;
        if coin.collected {
            return None;
        }
        coin.collected = true;
        self.total_collected += 1;
        self.last_pop_at = Some((coin.x, coin.y));
        self.score_pop.trigger(now, SCORE_POP);
        Some(self.total_collected)
    }

    /// Where the "+100" pop is drawn, while it is visible.
    pub fn score_pop(&self, now: Instant) -> Option<(f32, f32)> {
        if self.score_pop.is_active(now) {
            self.last_pop_at
        } else {
            None
        }
    }

    pub fn expire(&mut self, now: Instant) -> bool {
        self.score_pop.expire(now)
    }
}
