use std::time::{Duration, Instant};

use super::flash::Flash;
use super::rng::SplitMix;

const MIN_X: f32 = 5.0;
const MAX_X: f32 = 85.0;
const STEP: f32 = 2.0;
const JUMP: Duration = Duration::from_millis(500);
const SPEECH: Duration = Duration::from_millis(2000);

pub const SPEECH_LINES: [&str; 6] = [
    "Let's-a go!",
    "Mama mia!",
    "Here we go!",
    "Yahoo!",
    "It's-a me!",
    "Wahoo!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
}

/// The little character pacing along the bottom of the screen.
#[derive(Debug, Clone)]
pub struct IdleWalker {
    x: f32,
    heading: Heading,
    jump: Flash,
    speech: Flash,
    speech_line: &'static str,
    pokes: u32,
}

impl Default for IdleWalker {
    fn default() -> Self {
        Self {
            x: 20.0,
            heading: Heading::Right,
            jump: Flash::default(),
            speech: Flash::default(),
            speech_line: SPEECH_LINES[0],
            pokes: 0,
        }
    }
}

impl IdleWalker {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pokes(&self) -> u32 {
        self.pokes
    }

    /// One idle step. Turns around at the edges of the track.
    pub fn step(&mut self) {
        let next = match self.heading {
            Heading::Right => self.x + STEP,
            Heading::Left => self.x - STEP,
        };
        if next > MAX_X {
            self.x = MAX_X;
            self.heading = Heading::Left;
        } else if next < MIN_X {
            self.x = MIN_X;
            self.heading = Heading::Right;
        } else {
            self.x = next;
        }
    }

    pub fn poke(&mut self, now: Instant, rng: &mut SplitMix) -> &'static str {
        self.pokes += 1;
        self.speech_line = SPEECH_LINES[rng.index(SPEECH_LINES.len())];
        self.jump.trigger(now, JUMP);
        self.speech.trigger(now, SPEECH);
        self.speech_line
    }

    pub fn is_jumping(&self, now: Instant) -> bool {
        self.jump.is_active(now)
    }

    pub fn speech(&self, now: Instant) -> Option<&'static str> {
        self.speech.is_active(now).then_some(self.speech_line)
    }

    pub fn expire(&mut self, now: Instant) -> bool {
        let jump = self.jump.expire(now);
        let speech = self.speech.expire(now);
        jump || speech
    }
}
