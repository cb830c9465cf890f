pub const PROGRESS_MAX: u8 = 100;
const MILESTONE_STEP: u8 = 10;
const RUNNER_TRACK_PERCENT: u32 = 85;
const QUESTION_BLOCKS: usize = 3;
const POWER_STAR_THRESHOLDS: [u8; 3] = [25, 50, 75];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTick {
    pub progress: u8,
    /// Set when this tick landed on 10, 20, ..., 90.
    pub milestone: Option<u8>,
    /// Set on the single tick that reached 100.
    pub completed: bool,
}

/// Fake loading bar: one unit per tick from 0 to 100, then done for good.
#[derive(Debug, Clone, Default)]
pub struct LoadingSequencer {
    progress: u8,
    coins_collected: u32,
    complete_signalled: bool,
    entered: bool,
}

impl LoadingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    pub fn coins_collected(&self) -> u32 {
        self.coins_collected
    }

    pub fn tick(&mut self) -> LoadingTick {
        if self.is_complete() {
            return LoadingTick {
                progress: self.progress,
                milestone: None,
                completed: false,
            };
        }

        self.progress += 1;
        let milestone = (self.progress % MILESTONE_STEP == 0 && self.progress < PROGRESS_MAX)
            .then_some(self.progress);
        if milestone.is_some() {
            self.coins_collected += 1;
        }
        LoadingTick {
            progress: self.progress,
            milestone,
            completed: self.is_complete(),
        }
    }

    /// Load-complete latch. True on the first poll after reaching 100, false forever after.
    pub fn take_load_complete(&mut self) -> bool {
        if !self.is_complete() || self.complete_signalled {
            return false;
        }
        self.complete_signalled = true;
        true
    }

    /// Leave the loading screen. Only possible once, and only after loading finished.
    pub fn enter(&mut self) -> bool {
        if !self.is_complete() || self.entered {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Runner offset along the track, as a percentage of its width.
    pub fn runner_percent(&self) -> u8 {
        (u32::from(self.progress) * RUNNER_TRACK_PERCENT / u32::from(PROGRESS_MAX)) as u8
    }

    pub fn question_blocks_hit(&self) -> [bool; QUESTION_BLOCKS] {
        let mut hit = [false; QUESTION_BLOCKS];
        for (i, slot) in hit.iter_mut().enumerate() {
            *slot = usize::from(self.progress) > (i + 1) * 30;
        }
        hit
    }

    pub fn power_stars_visible(&self) -> usize {
        POWER_STAR_THRESHOLDS
            .iter()
            .filter(|threshold| self.progress > **threshold)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::LoadingSequencer;

    #[test]
    fn milestones_fire_once_at_each_tenth_except_ends() {
        let mut loading = LoadingSequencer::new();
        let mut milestones = Vec::new();
        for _ in 0..150 {
            if let Some(at) = loading.tick().milestone {
                milestones.push(at);
            }
        }
        assert_eq!(milestones, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(loading.coins_collected(), 9);
        assert_eq!(loading.progress(), 100);
    }

    #[test]
    fn completion_is_reported_on_exactly_one_tick() {
        let mut loading = LoadingSequencer::new();
        let completed: Vec<u8> = (0..120)
            .map(|_| loading.tick())
            .filter(|tick| tick.completed)
            .map(|tick| tick.progress)
            .collect();
        assert_eq!(completed, vec![100]);
    }

    #[test]
    fn progress_never_decreases() {
        let mut loading = LoadingSequencer::new();
        let mut last = loading.progress();
        for _ in 0..110 {
            let tick = loading.tick();
            assert!(tick.progress >= last);
            assert!(tick.progress <= 100);
            last = tick.progress;
        }
    }

    #[test]
    fn load_complete_latch_survives_repeated_polls() {
        let mut loading = LoadingSequencer::new();
        let mut fired = 0;
        for _ in 0..100 {
            loading.tick();
            // Polled several times per tick, like a redraw would.
            for _ in 0..3 {
                if loading.take_load_complete() {
                    fired += 1;
                }
            }
        }
        for _ in 0..10 {
            loading.tick();
            if loading.take_load_complete() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn enter_requires_completion_and_happens_once() {
        let mut loading = LoadingSequencer::new();
        assert!(!loading.enter());
        for _ in 0..100 {
            loading.tick();
        }
        assert!(loading.enter());
        assert!(loading.has_entered());
        assert!(!loading.enter());
    }

    #[test]
    fn decorations_follow_progress() {
        let mut loading = LoadingSequencer::new();
        assert_eq!(loading.runner_percent(), 0);
        assert_eq!(loading.question_blocks_hit(), [false, false, false]);
        assert_eq!(loading.power_stars_visible(), 0);

        for _ in 0..61 {
            loading.tick();
        }
        assert_eq!(loading.runner_percent(), 51);
        assert_eq!(loading.question_blocks_hit(), [true, true, false]);
        assert_eq!(loading.power_stars_visible(), 2);

        for _ in 0..39 {
            loading.tick();
        }
        assert_eq!(loading.runner_percent(), 85);
        assert_eq!(loading.question_blocks_hit(), [true, true, true]);
        assert_eq!(loading.power_stars_visible(), 3);
    }
}
