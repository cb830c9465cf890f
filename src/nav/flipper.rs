use crate::error::{AppError, AppResult};

use super::state::{FlipDirection, NavigationState, Position};

/// A page turn from one index to another. Returned when a turn starts and again when it
/// settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: isize,
    pub to: isize,
    pub direction: FlipDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Another turn is still settling.
    Busy,
    AtBackCover,
    AtCover,
    SameIndex,
    OutOfRange,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Busy => "page is still turning",
            Self::AtBackCover => "already at the back cover",
            Self::AtCover => "already at the cover",
            Self::SameIndex => "already on that page",
            Self::OutOfRange => "no such page",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Started(Transition),
    Ignored(IgnoreReason),
}

impl NavOutcome {
    pub fn started(self) -> Option<Transition> {
        match self {
            Self::Started(transition) => Some(transition),
            Self::Ignored(_) => None,
        }
    }
}

/// Cover → spreads → back cover, one turn at a time.
///
/// Every request is refused while a turn is in flight. An accepted request only marks the
/// turn as pending; the index moves when [`PageFlipper::settle`] runs after the settle delay.
#[derive(Debug, Clone)]
pub struct PageFlipper {
    state: NavigationState,
    spread_count: usize,
    pending_target: Option<isize>,
}

impl PageFlipper {
    pub fn new(spread_count: usize) -> AppResult<Self> {
        if spread_count == 0 {
            return Err(AppError::EmptyContent);
        }
        Ok(Self {
            state: NavigationState::default(),
            spread_count,
            pending_target: None,
        })
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn spread_count(&self) -> usize {
        self.spread_count
    }

    pub fn current_index(&self) -> isize {
        self.state.current_index
    }

    pub fn position(&self) -> Position {
        Position::from_index(self.state.current_index, self.spread_count)
            .unwrap_or(Position::Cover)
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn pending(&self) -> Option<Transition> {
        self.pending_target.map(|to| Transition {
            from: self.state.current_index,
            to,
            direction: self.state.direction,
        })
    }

    pub fn next(&mut self) -> NavOutcome {
        if self.state.is_transitioning {
            return NavOutcome::Ignored(IgnoreReason::Busy);
        }
        if self.state.current_index >= self.back_cover_index() {
            return NavOutcome::Ignored(IgnoreReason::AtBackCover);
        }
        self.begin(self.state.current_index + 1, FlipDirection::Forward)
    }

    pub fn prev(&mut self) -> NavOutcome {
        if self.state.is_transitioning {
            return NavOutcome::Ignored(IgnoreReason::Busy);
        }
        if self.state.current_index <= -1 {
            return NavOutcome::Ignored(IgnoreReason::AtCover);
        }
        self.begin(self.state.current_index - 1, FlipDirection::Backward)
    }

    pub fn jump_to_cover(&mut self) -> NavOutcome {
        if self.state.is_transitioning {
            return NavOutcome::Ignored(IgnoreReason::Busy);
        }
        if self.state.current_index == -1 {
            return NavOutcome::Ignored(IgnoreReason::AtCover);
        }
        self.begin(-1, FlipDirection::Backward)
    }

    /// Jump straight to any index in `[-1, N]`, skipping whatever lies between.
    pub fn jump_to(&mut self, index: isize) -> NavOutcome {
        if self.state.is_transitioning {
            return NavOutcome::Ignored(IgnoreReason::Busy);
        }
        if !(-1..=self.back_cover_index()).contains(&index) {
            return NavOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        if index == self.state.current_index {
            return NavOutcome::Ignored(IgnoreReason::SameIndex);
        }
        let direction = FlipDirection::between(self.state.current_index, index);
        self.begin(index, direction)
    }

    /// Commit the pending turn. Returns `None` when nothing is in flight.
    pub fn settle(&mut self) -> Option<Transition> {
        let to = self.pending_target.take()?;
        let from = self.state.current_index;
        self.state.current_index = to;
        self.state.is_transitioning = false;
        tracing::debug!(from, to, direction = self.state.direction.as_str(), "page turn settled");
        Some(Transition {
            from,
            to,
            direction: self.state.direction,
        })
    }

    fn begin(&mut self, to: isize, direction: FlipDirection) -> NavOutcome {
        self.state.direction = direction;
        self.state.is_transitioning = true;
        self.pending_target = Some(to);
        let from = self.state.current_index;
        tracing::debug!(from, to, direction = direction.as_str(), "page turn started");
        NavOutcome::Started(Transition {
            from,
            to,
            direction,
        })
    }

    fn back_cover_index(&self) -> isize {
        self.spread_count as isize
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::nav::{FlipDirection, Position};

    use super::{IgnoreReason, NavOutcome, PageFlipper};

    fn flipper(n: usize) -> PageFlipper {
        PageFlipper::new(n).expect("non-empty book")
    }

    #[test]
    fn empty_book_is_rejected() {
        assert!(matches!(PageFlipper::new(0), Err(AppError::EmptyContent)));
    }

    #[test]
    fn starts_closed_on_the_cover() {
        let book = flipper(5);
        assert_eq!(book.current_index(), -1);
        assert_eq!(book.position(), Position::Cover);
        assert!(!book.is_transitioning());
        assert_eq!(book.pending(), None);
    }

    #[test]
    fn walking_forward_reaches_back_cover_then_stops() {
        let mut book = flipper(5);
        let mut seen = vec![book.current_index()];
        for _ in 0..6 {
            assert!(matches!(book.next(), NavOutcome::Started(_)));
            book.settle().expect("pending turn");
            seen.push(book.current_index());
        }
        assert_eq!(seen, vec![-1, 0, 1, 2, 3, 4, 5]);
        assert_eq!(book.position(), Position::BackCover);

        assert_eq!(book.next(), NavOutcome::Ignored(IgnoreReason::AtBackCover));
        assert!(!book.is_transitioning());
        assert_eq!(book.current_index(), 5);
    }

    #[test]
    fn requests_while_turning_are_ignored() {
        let mut book = flipper(5);
        assert!(book.next().started().is_some());
        for _ in 0..4 {
            assert_eq!(book.next(), NavOutcome::Ignored(IgnoreReason::Busy));
        }
        assert_eq!(book.prev(), NavOutcome::Ignored(IgnoreReason::Busy));
        assert_eq!(book.jump_to_cover(), NavOutcome::Ignored(IgnoreReason::Busy));
        assert_eq!(book.jump_to(3), NavOutcome::Ignored(IgnoreReason::Busy));
        assert_eq!(book.current_index(), -1);

        let turn = book.settle().expect("first request still pending");
        assert_eq!((turn.from, turn.to), (-1, 0));
        assert_eq!(book.settle(), None);
        assert_eq!(book.current_index(), 0);
    }

    #[test]
    fn prev_on_cover_is_a_noop() {
        let mut book = flipper(3);
        assert_eq!(book.prev(), NavOutcome::Ignored(IgnoreReason::AtCover));
        assert_eq!(book.jump_to_cover(), NavOutcome::Ignored(IgnoreReason::AtCover));
        assert!(!book.is_transitioning());
    }

    #[test]
    fn prev_from_first_spread_closes_the_book() {
        let mut book = flipper(3);
        book.next();
        book.settle();
        let turn = book.prev().started().expect("prev accepted");
        assert_eq!(turn.direction, FlipDirection::Backward);
        book.settle();
        assert_eq!(book.position(), Position::Cover);
    }

    #[test]
    fn jump_to_cover_skips_intermediate_spreads() {
        let mut book = flipper(5);
        book.jump_to(3);
        book.settle();
        assert_eq!(book.current_index(), 3);

        let turn = book.jump_to_cover().started().expect("jump accepted");
        assert_eq!(turn.direction, FlipDirection::Backward);
        assert_eq!(book.state().direction, FlipDirection::Backward);
        assert_eq!(book.current_index(), 3);

        let settled = book.settle().expect("pending jump");
        assert_eq!((settled.from, settled.to), (3, -1));
        assert_eq!(book.current_index(), -1);
    }

    #[test]
    fn jump_to_records_direction_from_previous_index() {
        let n = 5;
        for start in -1..=n as isize {
            for target in -1..=n as isize {
                let mut book = flipper(n);
                if start != -1 {
                    book.jump_to(start);
                    book.settle();
                }
                let outcome = book.jump_to(target);
                if target == start {
                    assert_eq!(outcome, NavOutcome::Ignored(IgnoreReason::SameIndex));
                    continue;
                }
                let turn = outcome.started().expect("jump accepted");
                let expected = if target > start {
                    FlipDirection::Forward
                } else {
                    FlipDirection::Backward
                };
                assert_eq!(turn.direction, expected);
                book.settle();
                assert_eq!(book.current_index(), target);
            }
        }
    }

    #[test]
    fn jump_outside_the_book_is_ignored() {
        let mut book = flipper(2);
        assert_eq!(book.jump_to(-2), NavOutcome::Ignored(IgnoreReason::OutOfRange));
        assert_eq!(book.jump_to(3), NavOutcome::Ignored(IgnoreReason::OutOfRange));
        assert!(!book.is_transitioning());
    }
}
