/// Where the book is open.
///
/// Maps onto a signed index: `Cover` is `-1`, `Spread(i)` is `i`, `BackCover` is `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Cover,
    Spread(usize),
    BackCover,
}

impl Position {
    pub fn index(self, spread_count: usize) -> isize {
        match self {
            Self::Cover => -1,
            Self::Spread(i) => i as isize,
            Self::BackCover => spread_count as isize,
        }
    }

    /// Inverse of [`Position::index`]. Anything outside `[-1, N]` has no position.
    pub fn from_index(index: isize, spread_count: usize) -> Option<Self> {
        let last = spread_count as isize;
        match index {
            -1 => Some(Self::Cover),
            i if i == last => Some(Self::BackCover),
            i if (0..last).contains(&i) => Some(Self::Spread(i as usize)),
            _ => None,
        }
    }

    pub fn spread(self) -> Option<usize> {
        match self {
            Self::Spread(i) => Some(i),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipDirection {
    #[default]
    Forward,
    Backward,
}

impl FlipDirection {
    pub fn between(from: isize, to: isize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: isize,
    pub is_transitioning: bool,
    pub direction: FlipDirection,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_index: -1,
            is_transitioning: false,
            direction: FlipDirection::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlipDirection, Position};

    #[test]
    fn position_index_roundtrips_at_boundaries() {
        let n = 5;
        for index in -1..=5 {
            let position = Position::from_index(index, n).expect("index within [-1, N]");
            assert_eq!(position.index(n), index);
        }
        assert_eq!(Position::from_index(-1, n), Some(Position::Cover));
        assert_eq!(Position::from_index(5, n), Some(Position::BackCover));
        assert_eq!(Position::from_index(-2, n), None);
        assert_eq!(Position::from_index(6, n), None);
    }

    #[test]
    fn direction_is_forward_only_for_larger_target() {
        assert_eq!(FlipDirection::between(-1, 0), FlipDirection::Forward);
        assert_eq!(FlipDirection::between(3, -1), FlipDirection::Backward);
    }
}
