use ratatui::layout::{Position, Rect};

/// Something clickable the last frame put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    EnterBook,
    OpenBook,
    CloseBook,
    PrevArrow,
    NextArrow,
    IndicatorDot(usize),
    Photo(usize),
    Sticker { spread: usize, sticker: usize },
    Coin(usize),
    Walker,
    LightboxPrev,
    LightboxNext,
    LightboxClose,
}

/// Clickable regions of the last drawn frame. Later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.regions.push((area, target));
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map(|(_, target)| *target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
