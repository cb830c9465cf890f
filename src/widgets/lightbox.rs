use crate::content::Photo;

/// Full-screen viewer over the photos of one spread.
#[derive(Debug, Clone, Default)]
pub struct PhotoLightbox {
    photos: Vec<Photo>,
    current: usize,
    open: bool,
}

impl PhotoLightbox {
    /// Open on `photos[start]`. Nothing happens for an empty list; `start` is clamped.
    pub fn open(&mut self, photos: Vec<Photo>, start: usize) -> bool {
        if photos.is_empty() {
            return false;
        }
        self.current = start.min(photos.len() - 1);
        self.photos = photos;
        self.open = true;
        true
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.photos.clear();
        self.current = 0;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Photo> {
        if !self.open {
            return None;
        }
        self.photos.get(self.current)
    }

    /// Link of the photo on screen, handed out untouched.
    pub fn current_link(&self) -> Option<&str> {
        self.current().and_then(|photo| photo.link.as_deref())
    }

    pub fn next(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.current = if self.current + 1 < self.photos.len() {
            self.current + 1
        } else {
            0
        };
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            self.photos.len() - 1
        };
        true
    }

    pub fn goto(&mut self, index: usize) -> bool {
        if !self.open || index >= self.photos.len() {
            return false;
        }
        self.current = index;
        true
    }
}
