use serde::Deserialize;

/// Frame style a photo is drawn with. Purely a renderer hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoVariant {
    #[default]
    Polaroid,
    Vintage,
    Filmstrip,
    Taped,
    Frameless,
}

impl PhotoVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polaroid => "polaroid",
            Self::Vintage => "vintage",
            Self::Filmstrip => "filmstrip",
            Self::Taped => "taped",
            Self::Frameless => "frameless",
        }
    }
}

/// A photo placed on a page.
///
/// `src` and `link` are opaque: they are handed to the renderer and to whoever opens links,
/// never resolved here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub variant: PhotoVariant,
    /// Tilt in degrees.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickerKind {
    Mushroom,
    Star,
    Coin,
    Flower,
    Block,
    Pipe,
}

impl StickerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mushroom => "mushroom",
            Self::Star => "star",
            Self::Coin => "coin",
            Self::Flower => "flower",
            Self::Block => "block",
            Self::Pipe => "pipe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sticker {
    pub kind: StickerKind,
    /// Placement hint, e.g. "top-4 right-4".
    pub position: String,
    /// Size hint, e.g. "w-8 h-8".
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageBox {
    pub label: String,
    pub text: String,
}

/// One open double page of the book.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageSpread {
    pub left_title: String,
    pub right_title: String,
    #[serde(default)]
    pub left_photo: Option<Photo>,
    #[serde(default)]
    pub left_photos: Vec<Photo>,
    #[serde(default)]
    pub left_text: Vec<String>,
    #[serde(default)]
    pub left_list: Vec<String>,
    #[serde(default)]
    pub right_photo: Option<Photo>,
    #[serde(default)]
    pub right_photos: Vec<Photo>,
    #[serde(default)]
    pub right_text: Vec<String>,
    #[serde(default)]
    pub right_text_sections: Vec<TextSection>,
    #[serde(default)]
    pub message_box: Option<MessageBox>,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
    #[serde(default)]
    pub center_photo: Option<Photo>,
}

impl PageSpread {
    pub fn left_photos_all(&self) -> impl Iterator<Item = &Photo> {
        self.left_photo.iter().chain(self.left_photos.iter())
    }

    pub fn right_photos_all(&self) -> impl Iterator<Item = &Photo> {
        self.right_photo.iter().chain(self.right_photos.iter())
    }

    /// Every photo on the spread in reading order: left page, right page, then the centered one.
    pub fn photos(&self) -> Vec<&Photo> {
        self.left_photos_all()
            .chain(self.right_photos_all())
            .chain(self.center_photo.iter())
            .collect()
    }

    /// True when neither page has anything but its title.
    pub fn is_title_only(&self) -> bool {
        self.photos().is_empty()
            && self.left_text.iter().all(|line| line.trim().is_empty())
            && self.right_text.iter().all(|line| line.trim().is_empty())
            && self.left_list.is_empty()
            && self.right_text_sections.is_empty()
            && self.message_box.is_none()
    }
}
