use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

use super::model::PageSpread;

const BUILTIN_PAGES: &str = include_str!("pages.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoverText {
    pub title: String,
    pub subtitle: String,
    pub year: String,
    pub tagline: String,
}

impl Default for CoverText {
    fn default() -> Self {
        Self {
            title: "Scrapbook".to_string(),
            subtitle: "memories".to_string(),
            year: String::new(),
            tagline: "Press start".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BackCoverText {
    pub title: String,
    pub closing_lines: Vec<String>,
    pub credits: Vec<String>,
}

impl Default for BackCoverText {
    fn default() -> Self {
        Self {
            title: "The End".to_string(),
            closing_lines: Vec::new(),
            credits: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentDocument {
    #[serde(default)]
    cover: CoverText,
    #[serde(default)]
    back_cover: BackCoverText,
    #[serde(default)]
    spreads: Vec<PageSpread>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// The ordered, read-only list of spreads plus the cover texts.
///
/// Built once at startup; `N = spread_count()` is fixed from then on.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    cover: CoverText,
    back_cover: BackCoverText,
    spreads: Arc<[PageSpread]>,
}

impl ContentLibrary {
    pub fn builtin() -> AppResult<Self> {
        let document = toml::from_str::<ContentDocument>(BUILTIN_PAGES).map_err(|source| {
            AppError::content_unavailable("<builtin>", format!("failed to parse: {source}"))
        })?;
        Self::from_document(document)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let Some(format) = DocumentFormat::from_path(path) else {
            return Err(AppError::content_unavailable(
                path,
                "expected a .toml or .json document",
            ));
        };
        let raw = fs::read_to_string(path)
            .map_err(|source| AppError::content_unavailable(path, source.to_string()))?;
        let document = match format {
            DocumentFormat::Toml => toml::from_str::<ContentDocument>(&raw)
                .map_err(|source| AppError::content_unavailable(path, source.to_string()))?,
            DocumentFormat::Json => serde_json::from_str::<ContentDocument>(&raw)
                .map_err(|source| AppError::content_unavailable(path, source.to_string()))?,
        };
        Self::from_document(document)
    }

    pub fn from_spreads(spreads: Vec<PageSpread>) -> AppResult<Self> {
        Self::from_document(ContentDocument {
            cover: CoverText::default(),
            back_cover: BackCoverText::default(),
            spreads,
        })
    }

    fn from_document(document: ContentDocument) -> AppResult<Self> {
        if document.spreads.is_empty() {
            return Err(AppError::EmptyContent);
        }
        tracing::debug!(spreads = document.spreads.len(), "content library loaded");
        Ok(Self {
            cover: document.cover,
            back_cover: document.back_cover,
            spreads: document.spreads.into(),
        })
    }

    pub fn spread_count(&self) -> usize {
        self.spreads.len()
    }

    pub fn spreads(&self) -> &[PageSpread] {
        &self.spreads
    }

    pub fn spread(&self, index: usize) -> Option<&PageSpread> {
        self.spreads.get(index)
    }

    pub fn cover(&self) -> &CoverText {
        &self.cover
    }

    pub fn back_cover(&self) -> &BackCoverText {
        &self.back_cover
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::content::{PhotoVariant, StickerKind};
    use crate::error::AppError;

    use super::ContentLibrary;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("scrapbook_content_{}_{}_{suffix}", process::id(), nanos));
        path
    }

    #[test]
    fn builtin_library_has_five_spreads() {
        let library = ContentLibrary::builtin().expect("builtin content should parse");
        assert_eq!(library.spread_count(), 5);

        let first = library.spread(0).expect("first spread");
        let profile = first.left_photo.as_ref().expect("profile photo");
        assert_eq!(profile.variant, PhotoVariant::Polaroid);
        assert_eq!(profile.rotation, -3.0);
        assert_eq!(first.right_text_sections.len(), 2);
        assert_eq!(first.stickers[0].kind, StickerKind::Mushroom);

        let linked = library
            .spread(2)
            .expect("third spread")
            .left_photos
            .iter()
            .filter(|photo| photo.link.is_some())
            .count();
        assert_eq!(linked, 2);

        let last = library.spread(4).expect("last spread");
        assert!(last.is_title_only());
    }

    #[test]
    fn load_from_path_reads_toml_and_json() {
        let toml_path = unique_temp_path("pages.toml");
        fs::write(
            &toml_path,
            r#"
            [cover]
            title = "Trip"

            [[spreads]]
            left_title = "a"
            right_title = "b"
            right_text = ["hello"]
            "#,
        )
        .expect("toml content should be written");
        let library = ContentLibrary::load_from_path(&toml_path).expect("toml should load");
        assert_eq!(library.spread_count(), 1);
        assert_eq!(library.cover().title, "Trip");
        assert_eq!(library.back_cover().title, "The End");
        fs::remove_file(&toml_path).expect("toml content should be removed");

        let json_path = unique_temp_path("pages.json");
        fs::write(
            &json_path,
            r#"{"spreads":[{"left_title":"a","right_title":"b"},{"left_title":"c","right_title":"d","left_photos":[{"src":"x.jpg","alt":"x","variant":"taped","link":"https://example.com"}]}]}"#,
        )
        .expect("json content should be written");
        let library = ContentLibrary::load_from_path(&json_path).expect("json should load");
        assert_eq!(library.spread_count(), 2);
        let photo = &library.spread(1).expect("second spread").left_photos[0];
        assert_eq!(photo.variant, PhotoVariant::Taped);
        assert_eq!(photo.link.as_deref(), Some("https://example.com"));
        fs::remove_file(&json_path).expect("json content should be removed");
    }

    #[test]
    fn empty_spread_list_is_a_startup_error() {
        assert!(matches!(
            ContentLibrary::from_spreads(Vec::new()),
            Err(AppError::EmptyContent)
        ));

        let path = unique_temp_path("empty.toml");
        fs::write(&path, "[cover]\ntitle = \"nothing\"\n").expect("content should be written");
        assert!(matches!(
            ContentLibrary::load_from_path(&path),
            Err(AppError::EmptyContent)
        ));
        fs::remove_file(&path).expect("content should be removed");
    }

    #[test]
    fn unreadable_or_malformed_documents_are_unavailable() {
        let missing = unique_temp_path("missing.toml");
        assert!(matches!(
            ContentLibrary::load_from_path(&missing),
            Err(AppError::ContentUnavailable { .. })
        ));

        let unsupported = unique_temp_path("pages.yaml");
        assert!(matches!(
            ContentLibrary::load_from_path(&unsupported),
            Err(AppError::ContentUnavailable { .. })
        ));

        let malformed = unique_temp_path("broken.toml");
        fs::write(&malformed, "[[spreads]]\nleft_title = 3\n").expect("content should be written");
        assert!(matches!(
            ContentLibrary::load_from_path(&malformed),
            Err(AppError::ContentUnavailable { .. })
        ));
        fs::remove_file(&malformed).expect("content should be removed");
    }
}
