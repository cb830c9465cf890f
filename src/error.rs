use std::path::{Path, PathBuf};

pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("content unavailable ({}): {reason}", path.display())]
    ContentUnavailable { path: PathBuf, reason: String },
    #[error("content has no page spreads; the cover and back cover would coincide")]
    EmptyContent,
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn content_unavailable(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }
}
