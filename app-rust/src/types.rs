use crate::AppError;
use std::{fmt, path::PathBuf};
use weid_sdk::{ArticleId, NewArticle};

/// Outcome of the latest request a component issued.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub(crate) fn failed(error: &AppError) -> Self {
        Self::Failed(error.to_string())
    }
}

/// Handle to a file chosen by the user. The content is only read on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Name shown to the user.
    pub name: String,
    pub path: PathBuf,
    /// Mime type reported by the host, if any.
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().to_string());
        Self {
            name,
            path,
            mime_type: None,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Generation counter value attached to a request.
/// Only the response carrying the latest token is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(u64);

impl Token {
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work the reducer asks the runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-arm the search debouncer with the latest input.
    Debounce(String),
    Search { token: Token, query: String },
    Delete { id: ArticleId },
    ReadFile { token: Token, file: SelectedFile },
    Add { token: Token, article: NewArticle },
    Navigate(String),
}
