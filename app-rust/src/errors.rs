use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Article service error: {0}")]
    Api(#[from] weid_sdk::ArticleApiError),
    /// The selected file could not be read into a data URL.
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No file selected")]
    MissingFile,
}

pub type AppResult<T> = Result<T, AppError>;
