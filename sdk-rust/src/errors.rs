use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the article service failed or the parsing of the
    /// response failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the service was unexpected.
    #[error("Invariant: {0}")]
    Invariant(String),
}

pub type ArticleApiResult<T> = Result<T, ArticleApiError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("Missing \"data:\" scheme")]
    MissingScheme,
    /// Only base64 encoded payloads are produced and accepted.
    #[error("Data URL is not base64 encoded")]
    NotBase64,
    #[error("Invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}
