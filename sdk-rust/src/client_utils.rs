use crate::ArticleApiError;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Send a request and fail on a non-success status code.
pub async fn send(request: RequestBuilder) -> Result<Response, ArticleApiError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ArticleApiError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}

/// Send a request and parse the JSON response.
/// Throws error on non OK status code.
pub async fn send_json<R: DeserializeOwned>(request: RequestBuilder) -> Result<R, ArticleApiError> {
    let response = send(request).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ArticleApiError::Invariant(format!("Failed to parse response body: {e}")))
}

/// Send a request whose body is opaque and only signals completion.
/// The body is read to the end so the connection can be reused.
pub async fn send_ack(request: RequestBuilder) -> Result<(), ArticleApiError> {
    let response = send(request).await?;
    response.bytes().await?;
    Ok(())
}
