use crate::ArticleApiResult;
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Span covering one call to the article service.
pub struct ApiSpan {
    span: Span,
    start_time: Instant,
    ended: bool,
}

impl ApiSpan {
    pub fn new(service: &str, operation: &'static str, method: &str, path: &str) -> Self {
        let span = match operation {
            "search" => info_span!("weid_sdk.search"),
            "add" => info_span!("weid_sdk.add"),
            _ => info_span!("weid_sdk.delete"),
        };
        span.set_attribute("weid.service.name", service.to_string());
        span.set_attribute("weid.operation", operation);
        span.set_attribute("http.request.method", method.to_string());
        span.set_attribute("url.path", path.to_string());

        Self {
            span,
            start_time: Instant::now(),
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn set_attribute(&self, key: &'static str, value: impl Into<opentelemetry::Value>) {
        self.span.set_attribute(key, value);
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.span
            .set_attribute("weid.duration_seconds", self.start_time.elapsed().as_secs_f64());
    }
}

impl Drop for ApiSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

/// Await `future` inside an [`ApiSpan`], recording the outcome on the span.
/// `on_ok` may add attributes derived from a successful result.
pub async fn trace_call<T, Fut>(
    mut span: ApiSpan,
    future: Fut,
    on_ok: impl FnOnce(&ApiSpan, &T),
) -> ArticleApiResult<T>
where
    Fut: std::future::Future<Output = ArticleApiResult<T>>,
{
    let result = span.instrument_future(future).await;

    match &result {
        Ok(value) => on_ok(&span, value),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
