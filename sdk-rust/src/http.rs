use crate::{
    client_utils,
    opentelemetry::{trace_call, ApiSpan},
    Article, ArticleApi, ArticleApiError, ArticleApiResult, ArticleId, NewArticle,
};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, Url,
};
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "http";

#[derive(Debug, Clone, Default)]
pub struct HttpArticleApiOptions {
    /// Origin of the article service, e.g. `http://localhost:8080`.
    /// Defaults to `http://localhost`.
    pub base_url: Option<String>,
    /// Headers sent with every request.
    pub headers: HeaderMap,
    /// Overall request timeout. No timeout when `None`.
    pub timeout: Option<Duration>,
}

/// [`ArticleApi`] over HTTP with JSON bodies.
pub struct HttpArticleApi {
    base_url: Url,
    client: Client,
}

impl HttpArticleApi {
    pub fn new(options: HttpArticleApiOptions) -> ArticleApiResult<Self> {
        let HttpArticleApiOptions {
            base_url,
            mut headers,
            timeout,
        } = options;

        let base_url = base_url.unwrap_or_else(|| "http://localhost".to_string());
        let base_url = Url::parse(&base_url).map_err(|e| {
            ArticleApiError::InvalidInput(format!("Invalid base url {base_url:?}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ArticleApiError::InvalidInput(format!(
                "Base url {base_url} cannot carry paths"
            )));
        }

        headers
            .entry(header::ACCEPT)
            .or_insert(HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    /// Resolve a service path against the base url, keeping any path prefix
    /// the base url carries.
    fn endpoint(&self, segments: &[&str]) -> ArticleApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ArticleApiError::InvalidInput(format!(
                    "Base url {} cannot carry paths",
                    self.base_url
                ))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ArticleApi for HttpArticleApi {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str) -> ArticleApiResult<Vec<Article>> {
        let url = self.endpoint(&["search"])?;
        let span = ApiSpan::new(PROVIDER, "search", "GET", url.path());
        debug!(query, "searching articles");

        let request = self.client.get(url).query(&[("q", query)]);
        trace_call(
            span,
            client_utils::send_json::<Vec<Article>>(request),
            |span, articles| {
                span.set_attribute(
                    "weid.article.count",
                    i64::try_from(articles.len()).unwrap_or(i64::MAX),
                );
            },
        )
        .await
    }

    async fn add(&self, article: NewArticle) -> ArticleApiResult<()> {
        let url = self.endpoint(&["add"])?;
        let span = ApiSpan::new(PROVIDER, "add", "POST", url.path());
        debug!(title = %article.title, authors = article.authors.len(), "adding article");

        let request = self.client.post(url).json(&article);
        trace_call(span, client_utils::send_ack(request), |_, _| {}).await
    }

    async fn delete(&self, id: &ArticleId) -> ArticleApiResult<()> {
        let url = self.endpoint(&["delete", id.as_str()])?;
        let span = ApiSpan::new(PROVIDER, "delete", "DELETE", url.path());
        span.set_attribute("weid.article.id", id.to_string());
        debug!(%id, "deleting article");

        let request = self.client.delete(url);
        trace_call(span, client_utils::send_ack(request), |_, _| {}).await
    }
}
