use crate::{Article, ArticleApiResult, ArticleId, NewArticle};

/// The operations the article service exposes to the front-end.
#[async_trait::async_trait]
pub trait ArticleApi: Send + Sync {
    /// A short name for logs and spans.
    fn name(&self) -> &'static str;
    /// Fetch the collection of articles matching `query`.
    /// An empty query lists everything the service is willing to return.
    async fn search(&self, query: &str) -> ArticleApiResult<Vec<Article>>;
    /// Create an article. The response body is only a completion signal.
    async fn add(&self, article: NewArticle) -> ArticleApiResult<()>;
    /// Remove an article. The response body is only a completion signal.
    async fn delete(&self, id: &ArticleId) -> ArticleApiResult<()>;
}
