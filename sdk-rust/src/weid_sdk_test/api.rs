use std::{collections::VecDeque, sync::Mutex};

use crate::{
    article_api::ArticleApi,
    errors::{ArticleApiError, ArticleApiResult},
    Article, ArticleId, NewArticle,
};

/// Result for a mocked call.
/// It can either be a response or an error to return.
#[derive(Debug)]
pub enum MockResult<T> {
    Response(T),
    Error(ArticleApiError),
}

impl<T> MockResult<T> {
    /// Construct a result that yields the provided response.
    pub fn response(response: T) -> Self {
        Self::Response(response)
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: ArticleApiError) -> Self {
        Self::Error(error)
    }

    fn into_result(self) -> ArticleApiResult<T> {
        match self {
            Self::Response(response) => Ok(response),
            Self::Error(error) => Err(error),
        }
    }
}

impl From<Vec<Article>> for MockResult<Vec<Article>> {
    fn from(articles: Vec<Article>) -> Self {
        Self::response(articles)
    }
}

impl From<()> for MockResult<()> {
    fn from((): ()) -> Self {
        Self::response(())
    }
}

impl<T> From<ArticleApiResult<T>> for MockResult<T> {
    fn from(result: ArticleApiResult<T>) -> Self {
        match result {
            Ok(response) => Self::Response(response),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Default)]
struct MockArticleApiState {
    mocked_search_results: VecDeque<MockResult<Vec<Article>>>,
    mocked_add_results: VecDeque<MockResult<()>>,
    mocked_delete_results: VecDeque<MockResult<()>>,
    tracked_search_queries: Vec<String>,
    tracked_add_inputs: Vec<NewArticle>,
    tracked_delete_ids: Vec<ArticleId>,
}

impl MockArticleApiState {
    fn reset(&mut self) {
        self.tracked_search_queries.clear();
        self.tracked_add_inputs.clear();
        self.tracked_delete_ids.clear();
    }

    fn restore(&mut self) {
        self.mocked_search_results.clear();
        self.mocked_add_results.clear();
        self.mocked_delete_results.clear();
        self.reset();
    }
}

/// A mock article service for testing that tracks inputs and yields
/// predefined outputs. Calls with nothing enqueued fail with
/// [`ArticleApiError::Invariant`].
#[derive(Default)]
pub struct MockArticleApi {
    state: Mutex<MockArticleApiState>,
}

impl MockArticleApi {
    /// Construct a new mock article service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a mocked search result.
    pub fn enqueue_search<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<Vec<Article>>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_search_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked add result.
    pub fn enqueue_add<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<()>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_add_results.push_back(result.into());
        drop(state);
        self
    }

    /// Enqueue a mocked delete result.
    pub fn enqueue_delete<R>(&self, result: R) -> &Self
    where
        R: Into<MockResult<()>>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_delete_results.push_back(result.into());
        drop(state);
        self
    }

    /// Queries received by `search` so far, in call order.
    pub fn tracked_search_queries(&self) -> Vec<String> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_search_queries.clone()
    }

    /// Articles received by `add` so far, in call order.
    pub fn tracked_add_inputs(&self) -> Vec<NewArticle> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_add_inputs.clone()
    }

    /// Ids received by `delete` so far, in call order.
    pub fn tracked_delete_ids(&self) -> Vec<ArticleId> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_delete_ids.clone()
    }

    /// Reset tracked inputs without touching enqueued results.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.reset();
    }

    /// Clear both tracked inputs and enqueued results.
    pub fn restore(&self) {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.restore();
    }
}

#[async_trait::async_trait]
impl ArticleApi for MockArticleApi {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search(&self, query: &str) -> ArticleApiResult<Vec<Article>> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_search_queries.push(query.to_string());

        state
            .mocked_search_results
            .pop_front()
            .ok_or_else(|| ArticleApiError::Invariant("no mocked search results available".into()))?
            .into_result()
    }

    async fn add(&self, article: NewArticle) -> ArticleApiResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_add_inputs.push(article);

        state
            .mocked_add_results
            .pop_front()
            .ok_or_else(|| ArticleApiError::Invariant("no mocked add results available".into()))?
            .into_result()
    }

    async fn delete(&self, id: &ArticleId) -> ArticleApiResult<()> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_delete_ids.push(id.clone());

        state
            .mocked_delete_results
            .pop_front()
            .ok_or_else(|| ArticleApiError::Invariant("no mocked delete results available".into()))?
            .into_result()
    }
}
