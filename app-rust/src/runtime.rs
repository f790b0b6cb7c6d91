use crate::{
    app::{AppState, Msg},
    components::{AddFormMsg, ArticleListMsg, SearchMsg},
    debounce::Debouncer,
    options::AppOptions,
    ports::{FileSource, FsFileSource, LogNavigator, Navigator, NullRenderer, Renderer},
    AppError, Effect,
};
use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, Stream, StreamExt},
    FutureExt,
};
use std::sync::Arc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, info_span};
use tracing_futures::Instrument;
use weid_sdk::ArticleApi;

/// Drives the article desk on a single task.
///
/// Host events, the search debouncer and outstanding requests are multiplexed
/// in one loop. Each message runs to completion (update, render, start
/// effects) before the next one is taken, so the state needs no locking.
pub struct Runtime {
    api: Arc<dyn ArticleApi>,
    file_source: Arc<dyn FileSource>,
    navigator: Arc<dyn Navigator>,
    renderer: Box<dyn Renderer>,
    options: AppOptions,
    state: AppState,
    debouncer: Debouncer<String>,
    pending: FuturesUnordered<BoxFuture<'static, Msg>>,
}

impl Runtime {
    #[must_use]
    pub fn new(params: RuntimeParams) -> Self {
        Self {
            state: AppState::new(&params.options),
            debouncer: Debouncer::new(params.options.debounce),
            pending: FuturesUnordered::new(),
            api: params.api,
            file_source: params.file_source,
            navigator: params.navigator,
            renderer: params.renderer,
            options: params.options,
        }
    }

    pub fn builder(api: Arc<dyn ArticleApi>) -> RuntimeParams {
        RuntimeParams::new(api)
    }

    /// Consume host events until the stream ends and every outstanding
    /// search, read and request has settled, then return the final state.
    pub async fn run<S>(mut self, events: S) -> AppState
    where
        S: Stream<Item = Msg>,
    {
        let mut events = std::pin::pin!(events);
        let mut events_open = true;

        info!(api = self.api.name(), "article desk started");
        self.dispatch(Msg::Init);

        loop {
            let deadline = self.debouncer.deadline();
            tokio::select! {
                Some(msg) = self.pending.next(), if !self.pending.is_empty() => {
                    self.dispatch(msg);
                }
                event = events.next(), if events_open => match event {
                    Some(msg) => self.dispatch(msg),
                    None => {
                        debug!("event stream closed");
                        events_open = false;
                    }
                },
                () = wait_until(deadline), if deadline.is_some() => {
                    if let Some(query) = self.debouncer.take_ready(Instant::now()) {
                        self.dispatch(SearchMsg::Settled(query).into());
                    }
                }
                else => break,
            }
        }

        info!(
            articles = self.state.search.articles.len(),
            stale_responses = self.state.search.stale_responses,
            "article desk stopped"
        );
        self.state
    }

    fn dispatch(&mut self, msg: Msg) {
        let effects = self.state.update(msg);
        self.renderer.render(&self.state.view(&self.options.ids));
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Debounce(query) => self.debouncer.push(query, Instant::now()),
            Effect::Search { token, query } => {
                let api = self.api.clone();
                let span = info_span!("weid_app.search", %token, query = %query);
                self.spawn(
                    async move {
                        let result = api.search(&query).await.map_err(AppError::from);
                        SearchMsg::Loaded { token, result }.into()
                    }
                    .instrument(span),
                );
            }
            Effect::Delete { id } => {
                let api = self.api.clone();
                let span = info_span!("weid_app.delete", %id);
                self.spawn(
                    async move {
                        let result = api.delete(&id).await.map_err(AppError::from);
                        ArticleListMsg::Deleted { id, result }.into()
                    }
                    .instrument(span),
                );
            }
            Effect::ReadFile { token, file } => {
                let file_source = self.file_source.clone();
                let span = info_span!("weid_app.read_file", %token, file = %file.name);
                self.spawn(
                    async move {
                        let result = file_source.read_data_url(&file).await;
                        AddFormMsg::FileRead { token, result }.into()
                    }
                    .instrument(span),
                );
            }
            Effect::Add { token, article } => {
                let api = self.api.clone();
                let span = info_span!("weid_app.add", %token, title = %article.title);
                self.spawn(
                    async move {
                        let result = api.add(article).await.map_err(AppError::from);
                        AddFormMsg::Added { token, result }.into()
                    }
                    .instrument(span),
                );
            }
            Effect::Navigate(location) => self.navigator.navigate(&location),
        }
    }

    /// Queue a future on this task. It is polled by the run loop, never on
    /// another thread.
    fn spawn<F>(&mut self, future: F)
    where
        F: std::future::Future<Output = Msg> + Send + 'static,
    {
        self.pending.push(future.boxed());
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Parameters required to create a runtime.
/// # Default Values
/// - `file_source`: `FsFileSource`
/// - `navigator`: `LogNavigator`
/// - `renderer`: `NullRenderer`
/// - `options`: `AppOptions::default()`
pub struct RuntimeParams {
    /// The article service.
    pub api: Arc<dyn ArticleApi>,
    /// Reads files selected in the add form.
    pub file_source: Arc<dyn FileSource>,
    /// Receives `/view/:id` locations when an article is opened.
    pub navigator: Arc<dyn Navigator>,
    /// Receives every rebuilt view.
    pub renderer: Box<dyn Renderer>,
    pub options: AppOptions,
}

impl RuntimeParams {
    pub fn new(api: Arc<dyn ArticleApi>) -> Self {
        Self {
            api,
            file_source: Arc::new(FsFileSource),
            navigator: Arc::new(LogNavigator),
            renderer: Box::new(NullRenderer),
            options: AppOptions::default(),
        }
    }

    /// Set the file source
    #[must_use]
    pub fn file_source(mut self, file_source: impl FileSource + 'static) -> Self {
        self.file_source = Arc::new(file_source);
        self
    }

    /// Set the navigator
    #[must_use]
    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    /// Set the renderer
    #[must_use]
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Set the options
    #[must_use]
    pub fn options(mut self, options: AppOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn build(self) -> Runtime {
        Runtime::new(self)
    }
}
