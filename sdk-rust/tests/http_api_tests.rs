use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use weid_sdk::{
    http::{HttpArticleApi, HttpArticleApiOptions},
    ArticleApi, ArticleApiError, ArticleId, DataUrl, NewArticle,
};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
enum Recorded {
    Search(String),
    Add(Value),
    Delete(String),
}

#[derive(Clone, Default)]
struct StubState {
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl StubState {
    fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

async fn search_handler(
    State(state): State<StubState>,
    Query(params): Query<SearchParams>,
) -> Json<Value> {
    state
        .recorded
        .lock()
        .unwrap()
        .push(Recorded::Search(params.q.clone()));

    let catalog = [
        json!({"id": 1, "title": "Rust in Action", "authors": ["McNamara"]}),
        json!({"id": 2, "title": "Programming Rust", "authors": ["Blandy", "Orendorff"]}),
        json!({"id": 3, "title": "The Art of Computer Programming", "authors": ["Knuth"]}),
    ];
    let q = params.q.to_lowercase();
    Json(Value::Array(
        catalog
            .into_iter()
            .filter(|article| {
                article["title"]
                    .as_str()
                    .is_some_and(|title| title.to_lowercase().contains(&q))
            })
            .collect(),
    ))
}

async fn add_handler(State(state): State<StubState>, Json(body): Json<Value>) -> &'static str {
    state.recorded.lock().unwrap().push(Recorded::Add(body));
    "ok"
}

async fn delete_handler(
    State(state): State<StubState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    if id == "404" {
        return Err((StatusCode::NOT_FOUND, format!("no article {id}")));
    }
    state.recorded.lock().unwrap().push(Recorded::Delete(id));
    Ok(Json(json!({})))
}

struct StubServer {
    base_url: String,
    state: StubState,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    async fn stop(mut self) -> Result<(), BoxedError> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.handle
            .await
            .map_err(|err| format!("Failed to join stub server task: {err}"))?;
        Ok(())
    }
}

async fn start_stub_server() -> Result<StubServer, BoxedError> {
    let state = StubState::default();
    let app = Router::new()
        .route("/api/search", get(search_handler))
        .route("/api/add", post(add_handler))
        .route("/api/delete/{id}", delete(delete_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("Failed to bind stub server: {err}"))?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(err) = server.await {
            eprintln!("Stub server error: {err}");
        }
    });

    Ok(StubServer {
        base_url: format!("http://{addr}/api"),
        state,
        shutdown: Some(shutdown_tx),
        handle,
    })
}

fn api_for(stub: &StubServer) -> HttpArticleApi {
    HttpArticleApi::new(HttpArticleApiOptions {
        base_url: Some(stub.base_url.clone()),
        ..Default::default()
    })
    .expect("valid base url")
}

#[tokio::test]
async fn search_sends_query_and_parses_listing() -> Result<(), BoxedError> {
    let stub = start_stub_server().await?;
    let api = api_for(&stub);

    let articles = api.search("rust & more").await?;
    assert!(articles.is_empty());

    let articles = api.search("rust").await?;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].id, ArticleId::from(1_u64));
    assert_eq!(articles[1].authors, vec!["Blandy", "Orendorff"]);
    assert!(articles.iter().all(|article| article.file.is_none()));

    assert_eq!(
        stub.state.recorded(),
        vec![
            Recorded::Search("rust & more".to_string()),
            Recorded::Search("rust".to_string()),
        ]
    );

    stub.stop().await
}

#[tokio::test]
async fn add_posts_json_body_with_data_url() -> Result<(), BoxedError> {
    let stub = start_stub_server().await?;
    let api = api_for(&stub);

    let file = DataUrl::encode("application/pdf", b"%PDF-1.7");
    api.add(NewArticle::from_form("T", "A, B ,C", file.clone()))
        .await?;

    assert_eq!(
        stub.state.recorded(),
        vec![Recorded::Add(json!({
            "title": "T",
            "authors": ["A", "B", "C"],
            "file": file.to_string(),
        }))]
    );

    stub.stop().await
}

#[tokio::test]
async fn delete_targets_id_path() -> Result<(), BoxedError> {
    let stub = start_stub_server().await?;
    let api = api_for(&stub);

    api.delete(&ArticleId::from(5_u64)).await?;

    assert_eq!(
        stub.state.recorded(),
        vec![Recorded::Delete("5".to_string())]
    );

    stub.stop().await
}

#[tokio::test]
async fn non_success_status_is_an_error() -> Result<(), BoxedError> {
    let stub = start_stub_server().await?;
    let api = api_for(&stub);

    let err = api
        .delete(&ArticleId::from(404_u64))
        .await
        .expect_err("delete of unknown id should fail");
    match err {
        ArticleApiError::StatusCode(status, body) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "no article 404");
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
    assert!(stub.state.recorded().is_empty());

    stub.stop().await
}

#[tokio::test]
async fn unexpected_listing_shape_is_an_invariant_error() -> Result<(), BoxedError> {
    let app = Router::new().route(
        "/search",
        get(|| async { Json(json!({"items": []})) }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let api = HttpArticleApi::new(HttpArticleApiOptions {
        base_url: Some(format!("http://{addr}")),
        ..Default::default()
    })?;

    let err = api.search("").await.expect_err("object is not a listing");
    assert!(matches!(err, ArticleApiError::Invariant(_)));

    handle.abort();
    Ok(())
}
