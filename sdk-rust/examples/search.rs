use dotenvy::dotenv;
use weid_sdk::{
    http::{HttpArticleApi, HttpArticleApiOptions},
    ArticleApi,
};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let query = std::env::args().nth(1).unwrap_or_default();
    let api = HttpArticleApi::new(HttpArticleApiOptions {
        base_url: std::env::var("WEID_BASE_URL").ok(),
        ..Default::default()
    })
    .unwrap();

    let articles = api.search(&query).await.unwrap();

    for article in &articles {
        println!("[{}] {} ({})", article.id, article.title, article.authors.join(", "));
    }
}
