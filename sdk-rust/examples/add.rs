use dotenvy::dotenv;
use weid_sdk::{
    http::{HttpArticleApi, HttpArticleApiOptions},
    mime_type_from_file_name, ArticleApi, DataUrl, NewArticle,
};

/// Usage: `cargo run --example add -- <title> <authors> <path>`
#[tokio::main]
async fn main() {
    dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(title), Some(authors), Some(path)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: add <title> <authors> <path>");
        return;
    };

    let bytes = tokio::fs::read(&path).await.unwrap();
    let file = DataUrl::encode(mime_type_from_file_name(&path), &bytes);

    let api = HttpArticleApi::new(HttpArticleApiOptions {
        base_url: std::env::var("WEID_BASE_URL").ok(),
        ..Default::default()
    })
    .unwrap();

    api.add(NewArticle::from_form(&title, &authors, file))
        .await
        .unwrap();

    println!("added {title}");
}
