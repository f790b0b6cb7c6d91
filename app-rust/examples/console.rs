//! Drive the article desk from a terminal.
//!
//! Commands, one per line:
//! - `search <text>`
//! - `open <id>`
//! - `del <id>`
//! - `add <title> | <authors> | <path>`
//! - `quit`
//!
//! The service origin is read from `WEID_BASE_URL`.

use async_stream::stream;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use weid_app::{
    components::{AddFormMsg, ArticleListMsg, FileInputMsg, SearchMsg},
    Msg, Node, Renderer, Runtime, SelectedFile,
};
use weid_sdk::{
    http::{HttpArticleApi, HttpArticleApiOptions},
    ArticleId,
};

/// Prints the rows and status lines of every view that differs from the
/// previous one.
#[derive(Default)]
struct ConsoleRenderer {
    last: String,
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, view: &Node) {
        let mut lines = Vec::new();
        for row in view.find_by_class("article-item") {
            let id = row.get_attr("data-id").unwrap_or("?");
            let title = row
                .find_by_class("article-title")
                .first()
                .map(|title| title.text_content())
                .unwrap_or_default();
            let authors: Vec<String> = row
                .find_by_class("article-author")
                .iter()
                .map(|author| author.text_content())
                .collect();
            lines.push(format!("[{id}] {title} ({})", authors.join(", ")));
        }
        for class in ["search-status", "list-status", "add-status"] {
            for status in view.find_by_class(class) {
                lines.push(format!("-- {}", status.text_content()));
            }
        }

        let output = lines.join("\n");
        if output != self.last {
            println!("{output}\n");
            self.last = output;
        }
    }
}

fn parse_command(line: &str) -> Option<Vec<Msg>> {
    let (command, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    let msgs = match command {
        "search" => vec![SearchMsg::Input(rest.to_string()).into()],
        "open" => vec![ArticleListMsg::Open(ArticleId::new(rest.trim())).into()],
        "del" => vec![ArticleListMsg::Delete(ArticleId::new(rest.trim())).into()],
        "add" => {
            let mut fields = rest.splitn(3, '|').map(str::trim);
            let title = fields.next().unwrap_or_default();
            let authors = fields.next().unwrap_or_default();
            let file = fields
                .next()
                .filter(|path| !path.is_empty())
                .map(SelectedFile::from_path);
            vec![
                AddFormMsg::SetExpanded(true).into(),
                AddFormMsg::TitleChanged(title.to_string()).into(),
                AddFormMsg::AuthorsChanged(authors.to_string()).into(),
                AddFormMsg::File(FileInputMsg::Selected(file)).into(),
                AddFormMsg::Submit.into(),
            ]
        }
        _ => return None,
    };
    Some(msgs)
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let api = HttpArticleApi::new(HttpArticleApiOptions {
        base_url: std::env::var("WEID_BASE_URL").ok(),
        ..Default::default()
    })
    .expect("invalid WEID_BASE_URL");

    let events = stream! {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim() == "quit" {
                break;
            }
            match parse_command(&line) {
                Some(msgs) => {
                    for msg in msgs {
                        yield msg;
                    }
                }
                None => eprintln!("unknown command: {line}"),
            }
        }
    };

    let state = Runtime::builder(Arc::new(api))
        .renderer(ConsoleRenderer::default())
        .build()
        .run(events)
        .await;

    println!("{} articles listed", state.search.articles.len());
}
