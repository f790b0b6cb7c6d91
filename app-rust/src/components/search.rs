use crate::{
    view::{Element, Node},
    AppError, Effect, RequestStatus, Token,
};
use tracing::{debug, warn};
use weid_sdk::Article;

#[derive(Debug)]
pub enum SearchMsg {
    /// The text in the search box changed.
    Input(String),
    /// The debouncer let a query through.
    Settled(String),
    /// Re-run the last settled query.
    Refresh,
    Loaded {
        token: Token,
        result: Result<Vec<Article>, AppError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text currently in the search box.
    pub input: String,
    /// Query of the latest issued request.
    pub query: String,
    /// Token of the latest issued request.
    pub token: Token,
    pub status: RequestStatus,
    /// The collection from the latest applied response.
    pub articles: Vec<Article>,
    /// Responses dropped because a newer request was issued before they
    /// arrived.
    pub stale_responses: usize,
}

impl SearchState {
    pub fn update(&mut self, msg: SearchMsg) -> Vec<Effect> {
        match msg {
            SearchMsg::Input(text) => {
                self.input.clone_from(&text);
                vec![Effect::Debounce(text)]
            }
            SearchMsg::Settled(query) => vec![self.issue(query)],
            SearchMsg::Refresh => vec![self.issue(self.query.clone())],
            SearchMsg::Loaded { token, result } => {
                if token != self.token {
                    debug!(%token, latest = %self.token, "dropping stale search response");
                    self.stale_responses += 1;
                    return vec![];
                }
                match result {
                    Ok(articles) => {
                        debug!(%token, count = articles.len(), "search response applied");
                        self.articles = articles;
                        self.status = RequestStatus::Succeeded;
                    }
                    Err(error) => {
                        warn!(%token, %error, "search failed");
                        self.status = RequestStatus::failed(&error);
                    }
                }
                vec![]
            }
        }
    }

    fn issue(&mut self, query: String) -> Effect {
        self.token = self.token.next();
        self.query.clone_from(&query);
        self.status = RequestStatus::InFlight;
        Effect::Search {
            token: self.token,
            query,
        }
    }

    #[must_use]
    pub fn view(&self) -> Node {
        let status = match &self.status {
            RequestStatus::Idle | RequestStatus::Succeeded => None,
            RequestStatus::InFlight => Some(
                Element::new("div")
                    .class("search-status")
                    .text("Searching..."),
            ),
            RequestStatus::Failed(message) => Some(
                Element::new("div")
                    .class("search-status")
                    .class("error")
                    .text(format!("Search failed: {message}")),
            ),
        };

        Element::new("div")
            .class("search-box")
            .child(
                Element::new("input")
                    .class("search")
                    .attr("type", "text")
                    .attr("placeholder", "Search...")
                    .attr("value", self.input.clone()),
            )
            .children(status)
            .into()
    }
}
