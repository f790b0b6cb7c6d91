use crate::{
    view::{Element, Node},
    AppError, Effect, RequestStatus,
};
use std::collections::BTreeSet;
use tracing::{info, warn};
use weid_sdk::{view_location, Article, ArticleId};

/// Messages emitted by list rows. Every row message carries the id of the
/// row it came from, so sibling rows never share events.
#[derive(Debug)]
pub enum ArticleListMsg {
    Delete(ArticleId),
    Open(ArticleId),
    Deleted {
        id: ArticleId,
        result: Result<(), AppError>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListState {
    /// Rows whose removal request is outstanding.
    pub deleting: BTreeSet<ArticleId>,
    /// Outcome of the latest removal request.
    pub status: RequestStatus,
}

/// What the parent must do after a list message was handled.
#[derive(Debug, PartialEq)]
pub enum ListOutcome {
    /// Nothing beyond the effects.
    None,
    /// The collection changed on the service; the parent re-runs its query.
    Refresh,
}

impl ArticleListState {
    pub fn update(&mut self, msg: ArticleListMsg) -> (Vec<Effect>, ListOutcome) {
        match msg {
            ArticleListMsg::Delete(id) => {
                if !self.deleting.insert(id.clone()) {
                    return (vec![], ListOutcome::None);
                }
                self.status = RequestStatus::InFlight;
                (vec![Effect::Delete { id }], ListOutcome::None)
            }
            ArticleListMsg::Open(id) => (
                vec![Effect::Navigate(view_location(&id))],
                ListOutcome::None,
            ),
            ArticleListMsg::Deleted { id, result } => {
                self.deleting.remove(&id);
                match result {
                    Ok(()) => {
                        info!(%id, "article deleted");
                        self.status = RequestStatus::Succeeded;
                    }
                    Err(error) => {
                        warn!(%id, %error, "delete failed");
                        self.status = RequestStatus::failed(&error);
                    }
                }
                (vec![], ListOutcome::Refresh)
            }
        }
    }

    #[must_use]
    pub fn view(&self, articles: &[Article]) -> Node {
        let list = Element::new("ul")
            .class("article-list")
            .children(articles.iter().map(|article| self.item_view(article)));

        let status = match &self.status {
            RequestStatus::Failed(message) => Some(
                Element::new("div")
                    .class("list-status")
                    .class("error")
                    .text(format!("Delete failed: {message}")),
            ),
            _ => None,
        };

        Element::new("div")
            .class("article-panel")
            .child(list)
            .children(status)
            .into()
    }

    fn item_view(&self, article: &Article) -> Element {
        let pending = self.deleting.contains(&article.id);
        Element::new("li")
            .class("article-item")
            .class_if("disabled", pending)
            .attr("data-id", article.id.to_string())
            .child(Element::new("div").class("article-delete").text("Del"))
            .child(
                Element::new("div")
                    .class("article-content")
                    .attr("data-href", view_location(&article.id))
                    .child(
                        Element::new("div")
                            .class("article-title")
                            .text(article.title.clone()),
                    )
                    .child(Element::new("div").class("article-authors").children(
                        article.authors.iter().map(|author| {
                            Element::new("span")
                                .class("article-author")
                                .text(author.clone())
                        }),
                    )),
            )
    }
}
