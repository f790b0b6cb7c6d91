use crate::{
    components::{
        AddFormMsg, AddFormState, ArticleListMsg, ArticleListState, FormOutcome, ListOutcome,
        SearchMsg, SearchState,
    },
    options::{AppOptions, ElementIds},
    view::{Element, Node},
    Effect,
};

/// Every message the article desk reacts to.
#[derive(Debug)]
pub enum Msg {
    /// Sent once by the runtime before any host event.
    Init,
    Search(SearchMsg),
    List(ArticleListMsg),
    Add(AddFormMsg),
}

impl From<SearchMsg> for Msg {
    fn from(msg: SearchMsg) -> Self {
        Self::Search(msg)
    }
}

impl From<ArticleListMsg> for Msg {
    fn from(msg: ArticleListMsg) -> Self {
        Self::List(msg)
    }
}

impl From<AddFormMsg> for Msg {
    fn from(msg: AddFormMsg) -> Self {
        Self::Add(msg)
    }
}

/// State of the whole desk: one field per component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub search: SearchState,
    pub list: ArticleListState,
    pub add_form: AddFormState,
}

impl AppState {
    #[must_use]
    pub fn new(options: &AppOptions) -> Self {
        Self {
            search: SearchState::default(),
            list: ArticleListState::default(),
            add_form: AddFormState::new(options.collapse_on_add),
        }
    }

    /// Apply `msg` and return the work it asks for.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Init => self.search.update(SearchMsg::Settled(String::new())),
            Msg::Search(msg) => self.search.update(msg),
            Msg::List(msg) => {
                let (mut effects, outcome) = self.list.update(msg);
                if outcome == ListOutcome::Refresh {
                    effects.extend(self.search.update(SearchMsg::Refresh));
                }
                effects
            }
            Msg::Add(msg) => {
                let (mut effects, outcome) = self.add_form.update(msg);
                if outcome == FormOutcome::Created {
                    effects.extend(self.search.update(SearchMsg::Refresh));
                }
                effects
            }
        }
    }

    /// Build the whole tree from the current state.
    #[must_use]
    pub fn view(&self, ids: &ElementIds) -> Node {
        Element::new("div")
            .class("app")
            .child(self.search.view())
            .child(self.list.view(&self.search.articles))
            .child(self.add_form.view(&ids.file_input))
            .into()
    }
}
