use super::file_input::{FileInputMsg, FileInputState};
use crate::{
    view::{Element, Node},
    AppError, Effect, RequestStatus, Token,
};
use tracing::{debug, info, warn};
use weid_sdk::{DataUrl, NewArticle};

#[derive(Debug)]
pub enum AddFormMsg {
    /// Expand or collapse the panel.
    Toggle,
    SetExpanded(bool),
    TitleChanged(String),
    AuthorsChanged(String),
    File(FileInputMsg),
    Submit,
    FileRead {
        token: Token,
        result: Result<DataUrl, AppError>,
    },
    Added {
        token: Token,
        result: Result<(), AppError>,
    },
}

/// What the parent must do after a form message was handled.
#[derive(Debug, PartialEq)]
pub enum FormOutcome {
    None,
    /// An article was created; the parent re-runs its query.
    Created,
}

/// Field values captured when the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Submission {
    title: String,
    authors: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddFormState {
    pub expanded: bool,
    pub title: String,
    /// Comma separated, split on submit.
    pub authors: String,
    pub file_input: FileInputState,
    /// Token of the latest submission.
    pub token: Token,
    /// In flight from the start of the file read until the create response.
    pub status: RequestStatus,
    pub collapse_on_add: bool,
    submitted: Option<Submission>,
}

impl AddFormState {
    #[must_use]
    pub fn new(collapse_on_add: bool) -> Self {
        Self {
            collapse_on_add,
            ..Self::default()
        }
    }

    /// The form accepts a submission only while nothing is in flight.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.status.is_in_flight()
    }

    pub fn update(&mut self, msg: AddFormMsg) -> (Vec<Effect>, FormOutcome) {
        match msg {
            AddFormMsg::Toggle => {
                self.expanded = !self.expanded;
            }
            AddFormMsg::SetExpanded(expanded) => self.expanded = expanded,
            AddFormMsg::TitleChanged(title) => self.title = title,
            AddFormMsg::AuthorsChanged(authors) => self.authors = authors,
            AddFormMsg::File(msg) => self.file_input.update(msg),
            AddFormMsg::Submit => return (self.submit(), FormOutcome::None),
            AddFormMsg::FileRead { token, result } => {
                if token != self.token {
                    debug!(%token, latest = %self.token, "dropping stale file read");
                    return (vec![], FormOutcome::None);
                }
                match (result, self.submitted.take()) {
                    (Ok(file), Some(submitted)) => {
                        let article =
                            NewArticle::from_form(&submitted.title, &submitted.authors, file);
                        return (vec![Effect::Add { token, article }], FormOutcome::None);
                    }
                    (Ok(_), None) => {
                        warn!(%token, "file read without a submission");
                        self.status = RequestStatus::Idle;
                    }
                    (Err(error), _) => {
                        warn!(%token, %error, "file read failed");
                        self.status = RequestStatus::failed(&error);
                    }
                }
            }
            AddFormMsg::Added { token, result } => {
                if token != self.token {
                    debug!(%token, latest = %self.token, "dropping stale add response");
                    return (vec![], FormOutcome::None);
                }
                match result {
                    Ok(()) => {
                        info!(%token, title = %self.title, "article added");
                        self.status = RequestStatus::Succeeded;
                        if self.collapse_on_add {
                            self.expanded = false;
                        }
                        return (vec![], FormOutcome::Created);
                    }
                    Err(error) => {
                        warn!(%token, %error, "add failed");
                        self.status = RequestStatus::failed(&error);
                    }
                }
            }
        }
        (vec![], FormOutcome::None)
    }

    fn submit(&mut self) -> Vec<Effect> {
        if !self.expanded {
            debug!("submit ignored while the panel is collapsed");
            return vec![];
        }
        if !self.is_enabled() {
            debug!("submit ignored while a submission is in flight");
            return vec![];
        }
        let Some(file) = self.file_input.file.clone() else {
            self.status = RequestStatus::failed(&AppError::MissingFile);
            return vec![];
        };
        self.token = self.token.next();
        self.status = RequestStatus::InFlight;
        self.submitted = Some(Submission {
            title: self.title.clone(),
            authors: self.authors.clone(),
        });
        vec![Effect::ReadFile {
            token: self.token,
            file,
        }]
    }

    /// `file_input_id` is the identifier pairing the file label and input.
    #[must_use]
    pub fn view(&self, file_input_id: &str) -> Node {
        let toggle = Element::new("div")
            .class("add-toggle")
            .attr("aria-expanded", self.expanded.to_string())
            .text(if self.expanded { "Hide" } else { "Add article" });

        let mut panel = Element::new("div")
            .class("add-panel")
            .class_if("expanded", self.expanded)
            .child(toggle);

        if self.expanded {
            panel = panel.child(self.form_view(file_input_id));
        }
        panel.into()
    }

    fn form_view(&self, file_input_id: &str) -> Element {
        let disabled = !self.is_enabled();
        let field = |heading: &str, content: Node| {
            Element::new("div")
                .class("add-field")
                .class_if("disabled", disabled)
                .child(Element::new("h2").text(heading))
                .child(content)
        };

        let status = match &self.status {
            RequestStatus::Idle => None,
            RequestStatus::InFlight => Some((false, "Adding...".to_string())),
            RequestStatus::Succeeded => Some((false, "Article added".to_string())),
            RequestStatus::Failed(message) => {
                Some((true, format!("Could not add article: {message}")))
            }
        }
        .map(|(is_error, text)| {
            Element::new("div")
                .class("add-status")
                .class_if("error", is_error)
                .text(text)
        });

        Element::new("div")
            .class("add-form")
            .child(Element::new("h1").text("Add new article"))
            .child(field(
                "Title",
                Element::new("input")
                    .class("add-title")
                    .attr("type", "text")
                    .attr("placeholder", "Title")
                    .attr("value", self.title.clone())
                    .into(),
            ))
            .child(field(
                "Authors (comma separated)",
                Element::new("input")
                    .class("add-authors")
                    .attr("type", "text")
                    .attr("placeholder", "Authors")
                    .attr("value", self.authors.clone())
                    .into(),
            ))
            .child(field("File", self.file_input.view(file_input_id)))
            .child(
                Element::new("div")
                    .class("add")
                    .class_if("disabled", disabled)
                    .text("Add"),
            )
            .children(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectedFile;

    fn filled_form() -> AddFormState {
        let mut form = AddFormState::new(true);
        form.update(AddFormMsg::Toggle);
        form.update(AddFormMsg::TitleChanged("T".to_string()));
        form.update(AddFormMsg::AuthorsChanged("A, B ,C".to_string()));
        form.update(AddFormMsg::File(FileInputMsg::Selected(Some(
            SelectedFile::from_path("/tmp/t.txt"),
        ))));
        form
    }

    #[test]
    fn submit_reads_file_then_posts_split_authors() {
        let mut form = filled_form();

        let (effects, _) = form.update(AddFormMsg::Submit);
        let [Effect::ReadFile { token, file }] = effects.as_slice() else {
            panic!("expected a file read, got {effects:?}");
        };
        assert_eq!(file.name, "t.txt");
        assert!(!form.is_enabled());

        let url = DataUrl::encode("text/plain", b"body");
        let (effects, _) = form.update(AddFormMsg::FileRead {
            token: *token,
            result: Ok(url.clone()),
        });
        assert_eq!(
            effects,
            vec![Effect::Add {
                token: *token,
                article: NewArticle {
                    title: "T".to_string(),
                    authors: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    file: url,
                },
            }]
        );
        assert!(!form.is_enabled());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled_form();
        let (first, _) = form.update(AddFormMsg::Submit);
        let (second, _) = form.update(AddFormMsg::Submit);
        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn submit_without_file_fails_without_request() {
        let mut form = AddFormState::new(true);
        form.update(AddFormMsg::Toggle);
        let (effects, _) = form.update(AddFormMsg::Submit);
        assert!(effects.is_empty());
        assert_eq!(form.status, RequestStatus::Failed("No file selected".to_string()));
        assert!(form.is_enabled());
    }

    #[test]
    fn posts_fields_as_they_were_at_submit() {
        let mut form = filled_form();
        form.update(AddFormMsg::Submit);
        let token = form.token;

        form.update(AddFormMsg::TitleChanged("EDITED".to_string()));
        form.update(AddFormMsg::AuthorsChanged("Z".to_string()));

        let url = DataUrl::encode("text/plain", b"body");
        let (effects, _) = form.update(AddFormMsg::FileRead {
            token,
            result: Ok(url.clone()),
        });
        assert_eq!(
            effects,
            vec![Effect::Add {
                token,
                article: NewArticle {
                    title: "T".to_string(),
                    authors: vec!["A".to_string(), "B".to_string(), "C".to_string()],
                    file: url,
                },
            }]
        );
        assert_eq!(form.title, "EDITED");
    }

    #[test]
    fn submit_on_collapsed_panel_is_ignored() {
        let mut form = filled_form();
        form.update(AddFormMsg::Toggle);
        assert!(!form.expanded);

        let (effects, _) = form.update(AddFormMsg::Submit);
        assert!(effects.is_empty());
        assert_eq!(form.status, RequestStatus::Idle);
        assert_eq!(form.token, Token::default());

        form.update(AddFormMsg::SetExpanded(true));
        let (effects, _) = form.update(AddFormMsg::Submit);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn success_reenables_and_collapses() {
        let mut form = filled_form();
        form.update(AddFormMsg::Submit);
        let token = form.token;
        let (_, outcome) = form.update(AddFormMsg::Added {
            token,
            result: Ok(()),
        });
        assert_eq!(outcome, FormOutcome::Created);
        assert!(form.is_enabled());
        assert!(!form.expanded);
    }

    #[test]
    fn file_read_failure_reenables_form() {
        let mut form = filled_form();
        form.update(AddFormMsg::Submit);
        let token = form.token;
        let (effects, _) = form.update(AddFormMsg::FileRead {
            token,
            result: Err(AppError::FileRead {
                path: "/tmp/t.txt".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        });
        assert!(effects.is_empty());
        assert!(form.is_enabled());
        assert!(matches!(form.status, RequestStatus::Failed(_)));
    }

    #[test]
    fn disabled_fields_are_marked_in_view() {
        let mut form = filled_form();
        let view = form.view("f");
        assert!(view
            .find_by_class("add-field")
            .iter()
            .all(|field| !field.has_class("disabled")));

        form.update(AddFormMsg::Submit);
        let view = form.view("f");
        let fields = view.find_by_class("add-field");
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|field| field.has_class("disabled")));
        assert!(view.find_by_class("add")[0].has_class("disabled"));
    }

    #[test]
    fn collapsed_panel_hides_form() {
        let form = AddFormState::new(true);
        let view = form.view("f");
        assert!(view.find_by_class("add-form").is_empty());
        assert_eq!(view.find_by_class("add-toggle").len(), 1);
    }
}
