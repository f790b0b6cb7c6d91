pub mod add_form;
pub mod article_list;
pub mod file_input;
pub mod search;

pub use add_form::{AddFormMsg, AddFormState, FormOutcome};
pub use article_list::{ArticleListMsg, ArticleListState, ListOutcome};
pub use file_input::{FileInputMsg, FileInputState, FILE_PLACEHOLDER};
pub use search::{SearchMsg, SearchState};
