use std::time::Duration;

/// Identifiers given to elements that must be paired across the tree,
/// such as a label and the input it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub file_input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            file_input: "add-file".to_string(),
        }
    }
}

/// Behaviour knobs of the article desk.
/// # Default Values
/// - `debounce`: 300 ms
/// - `collapse_on_add`: `true`
/// - `ids`: `ElementIds::default()`
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Quiet period after the last keystroke before a search is issued.
    pub debounce: Duration,
    /// Collapse the add panel once an article was created.
    pub collapse_on_add: bool,
    pub ids: ElementIds,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            collapse_on_add: true,
            ids: ElementIds::default(),
        }
    }
}

impl AppOptions {
    #[must_use]
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    #[must_use]
    pub fn collapse_on_add(mut self, collapse_on_add: bool) -> Self {
        self.collapse_on_add = collapse_on_add;
        self
    }

    #[must_use]
    pub fn ids(mut self, ids: ElementIds) -> Self {
        self.ids = ids;
        self
    }
}
