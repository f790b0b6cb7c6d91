//! Host facilities the runtime is wired to.

use crate::{view::Node, AppError, AppResult, SelectedFile};
use tracing::{debug, info};
use weid_sdk::{mime_type_from_file_name, DataUrl};

/// Reads a selected file into a data URL. The read completes or fails once.
#[async_trait::async_trait]
pub trait FileSource: Send + Sync {
    async fn read_data_url(&self, file: &SelectedFile) -> AppResult<DataUrl>;
}

/// Reads files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileSource;

#[async_trait::async_trait]
impl FileSource for FsFileSource {
    async fn read_data_url(&self, file: &SelectedFile) -> AppResult<DataUrl> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|source| AppError::FileRead {
                path: file.path.clone(),
                source,
            })?;
        let mime_type = file
            .mime_type
            .as_deref()
            .unwrap_or_else(|| mime_type_from_file_name(&file.name));
        debug!(file = %file.name, bytes = bytes.len(), mime_type, "read file");
        Ok(DataUrl::encode(mime_type, &bytes))
    }
}

/// Changes the current location of the host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Navigator for hosts without a location bar; records the move in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, location: &str) {
        info!(location, "navigate");
    }
}

/// Receives every freshly built view.
pub trait Renderer: Send {
    fn render(&mut self, view: &Node);
}

/// Discards views.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &Node) {}
}

/// Keeps the HTML of the latest view.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    html: String,
    renders: usize,
}

impl HtmlRenderer {
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of views rendered so far.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, view: &Node) {
        self.html = view.to_html();
        self.renders += 1;
    }
}
