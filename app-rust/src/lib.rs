mod app;
pub mod components;
mod debounce;
mod errors;
mod options;
mod ports;
mod runtime;
mod types;
pub mod view;

pub use app::{AppState, Msg};
pub use debounce::Debouncer;
pub use errors::{AppError, AppResult};
pub use options::{AppOptions, ElementIds};
pub use ports::{
    FileSource, FsFileSource, HtmlRenderer, LogNavigator, Navigator, NullRenderer, Renderer,
};
pub use runtime::{Runtime, RuntimeParams};
pub use types::{Effect, RequestStatus, SelectedFile, Token};
pub use view::{Element, Node};
