mod article_api;
mod client_utils;
mod data_url;
mod errors;
pub mod http;
mod opentelemetry;
mod types;
pub mod weid_sdk_test;

pub use article_api::ArticleApi;
pub use data_url::{mime_type_from_file_name, DataUrl, DEFAULT_MIME_TYPE};
pub use errors::*;
pub use types::*;
