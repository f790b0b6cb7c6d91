use crate::DataUrl;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned to an article by the service.
/// The service may encode it as a JSON number or a string; both are accepted
/// and kept in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ArticleId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ArticleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// An article as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub authors: Vec<String>,
    /// The listed representation never carries the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub file: Option<DataUrl>,
}

impl Article {
    pub fn new<T, I, A>(id: impl Into<ArticleId>, title: T, authors: A) -> Self
    where
        T: Into<String>,
        I: Into<String>,
        A: IntoIterator<Item = I>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            file: None,
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct NewArticle {
    pub title: String,
    pub authors: Vec<String>,
    #[cfg_attr(feature = "utoipa", schema(value_type = String))]
    pub file: DataUrl,
}

impl NewArticle {
    /// Build a create request from raw form input. Authors are split with
    /// [`split_authors`].
    #[must_use]
    pub fn from_form(title: &str, raw_authors: &str, file: DataUrl) -> Self {
        Self {
            title: title.to_string(),
            authors: split_authors(raw_authors),
            file,
        }
    }
}

/// Split a comma separated author list and trim every entry.
/// Empty entries are kept: `"A,,B"` yields `["A", "", "B"]`.
#[must_use]
pub fn split_authors(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}

/// Client side location of an article's view.
#[must_use]
pub fn view_location(id: &ArticleId) -> String {
    format!("/view/{id}")
}
