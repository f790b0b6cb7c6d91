use crate::DataUrlError;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// File content embedded in a string as `data:<mime>;base64,<payload>`.
/// This is the form an uploaded file travels in inside an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    mime_type: String,
    payload: String,
}

impl DataUrl {
    /// Encode raw bytes. An empty mime type falls back to
    /// `application/octet-stream`.
    #[must_use]
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        let mime_type = if mime_type.trim().is_empty() {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type.trim().to_string()
        };
        Self {
            mime_type,
            payload: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload, without the `data:` header.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.payload)?)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.payload)
    }
}

impl FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::NotBase64)?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or(DataUrlError::NotBase64)?;

        base64::engine::general_purpose::STANDARD.decode(payload)?;

        Ok(Self {
            mime_type: if mime_type.is_empty() {
                DEFAULT_MIME_TYPE.to_string()
            } else {
                mime_type.to_string()
            },
            payload: payload.to_string(),
        })
    }
}

impl Serialize for DataUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DataUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Best effort mime type from a file name's extension.
#[must_use]
pub fn mime_type_from_file_name(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "epub" => "application/epub+zip",
        "zip" => "application/zip",
        _ => DEFAULT_MIME_TYPE,
    }
}
