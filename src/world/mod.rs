//! Conversation participants ("worlds") and how their replies are read.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::error::{Result, WorldsError};

/// JSON key holding the reply text of a JSON world.
pub const MESSAGE_FIELD: &str = "message";

/// How a world encodes its reply body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr)]
pub enum ResponseFormat {
    #[serde(rename = "application/json")]
    #[strum(serialize = "application/json")]
    Json,
    #[serde(rename = "application/text")]
    #[strum(serialize = "application/text")]
    Text,
}

impl ResponseFormat {
    /// Map a declared content type to a format.
    ///
    /// Any content type mentioning `json` (case-insensitive) is JSON;
    /// everything else is read as raw text.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.to_ascii_lowercase().contains("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// A named endpoint taking part in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub name: String,
    /// Base address; the forwarded message is appended as one more path segment.
    pub base_url: String,
    pub response_format: ResponseFormat,
}

impl World {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        response_format: ResponseFormat,
    ) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            response_format,
        }
    }

    /// World whose format is read off a declared content type, e.g.
    /// `"application/json"`.
    pub fn with_content_type(
        name: impl Into<String>,
        base_url: impl Into<String>,
        content_type: &str,
    ) -> Self {
        Self::new(name, base_url, ResponseFormat::from_content_type(content_type))
    }

    pub fn json(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(name, base_url, ResponseFormat::Json)
    }

    pub fn text(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::new(name, base_url, ResponseFormat::Text)
    }

    /// Request URL for sending `message` to this world.
    ///
    /// The message is concatenated verbatim; no percent-encoding happens here.
    pub fn request_url(&self, message: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), message)
    }

    /// Extract the reply text from a response body.
    pub fn parse_reply(&self, body: String) -> Result<String> {
        match self.response_format {
            ResponseFormat::Text => Ok(body),
            ResponseFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(&body)?;
                value
                    .get(MESSAGE_FIELD)
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| WorldsError::missing_field(&self.name, MESSAGE_FIELD))
            }
        }
    }
}
