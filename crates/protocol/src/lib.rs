//! Wire data model for the local media server.
//!
//! Everything a tool call can produce travels as a [`MediaBlock`]: a kind tag, a MIME type and
//! the base64-encoded payload. Failures travel as an [`ErrorEnvelope`] attached to the protocol
//! error.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ERROR_UNKNOWN_TOOL: &str = "unknown_tool";
pub const ERROR_NOT_FOUND: &str = "not_found";
pub const ERROR_EMPTY_RESULT: &str = "empty_result";
pub const ERROR_TIMEOUT: &str = "timeout";
pub const ERROR_IO: &str = "io";
pub const ERROR_DUPLICATE_TOOL: &str = "duplicate_tool";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Audio,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One encoded media artifact.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaBlock {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub mime_type: String,
    /// Standard base64 (with padding) of the raw file bytes.
    pub data: String,
}

impl MediaBlock {
    pub fn encode(kind: MediaKind, mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            kind,
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.data.as_bytes())
    }
}

/// Non-empty, ordered result of a successful resolution.
///
/// There is no way to build an empty value: a resolution that finds nothing is an error, not an
/// empty success.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ResolvedMedia {
    content: Vec<MediaBlock>,
}

impl ResolvedMedia {
    pub fn single(block: MediaBlock) -> Self {
        Self {
            content: vec![block],
        }
    }

    /// Returns `None` when `blocks` is empty.
    pub fn from_blocks(blocks: Vec<MediaBlock>) -> Option<Self> {
        if blocks.is_empty() {
            return None;
        }
        Some(Self { content: blocks })
    }

    pub fn blocks(&self) -> &[MediaBlock] {
        &self.content
    }

    pub fn into_blocks(self) -> Vec<MediaBlock> {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
