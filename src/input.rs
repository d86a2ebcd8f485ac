//! Input capture: turns picked files into inline image data and builds
//! the composer's preview requests.

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs;
use std::path::Path;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Appended to the draft by the composer's "预览" action.
pub const PREVIEW_SUFFIX: &str = " (请为此生成预览图)";

/// Drafts must be longer than this (in characters) before the preview action is offered.
pub const PREVIEW_MIN_DRAFT_CHARS: usize = 5;

/// Base64 image payload carried alongside text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, BASE64.encode(bytes))
    }

    /// Encode a picked file. The mime type comes from the file name's extension.
    pub fn from_file(file_name: &str, bytes: &[u8]) -> Self {
        let mime = mime_for_name(file_name).unwrap_or(DEFAULT_IMAGE_MIME);
        Self::from_bytes(mime, bytes)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("failed reading {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        Ok(Self::from_file(name, &bytes))
    }

    /// Accepts either a `data:<mime>;base64,<payload>` URI or a bare base64 payload.
    pub fn from_data_uri(uri: &str) -> Self {
        let mime = uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(mime, _)| mime)
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME);
        Self::new(mime, strip_data_uri_prefix(uri))
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// The raw base64 payload, never prefixed.
    pub fn payload(&self) -> &str {
        strip_data_uri_prefix(&self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(self.payload().as_bytes())
            .context("inline image base64 decode failed")
    }
}

/// Everything after the first comma, or the whole string when there is none.
pub fn strip_data_uri_prefix(value: &str) -> &str {
    match value.split_once(',') {
        Some((_, payload)) if !payload.is_empty() => payload,
        _ => value,
    }
}

pub fn mime_for_name(name: &str) -> Option<&'static str> {
    let ext = Path::new(name)
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

pub fn offers_preview(draft: &str) -> bool {
    draft.chars().count() > PREVIEW_MIN_DRAFT_CHARS
}

pub fn preview_request(draft: &str) -> String {
    format!("{draft}{PREVIEW_SUFFIX}")
}
