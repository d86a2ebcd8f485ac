use crate::input::InlineImage;
use async_trait::async_trait;

/// Shown in place of a reply when the conversational service cannot be reached.
pub const FALLBACK_REPLY: &str =
    "I encountered an error connecting to the service. Please try again.";

/// Substrings that mark an explicit request for a visual preview.
const PREVIEW_MARKERS: &[&str] = &["generate", "preview", "image", "show me", "预览", "生成"];

/// The two model calls the studio depends on.
///
/// Implementations never fail: conversational errors come back as
/// [`FALLBACK_REPLY`], preview errors as `None`.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Send one user turn to the running conversation and return the reply text.
    async fn converse(&self, text: &str, image: Option<&InlineImage>) -> String;

    /// Render a single square JPEG preview for `prompt`.
    async fn preview_image(&self, prompt: &str) -> Option<InlineImage>;
}

/// Heuristic substring match on the case-folded text. Expect false positives
/// (any mention of "image") and false negatives (paraphrases).
pub fn wants_preview(text: &str) -> bool {
    let lowered = text.to_lowercase();
    PREVIEW_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response carried no {0}")]
    Empty(&'static str),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_explicit_preview_requests() {
        assert!(wants_preview("generate a preview please"));
        assert!(wants_preview("Show Me what it looks like"));
        assert!(wants_preview("a dragon (请为此生成预览图)"));
        assert!(wants_preview("给我预览"));
    }

    #[test]
    fn ignores_ordinary_chat() {
        assert!(!wants_preview("hello, how are you"));
        assert!(!wants_preview("A stunning portrait of a character"));
        assert!(!wants_preview(""));
    }
}
