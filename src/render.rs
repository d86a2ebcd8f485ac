//! Transcript renderer: a pure projection from messages to display entries.

use crate::types::{Message, Role};
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;
use regex::Regex;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const THINKING_LABEL: &str = "AI 正在思考 (Thinking)...";
pub const PREVIEW_CAPTION: &str = "视觉参考图 (Visual Concept)";

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options.extension.autolink = true;
    options.render.unsafe_ = true;
    options
});

static BR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("break-tag pattern is valid"));

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Debug, PartialEq)]
pub enum EntryBody {
    /// Placeholder while the assistant is working.
    Thinking,
    Content {
        /// Rendered markdown; empty when the message only carries images.
        html: String,
        attached_image: Option<String>,
        generated_image: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedMessage {
    pub id: u64,
    pub role: Role,
    pub body: EntryBody,
    pub timestamp: Option<String>,
    /// Raw text for copy actions.
    pub source: String,
}

impl RenderedMessage {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

pub fn render_transcript(messages: &[Message]) -> Vec<RenderedMessage> {
    messages.iter().filter_map(render_message).collect()
}

/// `None` for system messages and for messages with nothing to show.
pub fn render_message(message: &Message) -> Option<RenderedMessage> {
    if message.role == Role::System || !message.is_renderable() {
        return None;
    }

    let body = if message.pending {
        EntryBody::Thinking
    } else {
        let cleaned = strip_line_breaks(&message.content);
        let html = if cleaned.trim().is_empty() {
            String::new()
        } else {
            markdown_to_html(&cleaned)
        };
        EntryBody::Content {
            html,
            attached_image: message.attached_image.as_ref().map(|image| image.data_uri()),
            generated_image: message
                .generated_image
                .as_ref()
                .map(|image| image.data_uri()),
        }
    };

    Some(RenderedMessage {
        id: message.id,
        role: message.role,
        body,
        timestamp: format_message_timestamp(message.created_at),
        source: message.content.clone(),
    })
}

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Replaces `<br>`, `<br/>` and `<br />` (any case) with a single space.
pub fn strip_line_breaks(content: &str) -> String {
    BR_TAG.replace_all(content, " ").into_owned()
}

pub fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InlineImage;
    use time::macros::datetime;

    #[test]
    fn strips_break_tags() {
        assert_eq!(strip_line_breaks("a<br>b<BR/>c<br />d"), "a b c d");
        assert_eq!(strip_line_breaks("<brand> stays"), "<brand> stays");
        assert_eq!(strip_line_breaks("no tags"), "no tags");
        assert_eq!(strip_line_breaks("风格<br>写实"), "风格 写实");
        assert_eq!(strip_line_breaks("a<BR />b"), "a b");
        assert_eq!(strip_line_breaks("<br / >"), "<br / >");
    }

    #[test]
    fn pending_renders_as_thinking() {
        let rendered = render_message(&Message::placeholder(7)).unwrap();
        assert_eq!(rendered.body, EntryBody::Thinking);
        assert_eq!(rendered.id, 7);
    }

    #[test]
    fn markdown_becomes_html() {
        let rendered = render_message(&Message::assistant(1, "**bold** move", None)).unwrap();
        match rendered.body {
            EntryBody::Content { html, .. } => assert!(html.contains("<strong>bold</strong>")),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn image_only_message_is_rendered() {
        let image = InlineImage::new("image/png", "AAAA");
        let rendered = render_message(&Message::user(2, "", Some(image))).unwrap();
        match &rendered.body {
            EntryBody::Content {
                html,
                attached_image,
                generated_image,
            } => {
                assert!(html.is_empty());
                assert_eq!(attached_image.as_deref(), Some("data:image/png;base64,AAAA"));
                assert!(generated_image.is_none());
            }
            other => panic!("unexpected body {other:?}"),
        }
        assert!(rendered.is_user());
    }

    #[test]
    fn empty_messages_are_skipped() {
        let empty = Message::assistant(3, "", None);
        let mut system = Message::assistant(4, "hidden", None);
        system.role = Role::System;
        let shown = Message::assistant(5, "shown", None);
        let rendered = render_transcript(&[empty, system, shown]);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].id, 5);
    }

    #[test]
    fn formats_timestamp_in_twelve_hour_clock() {
        let formatted = format_message_timestamp(Some(datetime!(2024-05-01 13:05 UTC))).unwrap();
        assert!(formatted.ends_with("AM") || formatted.ends_with("PM"));
        assert_eq!(formatted.len(), "01:05 PM".len());
        assert!(format_message_timestamp(None).is_none());
    }
}
