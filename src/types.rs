use crate::input::InlineImage;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Instructions handed to the model out-of-band. Never appears in a transcript.
    System,
}

/// One turn in the studio transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub attached_image: Option<InlineImage>,
    pub generated_image: Option<InlineImage>,
    pub pending: bool,
    pub created_at: Option<OffsetDateTime>,
}

impl Message {
    pub fn user(id: u64, content: impl Into<String>, attached_image: Option<InlineImage>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            attached_image,
            generated_image: None,
            pending: false,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn assistant(
        id: u64,
        content: impl Into<String>,
        generated_image: Option<InlineImage>,
    ) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: content.into(),
            attached_image: None,
            generated_image,
            pending: false,
            created_at: Some(OffsetDateTime::now_utc()),
        }
    }

    pub fn placeholder(id: u64) -> Self {
        Self {
            pending: true,
            ..Self::assistant(id, String::new(), None)
        }
    }

    /// Whether the message has anything a renderer can show.
    pub fn is_renderable(&self) -> bool {
        self.pending
            || !self.content.is_empty()
            || self.attached_image.is_some()
            || self.generated_image.is_some()
    }
}
