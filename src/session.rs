//! Session orchestrator.
//!
//! Owns the wizard step, reverse mode, transcript and in-flight flag, and is
//! the only thing that mutates them. A turn runs in three phases so a UI can
//! render the pending placeholder while the gateway works:
//!
//! 1. [`Session::begin_turn`] validates input and records the user message,
//! 2. [`PendingTurn::run`] performs the gateway calls,
//! 3. [`Session::complete_turn`] swaps the placeholder for the reply.
//!
//! [`Session::submit`] runs all three back to back. A turn that never reaches
//! phase 3 (the future is dropped, or the gateway panics) is closed by
//! [`Session::abandon_turn`] so the session never stays busy.

use crate::ai::{AssistantGateway, FALLBACK_REPLY, wants_preview};
use crate::catalog::{GREETING, QuickOption, Step};
use crate::input::{self, InlineImage};
use crate::types::Message;
use anyhow::Result;
use std::path::Path;

const GUIDED_PLACEHOLDER: &str = "描述您的创意，或使用左侧菜单...";
const REVERSE_PLACEHOLDER: &str = "关于这张图您想了解什么？";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    current_step: Step,
    reverse_mode: bool,
    transcript: Vec<Message>,
    awaiting_response: bool,
    draft: String,
    pending_image: Option<InlineImage>,
    next_id: u64,
}

/// An accepted submission waiting on the gateway.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTurn {
    text: String,
    image: Option<InlineImage>,
    placeholder_id: u64,
}

/// What the gateway produced for one turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReply {
    pub text: String,
    pub preview: Option<InlineImage>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let mut session = Self {
            current_step: Step::Subject,
            reverse_mode: false,
            transcript: Vec::new(),
            awaiting_response: false,
            draft: String::new(),
            pending_image: None,
            next_id: 1,
        };
        let id = session.allocate_id();
        session.transcript.push(Message::assistant(id, GREETING, None));
        session
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn reverse_mode(&self) -> bool {
        self.reverse_mode
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn pending_image(&self) -> Option<&InlineImage> {
        self.pending_image.as_ref()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn input_placeholder(&self) -> &'static str {
        if self.reverse_mode {
            REVERSE_PLACEHOLDER
        } else {
            GUIDED_PLACEHOLDER
        }
    }

    /// Whether a submission of `text` with the given image would be accepted.
    pub fn can_submit(&self, text: &str, has_image: bool) -> bool {
        !self.awaiting_response && (!text.trim().is_empty() || has_image)
    }

    /// Stores the image for the next submission and leaves the guided flow:
    /// reverse mode on, step pinned to `Done`.
    pub fn attach_image(&mut self, image: InlineImage) {
        tracing::info!(mime = %image.mime_type, "reference image attached; entering reverse mode");
        self.pending_image = Some(image);
        self.reverse_mode = true;
        self.current_step = Step::Done;
    }

    pub fn attach_file(&mut self, file_name: &str, bytes: &[u8]) {
        self.attach_image(InlineImage::from_file(file_name, bytes));
    }

    pub fn attach_path(&mut self, path: &Path) -> Result<()> {
        let image = InlineImage::from_path(path)?;
        self.attach_image(image);
        Ok(())
    }

    /// Drops the pending image and leaves reverse mode. The step stays where it is.
    pub fn clear_attached_image(&mut self) {
        self.pending_image = None;
        self.reverse_mode = false;
    }

    /// Records the user message and the pending placeholder.
    ///
    /// Returns `None` (and changes nothing) for empty input without an image,
    /// or while another turn is in flight.
    pub fn begin_turn(&mut self, text: &str, image: Option<InlineImage>) -> Option<PendingTurn> {
        if !self.can_submit(text, image.is_some()) {
            tracing::debug!(
                awaiting = self.awaiting_response,
                "submission ignored"
            );
            return None;
        }

        let id = self.allocate_id();
        self.transcript.push(Message::user(id, text, image.clone()));
        self.draft.clear();
        self.pending_image = None;
        self.awaiting_response = true;

        // The first guided turn only counts when it carries text.
        if !self.reverse_mode
            && self.current_step < Step::Done
            && (self.current_step != Step::Subject || !text.is_empty())
        {
            self.current_step = self.current_step.next();
        }

        let placeholder_id = self.allocate_id();
        self.transcript.push(Message::placeholder(placeholder_id));
        tracing::debug!(step = ?self.current_step, with_image = image.is_some(), "turn started");

        Some(PendingTurn {
            text: text.to_string(),
            image,
            placeholder_id,
        })
    }

    /// Replaces the turn's placeholder with the reply and clears the in-flight flag.
    pub fn complete_turn(&mut self, turn: PendingTurn, reply: TurnReply) {
        self.transcript
            .retain(|message| message.id != turn.placeholder_id);
        let id = self.allocate_id();
        self.transcript
            .push(Message::assistant(id, reply.text, reply.preview));
        self.awaiting_response = false;
    }

    /// Closes a turn whose reply will never arrive, answering with the fallback text.
    pub fn abandon_turn(&mut self, turn: PendingTurn) {
        tracing::warn!(placeholder = turn.placeholder_id, "turn abandoned before completion");
        self.complete_turn(
            turn,
            TurnReply {
                text: FALLBACK_REPLY.to_string(),
                preview: None,
            },
        );
    }

    /// Runs a full turn against `gateway`. Returns `false` when the submission
    /// was rejected.
    pub async fn submit<G>(&mut self, gateway: &G, text: &str, image: Option<InlineImage>) -> bool
    where
        G: AssistantGateway + ?Sized,
    {
        let Some(turn) = self.begin_turn(text, image) else {
            return false;
        };
        let pending = turn.clone();
        let guard = TurnGuard {
            session: self,
            turn: Some(turn),
        };
        let reply = pending.run(gateway).await;
        guard.finish(reply);
        true
    }

    /// Submits the composer's draft together with the pending image.
    pub async fn send_draft<G>(&mut self, gateway: &G) -> bool
    where
        G: AssistantGateway + ?Sized,
    {
        let text = self.draft.clone();
        let image = self.pending_image.clone();
        self.submit(gateway, &text, image).await
    }

    /// Submits the draft with an explicit request for a preview image.
    pub async fn request_preview<G>(&mut self, gateway: &G) -> bool
    where
        G: AssistantGateway + ?Sized,
    {
        let text = input::preview_request(&self.draft);
        let image = self.pending_image.clone();
        self.submit(gateway, &text, image).await
    }

    pub async fn select_quick_option<G>(&mut self, gateway: &G, option: &QuickOption) -> bool
    where
        G: AssistantGateway + ?Sized,
    {
        self.submit(gateway, option.value, None).await
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Completes the held turn on drop unless [`TurnGuard::finish`] ran first.
struct TurnGuard<'a> {
    session: &'a mut Session,
    turn: Option<PendingTurn>,
}

impl TurnGuard<'_> {
    fn finish(mut self, reply: TurnReply) {
        if let Some(turn) = self.turn.take() {
            self.session.complete_turn(turn, reply);
        }
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if let Some(turn) = self.turn.take() {
            self.session.abandon_turn(turn);
        }
    }
}

impl PendingTurn {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image(&self) -> Option<&InlineImage> {
        self.image.as_ref()
    }

    pub fn wants_preview(&self) -> bool {
        wants_preview(&self.text)
    }

    /// Conversational call first; the preview call only runs after it returns.
    pub async fn run<G>(&self, gateway: &G) -> TurnReply
    where
        G: AssistantGateway + ?Sized,
    {
        let text = gateway.converse(&self.text, self.image.as_ref()).await;
        let preview = if self.wants_preview() {
            gateway.preview_image(&self.text).await
        } else {
            None
        };
        TurnReply { text, preview }
    }
}
