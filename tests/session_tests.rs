//! Integration tests for the studio session
//!
//! Drives full turns against a scripted gateway and checks the transcript,
//! step and mode bookkeeping.

use async_trait::async_trait;
use prompt_studio::ai::{AssistantGateway, FALLBACK_REPLY};
use prompt_studio::catalog::{Step, StepStatus};
use prompt_studio::input::InlineImage;
use prompt_studio::types::Role;
use prompt_studio::Session;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Converse {
        text: String,
        image: Option<InlineImage>,
    },
    Preview(String),
}

/// Gateway double that records every call and answers from a script.
struct ScriptedGateway {
    reply: Option<String>,
    preview: Option<InlineImage>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedGateway {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            preview: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Simulates a conversational service that is unreachable.
    fn failing() -> Self {
        Self {
            reply: None,
            preview: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn with_preview(mut self, image: InlineImage) -> Self {
        self.preview = Some(image);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn preview_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Preview(_)))
            .count()
    }
}

#[async_trait]
impl AssistantGateway for ScriptedGateway {
    async fn converse(&self, text: &str, image: Option<&InlineImage>) -> String {
        self.calls.lock().unwrap().push(Call::Converse {
            text: text.to_string(),
            image: image.cloned(),
        });
        self.reply
            .clone()
            .unwrap_or_else(|| FALLBACK_REPLY.to_string())
    }

    async fn preview_image(&self, prompt: &str) -> Option<InlineImage> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Preview(prompt.to_string()));
        self.preview.clone()
    }
}

/// Gateway whose conversational call never resolves.
struct StalledGateway;

#[async_trait]
impl AssistantGateway for StalledGateway {
    async fn converse(&self, _text: &str, _image: Option<&InlineImage>) -> String {
        std::future::pending().await
    }

    async fn preview_image(&self, _prompt: &str) -> Option<InlineImage> {
        None
    }
}

fn reference_image() -> InlineImage {
    InlineImage::new("image/jpeg", "/9j/4AAQSkZJRg")
}

fn pending_count(session: &Session) -> usize {
    session.transcript().iter().filter(|m| m.pending).count()
}

mod step_tests {
    use super::*;

    #[tokio::test]
    async fn test_steps_advance_one_per_submission() {
        let gateway = ScriptedGateway::replying("next question");
        let mut session = Session::new();
        let mut previous = session.current_step();

        for turn in 0..9 {
            let accepted = session.submit(&gateway, &format!("answer {turn}"), None).await;
            assert!(accepted);

            let current = session.current_step();
            assert!(current >= previous);
            if previous != Step::Done {
                assert_eq!(current.index(), previous.index() + 1);
            } else {
                assert_eq!(current, Step::Done);
            }
            previous = current;
        }
        assert_eq!(session.current_step(), Step::Done);
    }

    #[tokio::test]
    async fn test_quick_option_scenario() {
        let gateway = ScriptedGateway::replying("What kind of character?");
        let mut session = Session::new();
        let option = Step::Subject.config().options[0];
        assert_eq!(option.value, "A stunning portrait of a character");

        let before = session.transcript().len();
        assert!(session.select_quick_option(&gateway, &option).await);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), before + 2);
        assert_eq!(transcript[before].role, Role::User);
        assert_eq!(transcript[before].content, option.value);
        assert_eq!(transcript[before + 1].role, Role::Assistant);
        assert_eq!(transcript[before + 1].content, "What kind of character?");
        assert_eq!(pending_count(&session), 0);
        assert_eq!(session.current_step(), Step::Details);
        assert_eq!(
            gateway.calls(),
            vec![Call::Converse {
                text: option.value.to_string(),
                image: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_progress_tracks_current_step() {
        let gateway = ScriptedGateway::replying("ok");
        let mut session = Session::new();
        session.submit(&gateway, "a lighthouse", None).await;
        session.submit(&gateway, "stormy night", None).await;

        let progress = prompt_studio::catalog::progress(session.current_step());
        assert_eq!(progress[0], (Step::Subject, StepStatus::Completed));
        assert_eq!(progress[1], (Step::Details, StepStatus::Completed));
        assert_eq!(progress[2], (Step::Style, StepStatus::Active));
        assert_eq!(progress[5], (Step::Negative, StepStatus::Upcoming));
    }
}

mod reverse_mode_tests {
    use super::*;

    #[tokio::test]
    async fn test_attach_pins_step_from_any_state() {
        let gateway = ScriptedGateway::replying("ok");
        let mut session = Session::new();
        session.submit(&gateway, "a fox", None).await;
        assert_eq!(session.current_step(), Step::Details);

        session.attach_image(reference_image());
        assert!(session.reverse_mode());
        assert_eq!(session.current_step(), Step::Done);
    }

    #[tokio::test]
    async fn test_image_question_scenario() {
        let gateway = ScriptedGateway::replying("Looks like ukiyo-e.");
        let mut session = Session::new();
        session.attach_image(reference_image());
        session.set_draft("what style is this?");

        assert!(session.send_draft(&gateway).await);

        assert!(session.reverse_mode());
        assert_eq!(session.current_step(), Step::Done);
        assert!(session.pending_image().is_none());

        let user = session
            .transcript()
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .unwrap();
        assert_eq!(user.content, "what style is this?");
        assert_eq!(user.attached_image, Some(reference_image()));

        assert_eq!(
            gateway.calls(),
            vec![Call::Converse {
                text: "what style is this?".to_string(),
                image: Some(reference_image()),
            }]
        );
    }

    #[tokio::test]
    async fn test_image_only_submission_is_accepted() {
        let gateway = ScriptedGateway::replying("A quiet harbour at dusk.");
        let mut session = Session::new();
        session.attach_file("harbour.webp", b"RIFF....WEBP");

        assert!(session.send_draft(&gateway).await);
        let user = &session.transcript()[1];
        assert!(user.content.is_empty());
        assert_eq!(
            user.attached_image.as_ref().map(|i| i.mime_type.as_str()),
            Some("image/webp")
        );
    }

    #[tokio::test]
    async fn test_quick_option_drops_pending_image() {
        let gateway = ScriptedGateway::replying("Noted.");
        let mut session = Session::new();
        session.attach_image(reference_image());

        let option = Step::Style.config().options[0];
        assert!(session.select_quick_option(&gateway, &option).await);

        assert!(session.pending_image().is_none());
        assert!(session.reverse_mode());
        assert_eq!(
            gateway.calls(),
            vec![Call::Converse {
                text: option.value.to_string(),
                image: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_clear_keeps_step() {
        let mut session = Session::new();
        session.attach_image(reference_image());
        session.clear_attached_image();
        assert!(!session.reverse_mode());
        assert_eq!(session.current_step(), Step::Done);
    }
}

mod guard_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_submission_is_noop() {
        let gateway = ScriptedGateway::replying("unused");
        let mut session = Session::new();
        let before = session.clone();

        assert!(!session.submit(&gateway, "", None).await);
        assert_eq!(session, before);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight_is_noop() {
        let gateway = ScriptedGateway::replying("done");
        let mut session = Session::new();

        let turn = session.begin_turn("first", None).unwrap();
        assert_eq!(pending_count(&session), 1);
        assert!(session.transcript().last().unwrap().pending);

        let in_flight = session.clone();
        assert!(!session.submit(&gateway, "second", None).await);
        assert_eq!(session, in_flight);

        let reply = turn.run(&gateway).await;
        session.complete_turn(turn, reply);
        assert_eq!(pending_count(&session), 0);
        assert!(!session.awaiting_response());
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_turn_releases_session() {
        let mut session = Session::new();

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            session.submit(&StalledGateway, "a castle at dawn", None),
        )
        .await;
        assert!(outcome.is_err());

        assert!(!session.awaiting_response());
        assert_eq!(pending_count(&session), 0);
        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, FALLBACK_REPLY);

        let gateway = ScriptedGateway::replying("Back again.");
        assert!(session.submit(&gateway, "try again", None).await);
        assert_eq!(session.transcript().last().unwrap().content, "Back again.");
    }

    #[tokio::test]
    async fn test_conversation_failure_yields_fallback() {
        let gateway = ScriptedGateway::failing();
        let mut session = Session::new();
        let before = session.transcript().len();

        assert!(session.submit(&gateway, "hi", None).await);

        let transcript = session.transcript();
        let assistants: Vec<_> = transcript[before..]
            .iter()
            .filter(|m| m.role == Role::Assistant)
            .collect();
        assert_eq!(assistants.len(), 1);
        assert_eq!(assistants[0].content, FALLBACK_REPLY);
        assert!(!session.awaiting_response());
        assert_eq!(pending_count(&session), 0);
    }
}

mod preview_tests {
    use super::*;

    #[tokio::test]
    async fn test_preview_requested_explicitly() {
        let gateway = ScriptedGateway::replying("Here you go.").with_preview(reference_image());
        let mut session = Session::new();

        session
            .submit(&gateway, "generate a preview please", None)
            .await;

        assert_eq!(gateway.preview_calls(), 1);
        let calls = gateway.calls();
        assert!(matches!(calls[0], Call::Converse { .. }));
        assert_eq!(calls[1], Call::Preview("generate a preview please".to_string()));

        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.content, "Here you go.");
        assert_eq!(reply.generated_image, Some(reference_image()));
    }

    #[tokio::test]
    async fn test_no_preview_for_small_talk() {
        let gateway = ScriptedGateway::replying("Fine, thanks.").with_preview(reference_image());
        let mut session = Session::new();

        session.submit(&gateway, "hello, how are you", None).await;

        assert_eq!(gateway.preview_calls(), 0);
        assert!(session.transcript().last().unwrap().generated_image.is_none());
    }

    #[tokio::test]
    async fn test_missing_preview_still_delivers_text() {
        let gateway = ScriptedGateway::replying("Text only this time.");
        let mut session = Session::new();

        session.submit(&gateway, "show me the castle", None).await;

        assert_eq!(gateway.preview_calls(), 1);
        let reply = session.transcript().last().unwrap();
        assert_eq!(reply.content, "Text only this time.");
        assert!(reply.generated_image.is_none());
    }

    #[tokio::test]
    async fn test_request_preview_appends_suffix() {
        let gateway = ScriptedGateway::replying("Rendering.");
        let mut session = Session::new();
        session.set_draft("a red dragon");

        assert!(session.request_preview(&gateway).await);

        let expected = format!("a red dragon{}", prompt_studio::input::PREVIEW_SUFFIX);
        assert_eq!(gateway.calls()[1], Call::Preview(expected.clone()));
        assert_eq!(session.transcript()[1].content, expected);
    }
}
