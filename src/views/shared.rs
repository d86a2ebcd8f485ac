use crate::ai::AssistantGateway;
use crate::input::{self, InlineImage};
use crate::session::{PendingTurn, Session};
use dioxus::prelude::*;
use std::sync::Arc;

/// Gateway shared through the component tree via context.
#[derive(Clone)]
pub struct GatewayHandle(pub Arc<dyn AssistantGateway>);

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Starts a turn and finishes it in a spawned task. Rejected submissions do nothing.
pub fn dispatch_turn(
    mut session: Signal<Session>,
    gateway: GatewayHandle,
    text: String,
    image: Option<InlineImage>,
) {
    let Some(turn) = session.with_mut(|s| s.begin_turn(&text, image)) else {
        return;
    };
    spawn(async move {
        let pending = turn.clone();
        let mut guard = SpawnedTurn {
            session,
            turn: Some(turn),
        };
        let reply = pending.run(gateway.0.as_ref()).await;
        if let Some(turn) = guard.turn.take() {
            session.with_mut(|s| s.complete_turn(turn, reply));
        }
    });
}

/// Closes the turn with the fallback reply if the task is dropped mid-flight.
struct SpawnedTurn {
    session: Signal<Session>,
    turn: Option<PendingTurn>,
}

impl Drop for SpawnedTurn {
    fn drop(&mut self) {
        let Some(turn) = self.turn.take() else {
            return;
        };
        // The signal may already be gone when the whole scope unmounts.
        if let Ok(mut session) = self.session.try_write() {
            session.abandon_turn(turn);
        }
    }
}

/// Sends the composer's draft and pending image.
pub fn send_draft(session: Signal<Session>, gateway: GatewayHandle) {
    let (text, image) = {
        let current = session.read();
        (current.draft().to_string(), current.pending_image().cloned())
    };
    dispatch_turn(session, gateway, text, image);
}

/// Sends the draft with the preview-request suffix.
pub fn send_preview_request(session: Signal<Session>, gateway: GatewayHandle) {
    let (text, image) = {
        let current = session.read();
        (
            input::preview_request(current.draft()),
            current.pending_image().cloned(),
        )
    };
    dispatch_turn(session, gateway, text, image);
}
