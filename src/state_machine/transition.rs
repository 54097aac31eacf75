//! Pure state transition function
//!
//! Given the same state, config, and event, `transition` always produces the
//! same successor state and effects, with no I/O. Rejections are returned as
//! `TransitionError`; the runtime treats them as silent no-ops, so a rejected
//! event never mutates state and never reaches the user.

use super::state::{ChatConfig, ChatState, Phase, TranscriptEntry};
use super::{Effect, Event};
use crate::normalize::normalize_reply;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Reasons an event is ignored. None of these are surfaced to the user: a
/// rejected submission, a cancel with nothing pending, and a stale transport
/// outcome all leave the state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a reply is already pending, cancel it first")]
    ReplyPending,
    #[error("nothing to send")]
    EmptyDraft,
    #[error("no exchange in flight")]
    NothingPending,
    #[error("stale outcome for exchange {0}")]
    StaleOutcome(u64),
}

/// Pure transition function
pub fn transition(
    state: &ChatState,
    config: &ChatConfig,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (&state.phase, event) {
        // ============================================================
        // Composer
        // ============================================================
        (_, Event::DraftEdited { text }) => {
            let mut next = state.clone();
            next.draft = text;
            Ok(TransitionResult::new(next))
        }

        // ============================================================
        // Submission
        // ============================================================
        (Phase::Idle, Event::Submit { text }) => {
            let message = text.trim();
            if message.is_empty() {
                return Err(TransitionError::EmptyDraft);
            }

            let mut next = state.clone();
            next.transcript.push(TranscriptEntry::user(message));
            next.draft.clear();
            let exchange = next.begin_exchange();
            let session_id = next.session_id.clone();

            Ok(TransitionResult::new(next)
                .with_effect(Effect::ScrollToLatest)
                .with_effect(Effect::SendRequest {
                    exchange,
                    message: message.to_string(),
                    session_id,
                }))
        }

        (Phase::AwaitingReply { .. }, Event::Submit { .. }) => Err(TransitionError::ReplyPending),

        // The greeting exchange: no visible user entry, no empty-input guard
        (Phase::Idle, Event::Bootstrap { greeting }) => {
            let mut next = state.clone();
            let exchange = next.begin_exchange();
            let session_id = next.session_id.clone();

            Ok(TransitionResult::new(next).with_effect(Effect::SendRequest {
                exchange,
                message: greeting,
                session_id,
            }))
        }

        (Phase::AwaitingReply { .. }, Event::Bootstrap { .. }) => {
            Err(TransitionError::ReplyPending)
        }

        // ============================================================
        // The single primary control
        // ============================================================
        (Phase::AwaitingReply { .. }, Event::PrimaryAction) => {
            transition(state, config, Event::Cancel)
        }
        (Phase::Idle, Event::PrimaryAction) => transition(
            state,
            config,
            Event::Submit {
                text: state.draft.clone(),
            },
        ),

        // ============================================================
        // Cancellation
        // ============================================================
        //
        // Synchronous: the state returns to Idle immediately, the abort
        // effect releases the transport handle, and no transcript entry is
        // appended. The user's message already in the transcript stands.
        (Phase::AwaitingReply { exchange }, Event::Cancel) => {
            let exchange = *exchange;
            let mut next = state.clone();
            next.phase = Phase::Idle;
            Ok(TransitionResult::new(next).with_effect(Effect::AbortExchange { exchange }))
        }

        (Phase::Idle, Event::Cancel) => Err(TransitionError::NothingPending),

        // ============================================================
        // Transport outcomes
        // ============================================================
        //
        // An outcome is applied only when it belongs to the exchange still
        // in flight; anything else arrived after a cancel and is discarded.
        // This gives each exchange at most one terminal transition.
        (
            Phase::AwaitingReply { exchange: pending },
            Event::TransportSuccess {
                exchange,
                reply,
                session_id,
            },
        ) if *pending == exchange => {
            let text = if reply.trim().is_empty() {
                config.empty_reply_fallback.clone()
            } else {
                normalize_reply(&reply)
            };

            let mut next = state.clone();
            next.transcript.push(TranscriptEntry::bot(text));
            next.session_id = session_id;
            next.phase = Phase::Idle;
            Ok(TransitionResult::new(next).with_effect(Effect::ScrollToLatest))
        }

        (
            Phase::AwaitingReply { exchange: pending },
            Event::TransportFailure { exchange, .. },
        ) if *pending == exchange => {
            let mut next = state.clone();
            next.transcript
                .push(TranscriptEntry::bot(config.failure_reply.clone()));
            next.phase = Phase::Idle;
            Ok(TransitionResult::new(next).with_effect(Effect::ScrollToLatest))
        }

        (_, Event::TransportSuccess { exchange, .. })
        | (_, Event::TransportFailure { exchange, .. }) => {
            Err(TransitionError::StaleOutcome(exchange))
        }
    }
}
