//! Runtime for executing the widget
//!
//! Owns the single logical thread of mutation: one tokio task receives
//! events over an mpsc channel, runs the pure transition, and executes the
//! resulting effects. The transport call is the only suspension point and
//! runs as a spawned task racing completion against a cancellation token.

mod executor;


pub use executor::ChatWidget;

use crate::state_machine::{Event, TranscriptEntry};
use tokio::sync::mpsc;

/// Updates streamed to the UI layer. `Appended` is emitted after the entry
/// is observable in state, and a scroll signal has already been delivered to
/// the view adapter by then.
#[derive(Debug, Clone)]
pub enum Update {
    /// A transcript entry was appended
    Appended { entry: TranscriptEntry },
    /// The widget entered or left the awaiting-reply phase
    PhaseChanged { awaiting_reply: bool },
}

/// Handle for feeding user actions into a running widget. Cloneable; all
/// methods are fire-and-forget, and anything the state machine rejects
/// (busy submissions, empty drafts, cancel with nothing pending) is silently
/// dropped on the runtime side.
#[derive(Clone)]
pub struct ChatHandle {
    event_tx: mpsc::Sender<Event>,
}

impl ChatHandle {
    pub(crate) fn new(event_tx: mpsc::Sender<Event>) -> Self {
        Self { event_tx }
    }

    /// Submit a message
    pub async fn submit(&self, text: impl Into<String>) {
        self.send(Event::Submit { text: text.into() }).await;
    }

    /// Cancel the pending reply
    pub async fn cancel(&self) {
        self.send(Event::Cancel).await;
    }

    /// The single primary control: cancel while a reply is pending,
    /// otherwise submit the current draft.
    pub async fn toggle(&self) {
        self.send(Event::PrimaryAction).await;
    }

    /// Replace the composer draft
    pub async fn edit_draft(&self, text: impl Into<String>) {
        self.send(Event::DraftEdited { text: text.into() }).await;
    }

    async fn send(&self, event: Event) {
        if self.event_tx.send(event).await.is_err() {
            tracing::debug!("widget runtime has shut down, dropping event");
        }
    }
}
