//! Events that can occur in a conversation

use super::state::ExchangeId;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    /// The user edited the composer text
    DraftEdited { text: String },
    /// The user submitted a message
    Submit { text: String },
    /// The user hit the single primary control: cancel while a reply is
    /// pending, submit the draft otherwise
    PrimaryAction,
    /// The user cancelled the pending reply
    Cancel,
    /// Seed the conversation with an invisible greeting exchange. Fired once
    /// at widget start; skips the empty-input guard and appends no user entry.
    Bootstrap { greeting: String },

    // Transport events
    TransportSuccess {
        exchange: ExchangeId,
        reply: String,
        session_id: String,
    },
    TransportFailure {
        exchange: ExchangeId,
        message: String,
    },
}
