//! Conversation state types

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the conversation. Immutable once appended; the transcript is
/// append-only and insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub sender: Sender,
    pub text: String,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Identifies one exchange (user message + eventual reply). Monotonically
/// increasing; transport outcomes carry the id of the exchange they belong
/// to, and outcomes for anything other than the in-flight exchange are
/// discarded.
pub type ExchangeId = u64;

/// Whether a reply is currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Phase {
    /// Ready for user input, no exchange in flight
    #[default]
    Idle,

    /// One exchange in flight, waiting on the transport
    AwaitingReply { exchange: ExchangeId },
}

/// Full widget state. Owned and mutated by the runtime task only; the pure
/// transition function consumes a reference and returns the successor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatState {
    /// Append-only message log. Entries are never edited, reordered, or
    /// removed; a failed exchange appends an error entry rather than
    /// dropping the user's message.
    pub transcript: Vec<TranscriptEntry>,

    /// The not-yet-submitted composer text. Cleared only when its content is
    /// accepted into the transcript as a user entry.
    pub draft: String,

    /// Server-assigned session identifier. Empty until the first successful
    /// exchange, thereafter replaced wholesale by the value the server
    /// returned on the previous exchange.
    pub session_id: String,

    pub phase: Phase,

    /// Next exchange id to hand out
    pub(crate) next_exchange: ExchangeId,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        matches!(self.phase, Phase::AwaitingReply { .. })
    }

    /// Allocate an exchange id and enter `AwaitingReply`
    pub(crate) fn begin_exchange(&mut self) -> ExchangeId {
        let exchange = self.next_exchange;
        self.next_exchange += 1;
        self.phase = Phase::AwaitingReply { exchange };
        exchange
    }
}

/// Fixed BOT text used when the transport succeeds but the reply is empty.
/// Deliberately distinct from the transport failure text.
pub const EMPTY_REPLY_FALLBACK: &str = "Sorry, I could not get a response. Please try again.";

/// Fixed BOT text appended when the transport fails
pub const TRANSPORT_FAILURE_REPLY: &str = "Something went wrong. Please try again later.";

/// Immutable widget configuration
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Shown when a successful exchange carries an empty reply
    pub empty_reply_fallback: String,
    /// Shown when the transport fails; the underlying error is logged, never
    /// rendered
    pub failure_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            empty_reply_fallback: EMPTY_REPLY_FALLBACK.to_string(),
            failure_reply: TRANSPORT_FAILURE_REPLY.to_string(),
        }
    }
}
