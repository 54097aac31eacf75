//! Effects produced by state transitions

use super::state::ExchangeId;

/// Effects to be executed after a state transition. All I/O lives here; the
/// transition function itself never performs any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Invoke the transport with the message and the session id captured at
    /// submit time
    SendRequest {
        exchange: ExchangeId,
        message: String,
        session_id: String,
    },

    /// Release the cancellation handle for the in-flight exchange
    AbortExchange { exchange: ExchangeId },

    /// Pin the transcript view to its latest entry. Emitted after every
    /// transcript append, never otherwise.
    ScrollToLatest,
}
