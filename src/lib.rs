//! Conversational widget core for the assistant chat
//!
//! One human, one remote responder, one in-flight exchange at a time. The
//! crate implements the message-exchange state machine (submission,
//! cancellation, session continuity, transcript ordering), the transcript
//! view adapter that keeps the latest entry scrolled into view, and the
//! reply text normalizer. Rendering and HTTP plumbing stay behind the
//! [`view::ScrollSurface`] and [`transport::Transport`] seams.

pub mod normalize;
pub mod runtime;
pub mod state_machine;
pub mod transport;
pub mod view;

pub use runtime::{ChatHandle, ChatWidget, Update};
pub use state_machine::{ChatConfig, ChatState, Event, Phase, Sender, TranscriptEntry};
pub use transport::{ChatRequest, ChatResponse, HttpTransport, Transport, TransportError};
pub use view::{NullSurface, ScrollSurface, TranscriptView};
