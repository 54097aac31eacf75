//! Widget runtime executor

use super::{ChatHandle, Update};
use crate::state_machine::{transition, ChatConfig, ChatState, Effect, Event};
use crate::transport::{ChatRequest, Transport};
use crate::view::{ScrollSurface, TranscriptView};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;

/// The running widget: state, transport, and view adapter behind one event
/// loop. Generic over the transport and the scroll surface so tests can run
/// it against mocks.
pub struct ChatWidget<T, V>
where
    T: Transport + 'static,
    V: ScrollSurface + 'static,
{
    config: ChatConfig,
    state: ChatState,
    transport: Arc<T>,
    view: Arc<TranscriptView<V>>,
    /// Greeting sent as an invisible exchange when the runtime starts
    greeting: Option<String>,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    update_tx: broadcast::Sender<Update>,
    /// Token to abort the in-flight exchange; present exactly while one is
    /// pending
    cancel_token: Option<CancellationToken>,
}

impl<T, V> ChatWidget<T, V>
where
    T: Transport + 'static,
    V: ScrollSurface + 'static,
{
    pub fn new(transport: T, view: TranscriptView<V>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(32);
        let (update_tx, _) = broadcast::channel(128);
        Self {
            config: ChatConfig::default(),
            state: ChatState::new(),
            transport: Arc::new(transport),
            view: Arc::new(view),
            greeting: None,
            event_rx,
            event_tx,
            update_tx,
            cancel_token: None,
        }
    }

    pub fn with_config(mut self, config: ChatConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the conversation with an automatic greeting exchange at startup.
    /// The greeting is sent to the transport but never shown as a user entry.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Handle for feeding user actions into the widget
    pub fn handle(&self) -> ChatHandle {
        ChatHandle::new(self.event_tx.clone())
    }

    /// Subscribe to transcript and phase updates
    pub fn subscribe(&self) -> broadcast::Receiver<Update> {
        self.update_tx.subscribe()
    }

    /// View adapter, for attaching a surface after the widget has started
    pub fn view(&self) -> Arc<TranscriptView<V>> {
        Arc::clone(&self.view)
    }

    pub async fn run(mut self) {
        tracing::info!("starting chat widget");

        if let Some(greeting) = self.greeting.take() {
            self.process_event(Event::Bootstrap { greeting });
        }

        while let Some(event) = self.event_rx.recv().await {
            self.process_event(event);
        }

        tracing::info!("chat widget stopped");
    }

    fn process_event(&mut self, event: Event) {
        // Pure state transition. Rejections are no-ops by contract: nothing
        // mutated, nothing surfaced.
        let result = match transition(&self.state, &self.config, event) {
            Ok(result) => result,
            Err(reason) => {
                tracing::debug!(%reason, "event ignored");
                return;
            }
        };

        let was_awaiting = self.state.is_awaiting_reply();
        let appended_from = self.state.transcript.len();
        self.state = result.new_state;

        // Effects run only after the new state is in place, so the scroll
        // signal always observes the appended entry.
        for effect in result.effects {
            self.execute_effect(effect);
        }

        if !self.state.is_awaiting_reply() {
            // The exchange reached its terminal transition; its token must
            // not outlive it.
            self.cancel_token = None;
        }

        for entry in &self.state.transcript[appended_from..] {
            let _ = self.update_tx.send(Update::Appended {
                entry: entry.clone(),
            });
        }
        if self.state.is_awaiting_reply() != was_awaiting {
            let _ = self.update_tx.send(Update::PhaseChanged {
                awaiting_reply: self.state.is_awaiting_reply(),
            });
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SendRequest {
                exchange,
                message,
                session_id,
            } => {
                let cancel_token = CancellationToken::new();
                self.cancel_token = Some(cancel_token.clone());

                let transport = Arc::clone(&self.transport);
                let event_tx = self.event_tx.clone();
                let request = ChatRequest {
                    message,
                    session_id,
                };

                tokio::spawn(async move {
                    tracing::debug!(exchange, "sending chat request");

                    tokio::select! {
                        biased;

                        () = cancel_token.cancelled() => {
                            // Cancelled: the state machine already returned
                            // to idle; the outcome is simply never produced.
                            tracing::debug!(exchange, "exchange aborted");
                        }

                        result = transport.send(&request) => {
                            let event = match result {
                                Ok(response) => Event::TransportSuccess {
                                    exchange,
                                    reply: response.reply,
                                    session_id: response.session_id,
                                },
                                Err(error) => {
                                    tracing::warn!(exchange, %error, "transport failure");
                                    Event::TransportFailure {
                                        exchange,
                                        message: error.to_string(),
                                    }
                                }
                            };
                            let _ = event_tx.send(event).await;
                        }
                    }
                });
            }

            Effect::AbortExchange { exchange } => {
                tracing::info!(exchange, "aborting pending exchange");
                if let Some(token) = self.cancel_token.take() {
                    token.cancel();
                }
            }

            Effect::ScrollToLatest => {
                self.view.scroll_to_latest();
            }
        }
    }
}
