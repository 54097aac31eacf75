//! Terminal demo for the chat widget
//!
//! Wires the widget to a live chat endpoint and a stdin composer. Each line
//! you type is submitted as a message; replies print as they land.

use medichat::{ChatWidget, HttpTransport, NullSurface, Sender, TranscriptView, Update};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medichat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let endpoint = std::env::var("MEDICHAT_URL")
        .unwrap_or_else(|_| "http://localhost:8000/chat/".to_string());
    tracing::info!(%endpoint, "connecting chat widget");

    let transport = HttpTransport::new(endpoint)?;
    let view: TranscriptView<NullSurface> = TranscriptView::detached();
    let widget = ChatWidget::new(transport, view).with_greeting("Hello");

    let handle = widget.handle();
    let mut updates = widget.subscribe();
    tokio::spawn(widget.run());

    tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            if let Update::Appended { entry } = update {
                let who = match entry.sender {
                    Sender::User => "you",
                    Sender::Bot => "bot",
                };
                println!("{who}: {}", entry.text);
            }
        }
    });

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle.submit(line).await;
    }

    Ok(())
}
