use crate::state::AppState;
use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use tracing::warn;

/// Drives one WebSocket connection from hydration until the socket closes.
pub async fn run_session(socket: WebSocket, state: AppState) {
    let (id, mut outbox) = state.connect().await;
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = outbox.recv().await {
            let json = match serde_json::to_string(&event) {
                Ok(json) => json,
                Err(err) => {
                    warn!(session = id, "failed to encode event: {err}");
                    continue;
                }
            };
            if sender.send(Message::Text(json)).await.is_err() {
                break;
            }
        }
    });

    // Inbound frames are handled inline so a click is never cut short by
    // the peer going away.
    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => state.handle_text(id, &text).await,
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    warn!(session = id, "websocket error: {err}");
                    break;
                }
            },
            _ = &mut send_task => break,
        }
    }

    state.disconnect(id).await;
    send_task.abort();
}
