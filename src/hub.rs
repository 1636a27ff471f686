use crate::models::ServerEvent;
use std::collections::HashMap;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

pub type SessionId = u64;
pub type Outbox = mpsc::UnboundedSender<ServerEvent>;

/// Set of connected sessions, each reached through its outbound queue.
#[derive(Default)]
pub struct Hub {
    sessions: Mutex<HashMap<SessionId, Outbox>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a session; an id that is already registered keeps its queue.
    pub async fn register(&self, id: SessionId, outbox: Outbox) {
        self.sessions.lock().await.entry(id).or_insert(outbox);
    }

    pub async fn unregister(&self, id: SessionId) {
        self.sessions.lock().await.remove(&id);
    }

    /// Queues `event` for every registered session and returns how many
    /// accepted it. Sessions whose queue is closed are skipped.
    pub async fn broadcast(&self, event: &ServerEvent) -> usize {
        let sessions = self.sessions.lock().await;
        let mut delivered = 0;
        for (id, outbox) in sessions.iter() {
            if outbox.send(event.clone()).is_ok() {
                delivered += 1;
            } else {
                debug!(session = *id, "dropping broadcast for closed session");
            }
        }
        delivered
    }

    pub async fn send_to(&self, id: SessionId, event: ServerEvent) -> bool {
        match self.sessions.lock().await.get(&id) {
            Some(outbox) => outbox.send(event).is_ok(),
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
