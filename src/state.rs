use crate::counter::apply_click;
use crate::hub::{Hub, SessionId};
use crate::models::{ClientEvent, CounterState, ServerEvent};
use crate::storage::save_state;
use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info};

/// Service-owned handle shared by sessions, the ticker and HTTP handlers.
///
/// Every operation that reads or mutates the counter runs while holding the
/// counter lock, so clicks, hydration and flushes are applied one at a time
/// and broadcasts leave in mutation order.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<CounterState>>,
    pub hub: Arc<Hub>,
    next_session: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: CounterState) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
            hub: Arc::new(Hub::new()),
            next_session: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Registers a new session and queues its `initialData` before any
    /// later update can reach it.
    pub async fn connect(&self) -> (SessionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let id = self.next_session.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        let data = self.data.lock().await;
        let _ = tx.send(ServerEvent::InitialData(data.snapshot()));
        self.hub.register(id, tx).await;
        drop(data);

        info!(session = id, "session connected");
        (id, rx)
    }

    pub async fn disconnect(&self, id: SessionId) {
        self.hub.unregister(id).await;
        info!(session = id, "session closed");
    }

    pub async fn handle_event(&self, id: SessionId, event: ClientEvent) {
        match event {
            ClientEvent::Click => self.click().await,
            ClientEvent::RequestDailyStats => {
                let data = self.data.lock().await;
                let stats = data.daily_stats.clone();
                drop(data);
                self.hub
                    .send_to(id, ServerEvent::DailyStatsResponse(stats))
                    .await;
            }
        }
    }

    /// Parses one text frame; anything that is not a known event is dropped.
    pub async fn handle_text(&self, id: SessionId, text: &str) {
        match serde_json::from_str::<ClientEvent>(text) {
            Ok(event) => self.handle_event(id, event).await,
            Err(err) => debug!(session = id, "ignoring client frame: {err}"),
        }
    }

    /// Mutate, persist, broadcast as one critical section.
    pub async fn click(&self) {
        let mut data = self.data.lock().await;
        apply_click(&mut data);
        save_state(&self.data_path, &data).await;
        self.hub
            .broadcast(&ServerEvent::ScoreUpdate(data.snapshot()))
            .await;
    }

    pub async fn flush(&self) -> bool {
        let data = self.data.lock().await;
        save_state(&self.data_path, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreSnapshot;
    use crate::storage::load_state;
    use std::collections::BTreeMap;

    fn fresh_state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(dir.path().join("clickData.json"), CounterState::zero(100))
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<ServerEvent>) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn connect_hydrates_with_current_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        let (_, mut rx) = state.connect().await;

        assert_eq!(
            drain(&mut rx),
            vec![ServerEvent::InitialData(ScoreSnapshot {
                global_score: 0,
                last_updated: 100,
            })]
        );
    }

    #[tokio::test]
    async fn click_fans_out_identical_updates() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        let mut receivers = Vec::new();
        for _ in 0..3 {
            let (_, mut rx) = state.connect().await;
            drain(&mut rx);
            receivers.push(rx);
        }
        let (gone, mut gone_rx) = state.connect().await;
        drain(&mut gone_rx);
        state.disconnect(gone).await;

        assert_eq!(state.hub.len().await, 3);
        state.handle_event(1, ClientEvent::Click).await;

        let expected = state.data.lock().await.snapshot();
        assert_eq!(expected.global_score, 1);
        for rx in receivers.iter_mut() {
            assert_eq!(drain(rx), vec![ServerEvent::ScoreUpdate(expected)]);
        }
        assert!(drain(&mut gone_rx).is_empty());
    }

    #[tokio::test]
    async fn click_persists_before_returning() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        state.click().await;
        state.click().await;

        let stored = load_state(&state.data_path).await;
        assert_eq!(stored.global_score, 2);
        assert_eq!(stored.daily_stats.values().sum::<u64>(), 2);
        assert_eq!(stored, *state.data.lock().await);
    }

    #[tokio::test]
    async fn daily_stats_reply_goes_only_to_requester() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        let (a, mut a_rx) = state.connect().await;
        let (_, mut b_rx) = state.connect().await;
        drain(&mut a_rx);
        drain(&mut b_rx);

        state.handle_event(a, ClientEvent::RequestDailyStats).await;

        assert_eq!(
            drain(&mut a_rx),
            vec![ServerEvent::DailyStatsResponse(BTreeMap::new())]
        );
        assert!(drain(&mut b_rx).is_empty());
    }

    #[tokio::test]
    async fn malformed_frames_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        let (id, mut rx) = state.connect().await;
        drain(&mut rx);

        for frame in ["", "click", "{\"event\":\"reset\"}", "[1,2]", "{\"event\":7}"] {
            state.handle_text(id, frame).await;
        }

        assert!(drain(&mut rx).is_empty());
        assert_eq!(state.data.lock().await.global_score, 0);
        assert_eq!(state.hub.len().await, 1);
    }

    #[tokio::test]
    async fn text_click_updates_every_session_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);
        let (a, mut a_rx) = state.connect().await;
        let (_, mut b_rx) = state.connect().await;
        drain(&mut a_rx);
        drain(&mut b_rx);

        for _ in 0..3 {
            state.handle_text(a, r#"{"event":"click"}"#).await;
        }

        let scores = |events: Vec<ServerEvent>| -> Vec<u64> {
            events
                .into_iter()
                .map(|event| match event {
                    ServerEvent::ScoreUpdate(snapshot) => snapshot.global_score,
                    other => panic!("unexpected event {other:?}"),
                })
                .collect()
        };
        assert_eq!(scores(drain(&mut a_rx)), vec![1, 2, 3]);
        assert_eq!(scores(drain(&mut b_rx)), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn flush_writes_unchanged_state() {
        let dir = tempfile::tempdir().unwrap();
        let state = fresh_state(&dir);

        assert!(state.flush().await);
        assert_eq!(load_state(&state.data_path).await, CounterState::zero(100));
    }
}
