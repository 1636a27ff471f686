use crate::state::AppState;
use std::time::Duration;
use tokio::{
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Saves the in-memory state every `period`, whether or not anything changed.
/// The first save happens one full period after start.
pub fn spawn_ticker(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if state.flush().await {
                debug!("periodic flush complete");
            }
        }
    })
}
