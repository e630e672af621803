use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, info_span, Instrument};
use crate::state::AppState;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Tears down sessions that have been idle longer than the configured limit.
pub async fn start_session_sweeper(state: Arc<AppState>) {
    info!("Starting idle session sweeper...");
    let idle = chrono::Duration::minutes(state.config.session_idle_minutes);

    loop {
        sleep(SWEEP_INTERVAL).await;

        async {
            let dropped = state.sessions.sweep(idle).await;
            if dropped > 0 {
                info!(dropped, "idle sessions ended");
            } else {
                debug!("no idle sessions");
            }
        }
            .instrument(info_span!("session_sweep"))
            .await;
    }
}
