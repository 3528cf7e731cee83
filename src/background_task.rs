use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::RateLimiterStore;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drops expired rate-limit windows so the per-IP table does not
/// grow for the lifetime of the process.
pub async fn start_sweep_task(limiter: RateLimiterStore) {
    let mut interval = interval(SWEEP_INTERVAL);

    loop {
        interval.tick().await;

        let removed = limiter.sweep();
        if removed > 0 {
            tracing::debug!(removed, "swept expired rate-limit windows");
        }
    }
}
