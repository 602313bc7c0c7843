use async_trait::async_trait;
use std::time::Duration;

/// Time source for the workflow's simulated latencies and the confirmation
/// cleanup timer. Production sleeps on the tokio timer; tests swap in a
/// paused or no-op clock so nothing actually waits.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
