use async_trait::async_trait;
use skybook_core::clock::Clock;
use std::time::Duration;

/// Production clock backed by the tokio timer. Under a paused test runtime
/// these sleeps advance virtually, so timer tests never wait in real time.
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
