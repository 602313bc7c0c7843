use async_trait::async_trait;
use skybook_core::repository::SessionRepository;
use skybook_core::CoreResult;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-process session store: named singleton slots holding raw JSON blobs.
/// The lock serializes access so the HTTP surface can share one instance;
/// writes are last-write-wins, matching the browser-local storage this
/// replaces.
#[derive(Default)]
pub struct MemorySessionStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionStore {
    async fn get(&self, slot: &str) -> CoreResult<Option<String>> {
        let slots = self.slots.read().await;
        Ok(slots.get(slot).cloned())
    }

    async fn set(&self, slot: &str, value: String) -> CoreResult<()> {
        let mut slots = self.slots.write().await;
        if slots.insert(slot.to_string(), value).is_some() {
            debug!(slot, "Session slot overwritten");
        } else {
            debug!(slot, "Session slot written");
        }
        Ok(())
    }

    async fn clear(&self, slot: &str) -> CoreResult<()> {
        let mut slots = self.slots.write().await;
        if slots.remove(slot).is_some() {
            debug!(slot, "Session slot cleared");
        }
        Ok(())
    }
}
