use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot holding the flight chosen on the results step.
pub const SELECTED_FLIGHT_SLOT: &str = "selectedFlight";
/// Slot holding the most recent confirmed booking.
pub const BOOKING_DETAILS_SLOT: &str = "bookingDetails";

/// Singleton-slot session storage. Each named slot holds at most one JSON
/// blob; writes are last-write-wins. Constructed once per application
/// session and handed to the workflow steps that need it.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get(&self, slot: &str) -> CoreResult<Option<String>>;
    async fn set(&self, slot: &str, value: String) -> CoreResult<()>;
    async fn clear(&self, slot: &str) -> CoreResult<()>;
}

/// Read a slot and decode it, failing closed: a missing slot or a malformed
/// blob (e.g. a hand-edited store) both read back as `None`.
pub async fn read_slot<T: DeserializeOwned>(
    repo: &dyn SessionRepository,
    slot: &str,
) -> CoreResult<Option<T>> {
    let Some(raw) = repo.get(slot).await? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(slot, %err, "Discarding malformed session blob");
            Ok(None)
        }
    }
}

/// Serialize a value into a slot, overwriting whatever was there.
pub async fn write_slot<T: Serialize>(
    repo: &dyn SessionRepository,
    slot: &str,
    value: &T,
) -> CoreResult<()> {
    let raw = serde_json::to_string(value)
        .map_err(|e| CoreError::Internal(format!("Failed to encode {slot}: {e}")))?;
    repo.set(slot, raw).await
}
