use skybook_core::flight::Flight;
use skybook_core::repository::{read_slot, write_slot, SessionRepository, SELECTED_FLIGHT_SLOT};
use skybook_core::CoreResult;
use tracing::info;

/// Persist the chosen flight as the `selectedFlight` singleton, overwriting
/// any earlier choice.
pub async fn select_flight(repo: &dyn SessionRepository, flight: &Flight) -> CoreResult<()> {
    write_slot(repo, SELECTED_FLIGHT_SLOT, flight).await?;
    info!(flight_id = %flight.id, flight_number = %flight.flight_number, "Flight selected");
    Ok(())
}

/// Read the selection back; `None` if never set, cleared, or unreadable.
/// The booking step treats `None` as a missing precondition and sends the
/// user back to search.
pub async fn selected_flight(repo: &dyn SessionRepository) -> CoreResult<Option<Flight>> {
    read_slot(repo, SELECTED_FLIGHT_SLOT).await
}
