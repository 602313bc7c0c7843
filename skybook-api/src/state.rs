use skybook_booking::{BookingService, ConfirmationView};
use skybook_catalog::FlightCatalog;
use skybook_core::clock::Clock;
use skybook_core::repository::SessionRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FlightCatalog>,
    pub store: Arc<dyn SessionRepository>,
    pub clock: Arc<dyn Clock>,
    pub booking: Arc<BookingService>,
    /// The currently mounted confirmation view, if any. Mounting a new one
    /// replaces (and thereby cancels) the previous cleanup timer; unmounting
    /// takes it out.
    pub confirmation: Arc<Mutex<Option<ConfirmationView>>>,
}

impl AppState {
    pub fn new(
        catalog: FlightCatalog,
        store: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let booking = Arc::new(BookingService::new(store.clone(), clock.clone()));
        Self {
            catalog: Arc::new(catalog),
            store,
            clock,
            booking,
            confirmation: Arc::new(Mutex::new(None)),
        }
    }
}
