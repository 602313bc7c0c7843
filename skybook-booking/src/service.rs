use crate::models::{generate_booking_code, Booking, BookingRequest};
use crate::selection;
use crate::validation::validate_request;
use skybook_core::clock::Clock;
use skybook_core::flight::Flight;
use skybook_core::repository::{read_slot, write_slot, SessionRepository, BOOKING_DETAILS_SLOT};
use skybook_core::validation::ValidationErrors;
use skybook_core::{CoreError, CoreResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Simulated latency of the booking submission, standing in for the absent
/// booking API call.
pub const SUBMIT_LATENCY: Duration = Duration::from_secs(2);

/// The booking submit operation. Callers hand it a validated-or-not request;
/// it owns precondition checks, validation, the simulated latency, booking
/// synthesis, and persistence, so a real backend can replace the middle
/// without touching callers.
pub struct BookingService {
    store: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl BookingService {
    pub fn new(store: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            latency: SUBMIT_LATENCY,
        }
    }

    /// Override the simulated latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The flight the user picked on the results step, if any.
    pub async fn selected_flight(&self) -> CoreResult<Option<Flight>> {
        selection::selected_flight(&*self.store).await
    }

    /// Submit the booking form. Validates synchronously, waits out the
    /// simulated network latency, then synthesizes the booking and persists
    /// it as the `bookingDetails` singleton.
    pub async fn submit(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let flight = self
            .selected_flight()
            .await?
            .ok_or(BookingError::NoFlightSelected)?;

        validate_request(&request).map_err(BookingError::Invalid)?;

        self.clock.sleep(self.latency).await;

        let booking = Booking {
            flight,
            passengers: request.passengers,
            contact_email: request.contact_email.into(),
            contact_phone: request.contact_phone.into(),
            booking_code: generate_booking_code(),
        };

        write_slot(&*self.store, BOOKING_DETAILS_SLOT, &booking).await?;
        info!(booking_code = %booking.booking_code, flight_id = %booking.flight.id, "Booking confirmed");

        Ok(booking)
    }

    /// The most recent confirmed booking, if one is still in the store.
    pub async fn current_booking(&self) -> CoreResult<Option<Booking>> {
        read_slot(&*self.store, BOOKING_DETAILS_SLOT).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The booking step was reached without a selected flight; callers
    /// recover by redirecting to search, not by reporting an error.
    #[error("No flight selected")]
    NoFlightSelected,

    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Passenger, PassengerType};
    use skybook_store::MemorySessionStore;

    // Returns immediately; these tests care about the workflow, not the
    // latency. Timer behavior is covered with the paused tokio clock in the
    // confirmation tests.
    struct InstantClock;

    #[async_trait::async_trait]
    impl Clock for InstantClock {
        async fn sleep(&self, _duration: Duration) {}
    }

    fn flight() -> Flight {
        Flight {
            id: "1".to_string(),
            airline: "Garuda Indonesia".to_string(),
            airline_logo: "https://logos.test/ga.svg".to_string(),
            departure_time: "07:25".to_string(),
            arrival_time: "09:30".to_string(),
            duration: "2h 5m".to_string(),
            departure_airport: "CGK".to_string(),
            arrival_airport: "DPS".to_string(),
            price: 1_250_000,
            flight_number: "GA-401".to_string(),
        }
    }

    fn valid_request() -> BookingRequest {
        BookingRequest {
            contact_email: "a@b.com".to_string(),
            contact_phone: "08123456".to_string(),
            passengers: vec![Passenger {
                first_name: "Ayu".to_string(),
                last_name: "Wijaya".to_string(),
                email: String::new(),
                id_number: "3174012345".to_string(),
                passenger_type: PassengerType::Adult,
            }],
        }
    }

    fn service(store: Arc<MemorySessionStore>) -> BookingService {
        BookingService::new(store, Arc::new(InstantClock))
    }

    #[tokio::test]
    async fn submit_without_selection_reports_missing_precondition() {
        let store = Arc::new(MemorySessionStore::new());
        let result = service(store).submit(valid_request()).await;
        assert!(matches!(result, Err(BookingError::NoFlightSelected)));
    }

    #[tokio::test]
    async fn invalid_request_produces_no_booking() {
        let store = Arc::new(MemorySessionStore::new());
        selection::select_flight(&*store, &flight()).await.unwrap();
        let service = service(store);

        let mut request = valid_request();
        request.passengers.push(Passenger {
            first_name: "Budi".to_string(),
            last_name: String::new(),
            email: String::new(),
            id_number: "3174098765".to_string(),
            passenger_type: PassengerType::Adult,
        });

        let err = service.submit(request).await.unwrap_err();
        match err {
            BookingError::Invalid(errors) => {
                assert_eq!(errors.get("passenger1LastName"), Some("Last name is required"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert_eq!(service.current_booking().await.unwrap(), None);
    }

    #[tokio::test]
    async fn valid_submit_persists_exactly_one_booking() {
        let store = Arc::new(MemorySessionStore::new());
        selection::select_flight(&*store, &flight()).await.unwrap();
        let service = service(store);

        let booking = service.submit(valid_request()).await.unwrap();

        let digits = booking
            .booking_code
            .strip_prefix("SKYB")
            .expect("SKYB prefix");
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        assert_eq!(booking.flight, flight());
        assert_eq!(booking.passengers.len(), 1);

        let stored = service.current_booking().await.unwrap().unwrap();
        assert_eq!(stored, booking);
    }

    #[tokio::test]
    async fn resubmitting_overwrites_the_stored_booking() {
        let store = Arc::new(MemorySessionStore::new());
        selection::select_flight(&*store, &flight()).await.unwrap();
        let service = service(store);

        let _first = service.submit(valid_request()).await.unwrap();
        let second = service.submit(valid_request()).await.unwrap();

        let stored = service.current_booking().await.unwrap().unwrap();
        assert_eq!(stored, second);
    }
}
