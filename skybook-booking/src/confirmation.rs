use crate::models::Booking;
use skybook_core::clock::Clock;
use skybook_core::repository::{
    read_slot, SessionRepository, BOOKING_DETAILS_SLOT, SELECTED_FLIGHT_SLOT,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// How long a confirmed session lingers before the store is wiped.
pub const CLEANUP_DELAY: Duration = Duration::from_secs(300);

/// The confirmation step. Reads the booking once on mount (an absent booking
/// leaves the view in its loading state; no redirect) and arms a one-shot
/// cleanup timer that clears both session slots. The timer is scoped to the
/// view: unmounting, or dropping it on any other exit path, cancels it.
pub struct ConfirmationView {
    booking: Option<Booking>,
    cleanup: Option<JoinHandle<()>>,
}

impl ConfirmationView {
    pub async fn mount(store: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self::mount_with_delay(store, clock, CLEANUP_DELAY).await
    }

    pub async fn mount_with_delay(
        store: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        delay: Duration,
    ) -> Self {
        let booking = match read_slot::<Booking>(&*store, BOOKING_DETAILS_SLOT).await {
            Ok(booking) => booking,
            Err(err) => {
                warn!(%err, "Failed to read booking, treating as absent");
                None
            }
        };

        let cleanup = tokio::spawn(async move {
            clock.sleep(delay).await;
            if let Err(err) = store.clear(SELECTED_FLIGHT_SLOT).await {
                warn!(%err, "Failed to clear flight selection");
            }
            if let Err(err) = store.clear(BOOKING_DETAILS_SLOT).await {
                warn!(%err, "Failed to clear booking details");
            }
            info!("Confirmation expired, session slots cleared");
        });

        Self {
            booking,
            cleanup: Some(cleanup),
        }
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.booking.as_ref()
    }

    /// True while no booking has been read; the view shows its loading state
    /// indefinitely in that case.
    pub fn is_pending(&self) -> bool {
        self.booking.is_none()
    }

    /// Tear down the view; a cleanup timer that has not fired never will.
    pub fn unmount(mut self) {
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.cleanup.take() {
            handle.abort();
        }
    }
}

impl Drop for ConfirmationView {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Passenger, PassengerType};
    use crate::selection::select_flight;
    use skybook_core::flight::Flight;
    use skybook_core::repository::write_slot;
    use skybook_store::{MemorySessionStore, TokioClock};

    fn flight() -> Flight {
        Flight {
            id: "3".to_string(),
            airline: "Citilink".to_string(),
            airline_logo: "https://logos.test/qg.svg".to_string(),
            departure_time: "10:15".to_string(),
            arrival_time: "12:30".to_string(),
            duration: "2h 15m".to_string(),
            departure_airport: "CGK".to_string(),
            arrival_airport: "DPS".to_string(),
            price: 920_000,
            flight_number: "QG-679".to_string(),
        }
    }

    fn booking() -> Booking {
        Booking {
            flight: flight(),
            passengers: vec![Passenger {
                first_name: "Ayu".to_string(),
                last_name: "Wijaya".to_string(),
                email: String::new(),
                id_number: "3174012345".to_string(),
                passenger_type: PassengerType::Adult,
            }],
            contact_email: "a@b.com".to_string().into(),
            contact_phone: "08123456".to_string().into(),
            booking_code: "SKYB123456".to_string(),
        }
    }

    async fn seeded_store() -> Arc<MemorySessionStore> {
        let store = Arc::new(MemorySessionStore::new());
        select_flight(&*store, &flight()).await.unwrap();
        write_slot(&*store, BOOKING_DETAILS_SLOT, &booking())
            .await
            .unwrap();
        store
    }

    #[tokio::test(start_paused = true)]
    async fn mount_reads_the_current_booking() {
        let store = seeded_store().await;
        let view = ConfirmationView::mount(store.clone(), Arc::new(TokioClock)).await;

        assert!(!view.is_pending());
        assert_eq!(view.booking().unwrap().booking_code, "SKYB123456");
    }

    #[tokio::test(start_paused = true)]
    async fn mount_with_no_booking_stays_pending() {
        let store = Arc::new(MemorySessionStore::new());
        let view = ConfirmationView::mount(store, Arc::new(TokioClock)).await;

        assert!(view.is_pending());
        assert!(view.booking().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn corrupted_booking_blob_stays_pending() {
        let store = Arc::new(MemorySessionStore::new());
        store
            .set(BOOKING_DETAILS_SLOT, "{broken".to_string())
            .await
            .unwrap();

        let view = ConfirmationView::mount(store, Arc::new(TokioClock)).await;
        assert!(view.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cleanup_timer_clears_both_slots() {
        let store = seeded_store().await;
        let view = ConfirmationView::mount(store.clone(), Arc::new(TokioClock)).await;

        // Paused runtime: this sleep auto-advances past the cleanup deadline,
        // running the timer task on the way.
        tokio::time::sleep(CLEANUP_DELAY + Duration::from_secs(1)).await;

        assert_eq!(store.get(SELECTED_FLIGHT_SLOT).await.unwrap(), None);
        assert_eq!(store.get(BOOKING_DETAILS_SLOT).await.unwrap(), None);
        drop(view);
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_before_expiry_cancels_the_cleanup() {
        let store = seeded_store().await;
        let view = ConfirmationView::mount(store.clone(), Arc::new(TokioClock)).await;

        view.unmount();
        tokio::time::sleep(CLEANUP_DELAY * 2).await;

        assert!(store.get(SELECTED_FLIGHT_SLOT).await.unwrap().is_some());
        assert!(store.get(BOOKING_DETAILS_SLOT).await.unwrap().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_view_also_cancels_the_cleanup() {
        let store = seeded_store().await;
        {
            let _view = ConfirmationView::mount(store.clone(), Arc::new(TokioClock)).await;
        }
        tokio::time::sleep(CLEANUP_DELAY * 2).await;

        assert!(store.get(BOOKING_DETAILS_SLOT).await.unwrap().is_some());
    }
}
