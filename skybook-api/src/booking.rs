use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use skybook_booking::{BookingError, BookingRequest};
use skybook_catalog::pricing::Quote;
use skybook_core::flight::Flight;

pub fn routes() -> Router<AppState> {
    Router::new().route("/booking", get(booking_context).post(submit_booking))
}

#[derive(Debug, Serialize)]
struct BookingContext {
    flight: Flight,
    /// Fare breakdown for the initial single-passenger form.
    quote: Quote,
}

/// Mount the booking step. Without a selected flight there is nothing to
/// book, so the session is sent back to search rather than shown an error.
async fn booking_context(State(state): State<AppState>) -> Result<Response, AppError> {
    let flight = state
        .booking
        .selected_flight()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match flight {
        Some(flight) => {
            let quote = Quote::for_party(flight.price, 1);
            Ok(Json(BookingContext { flight, quote }).into_response())
        }
        None => Ok(Redirect::to("/search-results").into_response()),
    }
}

async fn submit_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<Response, AppError> {
    match state.booking.submit(request).await {
        Ok(_booking) => Ok(Redirect::to("/confirmation").into_response()),
        Err(BookingError::NoFlightSelected) => Ok(Redirect::to("/search-results").into_response()),
        Err(BookingError::Invalid(errors)) => Err(AppError::Unprocessable(errors)),
        Err(BookingError::Core(err)) => Err(AppError::Internal(err.to_string())),
    }
}
