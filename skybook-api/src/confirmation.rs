use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use skybook_booking::{Booking, ConfirmationView};

pub fn routes() -> Router<AppState> {
    Router::new().route("/confirmation", get(confirmation).delete(leave_confirmation))
}

#[derive(Debug, Serialize)]
struct ConfirmationResponse {
    /// `confirmed` with the booking attached, or `pending` when no booking
    /// exists (the view stays in its loading state; deliberately no
    /// redirect).
    status: &'static str,
    booking: Option<Booking>,
}

async fn confirmation(State(state): State<AppState>) -> Result<Json<ConfirmationResponse>, AppError> {
    let view = ConfirmationView::mount(state.store.clone(), state.clock.clone()).await;

    let response = ConfirmationResponse {
        status: if view.is_pending() { "pending" } else { "confirmed" },
        booking: view.booking().cloned(),
    };

    // The newest mount owns the session cleanup; dropping a previous view
    // here cancels its timer so only one is ever armed.
    let mut active = state.confirmation.lock().await;
    *active = Some(view);

    Ok(Json(response))
}

async fn leave_confirmation(State(state): State<AppState>) -> StatusCode {
    let mut active = state.confirmation.lock().await;
    if let Some(view) = active.take() {
        view.unmount();
    }
    StatusCode::NO_CONTENT
}
