use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skybook_booking::selection;
use skybook_core::flight::Flight;
use skybook_core::search::{filter_and_sort, SortKey, SortOrder, SortState, SEARCH_LATENCY};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/search-results", get(search_results))
        .route("/flights/{id}/select", post(select_flight))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultsParams {
    /// Comma-separated airline names; empty or absent means no filter.
    airlines: Option<String>,
    sort_by: Option<SortKey>,
    sort_order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
struct ResultsResponse {
    flights: Vec<Flight>,
    /// The unique airline names backing the filter checkboxes.
    airlines: Vec<String>,
}

async fn search_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Result<Json<ResultsResponse>, AppError> {
    // Stand-in for the supplier search call.
    state.clock.sleep(SEARCH_LATENCY).await;

    let filter: Vec<String> = params
        .airlines
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();

    let sort = match params.sort_by {
        Some(key) => SortState::new(key, params.sort_order.unwrap_or(SortOrder::Asc)),
        None => SortState::default(),
    };

    let flights = filter_and_sort(state.catalog.all(), &filter, sort);

    Ok(Json(ResultsResponse {
        flights,
        airlines: state.catalog.airlines(),
    }))
}

/// Book this flight: persist the selection and move on to the booking step.
async fn select_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let flight = state
        .catalog
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown flight: {id}")))?;

    selection::select_flight(&*state.store, flight)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Redirect::to("/booking"))
}
