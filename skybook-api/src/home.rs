use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::Query,
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skybook_catalog::airports::{airport_directory, search_airports};
use skybook_core::flight::Airport;
use skybook_core::search::SearchQuery;
use tracing::info;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/search", post(submit_search))
}

#[derive(Debug, Deserialize)]
struct HomeParams {
    /// Optional typeahead filter against airport code, name, or city.
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct HomeResponse {
    airports: Vec<Airport>,
}

async fn home(Query(params): Query<HomeParams>) -> Json<HomeResponse> {
    let directory = airport_directory();
    let airports = match params.q.as_deref() {
        Some(query) => search_airports(&directory, query)
            .into_iter()
            .cloned()
            .collect(),
        None => directory,
    };
    Json(HomeResponse { airports })
}

/// Search submission from the entry form. Validation failures come back as a
/// field-error map; a valid query moves the session on to the results step.
async fn submit_search(Json(query): Json<SearchQuery>) -> Result<Redirect, AppError> {
    query.validate().map_err(AppError::Validation)?;
    info!(
        origin = %query.origin,
        destination = %query.destination,
        date = %query.departure_date,
        passengers = query.passengers,
        "Search accepted"
    );
    Ok(Redirect::to("/search-results"))
}
