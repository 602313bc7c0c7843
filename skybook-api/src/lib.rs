use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod booking;
pub mod confirmation;
pub mod error;
pub mod home;
pub mod login;
pub mod search;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .merge(home::routes())
        .merge(search::routes())
        .merge(booking::routes())
        .merge(confirmation::routes())
        .merge(login::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
