use crate::error::AppError;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use skybook_core::validation::{is_valid_email, ValidationErrors};
use uuid::Uuid;

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    token: Uuid,
}

/// Decorative sign-in: the credentials are shape-checked and a throwaway
/// token is issued, but nothing downstream requires it. Booking is not
/// gated on login.
async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, AppError> {
    let mut errors = ValidationErrors::new();

    if request.email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(&request.email) {
        errors.add("email", "Email is invalid");
    }
    if request.password.is_empty() {
        errors.add("password", "Password is required");
    }

    errors.into_result().map_err(AppError::Validation)?;

    Ok(Json(LoginResponse {
        token: Uuid::new_v4(),
    }))
}
