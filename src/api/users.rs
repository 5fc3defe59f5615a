//! User-only endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::LoginOutcome;
use crate::errors::AppError;
use crate::models::LoginRequest;
use crate::services::UserService;

/// POST /api/v2/users/login - Check an email/password pair.
pub async fn login(
    State(users): State<UserService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<LoginOutcome, AppError> {
    let Json(request) = payload?;

    match users.login(&request.email, &request.password).await? {
        Some(user) => {
            tracing::info!(user_id = ?user.id, "User logged in");
            Ok(LoginOutcome::Authenticated(user))
        }
        None => {
            tracing::warn!("Rejected login attempt");
            Ok(LoginOutcome::Rejected)
        }
    }
}
