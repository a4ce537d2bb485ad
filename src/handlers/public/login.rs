// handlers/public/login.rs - POST /api/v1/login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::auth::{generate_jwt, password::verify_password, Claims};
use crate::database::UserRepository;
use crate::error::{ApiError, ApiResult, ErrorBody};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

/// Authenticate with username and password and receive a JWT.
///
/// Unknown usernames and wrong passwords produce the same 401 so the
/// response does not reveal which accounts exist.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Store or signing failure", body = ErrorBody)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(payload) = payload?;

    let repo = UserRepository::new(state.db.pool().clone());
    let credentials = repo
        .find_credentials(&payload.username)
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to fetch user from database"))?;

    let Some(credentials) = credentials.filter(|c| verify_password(&payload.password, &c.password)) else {
        tracing::info!("Failed login for {}", payload.username);
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    let expiry_hours = state.config.security.jwt_expiry_hours;
    let claims = Claims::new(credentials.id, credentials.username, credentials.role, expiry_hours);
    let token = generate_jwt(&claims, &state.config.security)?;

    tracing::info!("Issued token for {}", claims.username);
    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: expiry_hours * 3600,
    }))
}
