use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};

use crate::app::AppState;
use crate::auth::password::hash_password;
use crate::database::{models::NewUser, UserRepository};
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::middleware::AuthUser;

/// POST /api/v1/users - create a user
///
/// The credential is stored as an argon2 hash. The response echoes the
/// submitted payload as-is; the store-assigned id is not read back.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created; echoes the submitted payload", body = NewUser),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Store failure, including duplicates", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn user_create(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<NewUser>)> {
    let Json(user) = payload?;

    let password_hash = hash_password(&user.password)?;

    UserRepository::new(state.db.pool().clone())
        .insert(&user.name, &user.username, &user.email, &password_hash)
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to insert user into database"))?;

    tracing::info!("User {} created by {}", user.username, caller.username);
    Ok((StatusCode::CREATED, Json(user)))
}
