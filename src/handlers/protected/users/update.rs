use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Extension, Json,
};

use crate::app::AppState;
use crate::database::{models::UserUpdate, UserRepository};
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::middleware::AuthUser;

/// PUT /api/v1/users/:id - update name, username and email
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated; echoes the submitted payload", body = UserUpdate),
        (status = 400, description = "Non-integer id or malformed body", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn user_update(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> ApiResult<Json<UserUpdate>> {
    let Path(id) = id?;
    let Json(update) = payload?;

    UserRepository::new(state.db.pool().clone())
        .update_404(id, &update)
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to update user in database"))?;

    tracing::info!("User {} updated by {}", id, caller.username);
    Ok(Json(update))
}
