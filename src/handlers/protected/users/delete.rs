use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::database::UserRepository;
use crate::error::{ApiError, ApiResult, ErrorBody};
use crate::middleware::AuthUser;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// DELETE /api/v1/users/:id - remove a user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = DeleteResponse),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn user_delete(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    UserRepository::new(state.db.pool().clone())
        .delete_404(id)
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to delete user from database"))?;

    tracing::info!("User {} deleted by {}", id, caller.username);
    Ok(Json(DeleteResponse {
        message: "User deleted successfully".to_string(),
    }))
}
