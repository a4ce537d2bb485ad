use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::{models::User, UserRepository};
use crate::error::{ApiError, ApiResult, ErrorBody};

/// GET /api/v1/users/:id - single user by id
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn user_show(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<User>> {
    let Path(id) = id?;

    let user = UserRepository::new(state.db.pool().clone())
        .select_404(id)
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to fetch user from database"))?;

    Ok(Json(user))
}
