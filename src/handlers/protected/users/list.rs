use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::{models::User, UserRepository};
use crate::error::{ApiError, ApiResult, ErrorBody};

/// GET /api/v1/users - all users, credential excluded
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users in store order", body = [User]),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
pub async fn user_list(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = UserRepository::new(state.db.pool().clone())
        .select_all()
        .await
        .map_err(|e| ApiError::from_user_query(e, "Failed to fetch users from database"))?;

    Ok(Json(users))
}
