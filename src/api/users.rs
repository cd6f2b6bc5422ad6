//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::user::{RegisterUser, UnregisteredUser, UserLoans},
    AppState,
};

use super::AppJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User registered", body = UserLoans),
        (status = 409, description = "User already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<UserLoans>)> {
    let user = state.services.users.register_user(&request.user)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Unregister a user.
///
/// Books the user still holds are not returned to the shelf; they are listed
/// in the response.
#[utoipa::path(
    delete,
    path = "/users/{user}",
    tag = "users",
    params(
        ("user" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User unregistered", body = UnregisteredUser),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn unregister_user(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> AppResult<Json<UnregisteredUser>> {
    let result = state.services.users.unregister_user(&user)?;
    Ok(Json(result))
}
