use crate::domain::model::User;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, CreateUserRequest, UserAppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = ApiResponse),
        (status = 400, description = "Malformed body or missing name/email", body = ApiResponse),
        (status = 409, description = "Email already registered", body = ApiResponse)
    )
)]
pub async fn add_user_handler(
    State(state): State<UserAppState>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(request) = request?;
    let user = request.into_user()?;
    let data = serde_json::json!(user);
    let email = user.email.clone();

    state.directory.add_user(user)?;
    tracing::info!(%email, "user added");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}

#[utoipa::path(
    get,
    path = "/users/{email}",
    params(
        ("email" = String, Path, description = "Email the user registered with")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "No user with this email", body = ApiResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<UserAppState>,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.directory.get_user(&email)?;
    Ok(Json(user))
}
