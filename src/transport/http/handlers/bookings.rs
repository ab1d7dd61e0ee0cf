use crate::app::booking_service::UserBookings;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, ProductAppState};
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/users/{email}/bookings",
    params(
        ("email" = String, Path, description = "Email the bookings were made with")
    ),
    responses(
        (status = 200, description = "User record merged with their bookings", body = UserBookings),
        (status = 500, description = "User service unavailable or lookup failed", body = ApiResponse)
    )
)]
pub async fn user_bookings_handler(
    State(state): State<ProductAppState>,
    Path(email): Path<String>,
) -> Result<Json<UserBookings>, ApiError> {
    let bookings = state.booking_service.bookings_for_user(&email).await?;
    Ok(Json(bookings))
}
