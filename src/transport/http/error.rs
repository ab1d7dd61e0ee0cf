//! Mapping from service failures to HTTP responses.

use crate::app::booking_service::BookingQueryError;
use crate::domain::directory::DirectoryError;
use crate::domain::inventory::InventoryError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or missing/invalid fields.
    #[error("{0}")]
    InvalidInput(String),

    /// Duplicate id or email, or a booking the inventory refused.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// The user service could not be reached or answered badly.
    #[error("failed to get user data")]
    UpstreamUnavailable,

    #[error("failed to get bookings")]
    InternalLookupFailure,

    /// A handler panicked.
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamUnavailable
            | ApiError::InternalLookupFailure
            | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::InvalidInput(format!("invalid request body: {}", err.body_text()))
    }
}

impl From<InventoryError> for ApiError {
    fn from(err: InventoryError) -> Self {
        ApiError::Conflict(err.to_string())
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            DirectoryError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<BookingQueryError> for ApiError {
    fn from(err: BookingQueryError) -> Self {
        match err {
            BookingQueryError::UpstreamUnavailable(source) => {
                tracing::warn!(error = %source, "user lookup failed");
                ApiError::UpstreamUnavailable
            }
            BookingQueryError::InternalLookupFailure { requested, returned } => {
                tracing::warn!(%requested, %returned, "user service returned a different user");
                ApiError::InternalLookupFailure
            }
        }
    }
}

/// Response for a panicking handler; the panic payload is never echoed.
pub fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    ApiError::Internal.into_response()
}
