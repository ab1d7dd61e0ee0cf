use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    ApiResponse, BookProductRequest, CreateProductRequest, ProductAppState,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product added", body = ApiResponse),
        (status = 400, description = "Malformed body or invalid product data", body = ApiResponse),
        (status = 409, description = "Product id already exists", body = ApiResponse)
    )
)]
pub async fn add_product_handler(
    State(state): State<ProductAppState>,
    request: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(request) = request?;
    tracing::debug!(?request, "add product");
    let product = request.into_product()?;
    let data = json!(product);

    state.booking_service.add_product(product)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(data))))
}

#[utoipa::path(
    post,
    path = "/products/book",
    request_body = BookProductRequest,
    responses(
        (status = 200, description = "Product booked", body = ApiResponse),
        (status = 400, description = "Malformed body or missing email", body = ApiResponse),
        (status = 409, description = "Product not found, out of stock, or already booked", body = ApiResponse)
    )
)]
pub async fn book_product_handler(
    State(state): State<ProductAppState>,
    request: Result<Json<BookProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(request) = request?;
    request.validate()?;

    if let Err(err) = state
        .booking_service
        .book_product(request.product_id, &request.email)
    {
        tracing::info!(product_id = request.product_id, email = %request.email, %err, "booking refused");
        return Err(err.into());
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(json!({
            "product_id": request.product_id,
            "email": request.email,
        }))),
    ))
}
