use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Product service is up", body = ApiResponse)
    )
)]
pub async fn product_healthcheck_handler() -> (StatusCode, Json<ApiResponse>) {
    healthy("product-service")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "User service is up", body = ApiResponse)
    )
)]
pub async fn user_healthcheck_handler() -> (StatusCode, Json<ApiResponse>) {
    healthy("user-service")
}

fn healthy(service: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::OK,
        Json(ApiResponse::ok(serde_json::json!({
            "status": "ok",
            "service": service,
        }))),
    )
}
