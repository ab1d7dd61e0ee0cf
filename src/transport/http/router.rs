use crate::app::booking_service::UserBookings;
use crate::domain::model::{BookedProduct, Product, User};
use crate::transport::http::error::panic_response;
use crate::transport::http::handlers::{bookings, health, products, users};
use crate::transport::http::types::{
    ApiResponse, BookProductRequest, CreateProductRequest, CreateUserRequest, ProductAppState,
    UserAppState,
};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::product_healthcheck_handler,
        products::add_product_handler,
        products::book_product_handler,
        bookings::user_bookings_handler
    ),
    components(schemas(
        ApiResponse,
        CreateProductRequest,
        BookProductRequest,
        Product,
        BookedProduct,
        UserBookings
    ))
)]
pub struct ProductApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::user_healthcheck_handler,
        users::add_user_handler,
        users::get_user_handler
    ),
    components(schemas(ApiResponse, CreateUserRequest, User))
)]
pub struct UserApiDoc;

/// Routes of the product (booking) service, with request logging and panic
/// recovery applied.
pub fn create_product_router(app_state: ProductAppState) -> Router {
    Router::new()
        .route("/health", get(health::product_healthcheck_handler))
        .route("/products", post(products::add_product_handler))
        .route("/products/book", post(products::book_product_handler))
        .route("/users/:email/bookings", get(bookings::user_bookings_handler))
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(request_log_layer())
}

/// Routes of the user (directory) service.
pub fn create_user_router(app_state: UserAppState) -> Router {
    Router::new()
        .route("/health", get(health::user_healthcheck_handler))
        .route("/users", post(users::add_user_handler))
        .route("/users/:email", get(users::get_user_handler))
        .with_state(app_state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(request_log_layer())
}

/// One INFO span and one INFO event (status + latency) per request.
fn request_log_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}
