// src/bin/product_service.rs

use anyhow::Context;
use booking_services::infra::{config, telemetry};
use booking_services::transport;
use booking_services::{BookingService, HttpUserDirectory};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::setup_tracing();

    // --- Configuration (a missing env file aborts startup) ---
    let env_file = config::load_env_file()?;
    let cfg = config::ProductServiceConfig::from_env()?;
    tracing::info!(
        env = %config::environment(),
        file = %env_file.display(),
        user_service_url = %cfg.user_service_url,
        timeout_ms = cfg.user_service_timeout.as_millis() as u64,
        "configuration loaded"
    );

    // --- Service Initialization ---
    let directory = HttpUserDirectory::new(cfg.user_service_url.clone(), cfg.user_service_timeout)
        .context("failed to build user service client")?;
    let app_state = transport::http::ProductAppState {
        booking_service: Arc::new(BookingService::new(Arc::new(directory))),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_product_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ProductApiDoc::openapi()),
        )
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    tracing::info!("Product service listening on http://{}", cfg.bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", cfg.bind_addr);

    transport::http::serve_until_ctrl_c(listener, app).await?;
    tracing::info!("Graceful shutdown complete.");
    Ok(())
}
