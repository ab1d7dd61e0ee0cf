// src/bin/user_service.rs

use anyhow::Context;
use booking_services::infra::{config, telemetry};
use booking_services::transport;
use booking_services::DirectoryStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::setup_tracing();

    // The user service has no required keys, so the env file is optional here.
    match config::load_env_file() {
        Ok(path) => tracing::info!(file = %path.display(), "configuration loaded"),
        Err(e) => tracing::warn!("{e:#}; using environment and defaults"),
    }
    let cfg = config::UserServiceConfig::from_env()?;

    let app_state = transport::http::UserAppState {
        directory: Arc::new(DirectoryStore::new()),
    };

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_user_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::UserApiDoc::openapi()),
        )
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
    tracing::info!("User service listening on http://{}", cfg.bind_addr);

    transport::http::serve_until_ctrl_c(listener, app).await?;
    tracing::info!("Graceful shutdown complete.");
    Ok(())
}
