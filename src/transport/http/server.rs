use axum::Router;
use tokio::net::TcpListener;

/// Serves `app` until Ctrl+C, letting in-flight requests finish.
pub async fn serve_until_ctrl_c(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received (Ctrl+C), draining requests...");
        })
        .await
}
