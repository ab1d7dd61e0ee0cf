//! Helpers that run the services in-process on ephemeral ports.

#![allow(dead_code)]

use axum::Router;
use booking_services::{transport, BookingService, DirectoryStore, HttpUserDirectory};
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;

/// Binds `router` to 127.0.0.1:0 and returns its base URL.
pub async fn spawn_router(router: Router) -> Result<String, Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://127.0.0.1:{}", port))
}

pub async fn spawn_user_service() -> Result<String, Box<dyn std::error::Error>> {
    let state = transport::http::UserAppState {
        directory: Arc::new(DirectoryStore::new()),
    };
    spawn_router(transport::http::create_user_router(state)).await
}

/// Starts a product service whose enrichment calls go to `user_service_url`.
pub async fn spawn_product_service(
    user_service_url: &str,
    timeout: Duration,
) -> Result<String, Box<dyn std::error::Error>> {
    let directory = HttpUserDirectory::new(Url::parse(user_service_url)?, timeout)?;
    let state = transport::http::ProductAppState {
        booking_service: Arc::new(BookingService::new(Arc::new(directory))),
    };
    spawn_router(transport::http::create_product_router(state)).await
}

/// A URL nothing listens on: bind an ephemeral port, then release it.
pub async fn dead_url() -> Result<String, Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(format!("http://127.0.0.1:{}/users/", port))
}
