//! End-to-end: the product service enriching bookings from a live user service.

mod common;

use axum::routing::get;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde_json::json;
use std::time::{Duration, Instant};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_widget_booking_flow() -> Result<(), Box<dyn std::error::Error>> {
    let user_base = common::spawn_user_service().await?;
    let product_base =
        common::spawn_product_service(&format!("{}/users/", user_base), Duration::from_secs(5))
            .await?;
    let client = reqwest::Client::new();

    for (name, email, age) in [("Ann", "a@x.com", 30), ("Bo", "b@y.com", 41)] {
        client
            .post(format!("{}/users", user_base))
            .json(&json!({"name": name, "email": email, "age": age}))
            .send()
            .await?
            .error_for_status()?;
    }

    client
        .post(format!("{}/products", product_base))
        .json(&json!({"id": 1, "quantity": 2, "name": "Widget"}))
        .send()
        .await?
        .error_for_status()?;
    client
        .post(format!("{}/products", product_base))
        .json(&json!({"id": 2, "quantity": 1, "name": "Gadget"}))
        .send()
        .await?
        .error_for_status()?;

    let first = client
        .post(format!("{}/products/book", product_base))
        .json(&json!({"product_id": 1, "email": "a@x.com"}))
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::OK);

    let second = client
        .post(format!("{}/products/book", product_base))
        .json(&json!({"product_id": 1, "email": "b@y.com"}))
        .send()
        .await?;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let ann = client
        .get(format!("{}/users/a@x.com/bookings", product_base))
        .send()
        .await?;
    assert_eq!(ann.status(), StatusCode::OK);
    assert_eq!(
        ann.json::<serde_json::Value>().await?,
        json!({
            "name": "Ann",
            "email": "a@x.com",
            "age": 30,
            "bookings": [{"productId": 1, "nama": "Widget"}]
        })
    );

    let bo = client
        .get(format!("{}/users/b@y.com/bookings", product_base))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(bo["bookings"], json!([]));

    // Booked, but never registered with the user service.
    client
        .post(format!("{}/products/book", product_base))
        .json(&json!({"product_id": 2, "email": "ghost@x.com"}))
        .send()
        .await?
        .error_for_status()?;
    let ghost = client
        .get(format!("{}/users/ghost@x.com/bookings", product_base))
        .send()
        .await?;
    assert_eq!(ghost.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_user_service_is_cut_off() -> Result<(), Box<dyn std::error::Error>> {
    let slow_users = Router::new().route(
        "/users/:email",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"name": "Late", "email": "a@x.com", "age": 1}))
        }),
    );
    let user_base = common::spawn_router(slow_users).await?;
    let product_base = common::spawn_product_service(
        &format!("{}/users/", user_base),
        Duration::from_millis(200),
    )
    .await?;

    let started = Instant::now();
    let resp = reqwest::get(format!("{}/users/a@x.com/bookings", product_base)).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(started.elapsed() < Duration::from_secs(3));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_garbled_user_payload_is_not_leaked() -> Result<(), Box<dyn std::error::Error>> {
    let garbled_users = Router::new().route(
        "/users/:email",
        get(|| async { "definitely not json: internal stack trace here" }),
    );
    let user_base = common::spawn_router(garbled_users).await?;
    let product_base =
        common::spawn_product_service(&format!("{}/users/", user_base), Duration::from_secs(2))
            .await?;

    let resp = reqwest::get(format!("{}/users/a@x.com/bookings", product_base)).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = resp.text().await?;
    assert!(!text.contains("stack trace"));
    assert!(text.contains("failed to get user data"));

    Ok(())
}
