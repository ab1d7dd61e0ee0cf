// src/bin/booking_contention.rs
// Hammers a running product service with concurrent bookings of one product
// and reports how many of them won. A correct service reports exactly one.
//
// Usage: booking_contention [BASE_URL] [REQUESTS]
//   BASE_URL defaults to http://localhost:8082, REQUESTS to 100.

use anyhow::{anyhow, Context};
use rand::Rng;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8082".to_string());
    let requests: usize = match args.next() {
        Some(v) => v.parse().context("REQUESTS must be a positive integer")?,
        None => 100,
    };
    let base_url = base_url.trim_end_matches('/').to_string();

    let client = reqwest::Client::new();
    let product_id: i64 = rand::thread_rng().gen_range(1_000_000..i64::from(i32::MAX));

    let created = client
        .post(format!("{base_url}/products"))
        .json(&json!({
            "id": product_id,
            "quantity": requests.max(1),
            "name": format!("contention-{product_id}"),
        }))
        .send()
        .await
        .context("product service unreachable")?;
    if created.status() != StatusCode::CREATED {
        return Err(anyhow!(
            "could not create product {product_id}: {}",
            created.status()
        ));
    }

    println!(
        "--- Booking contention: {} concurrent bookings of product {} ---",
        requests, product_id
    );
    let start_time = Instant::now();

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..requests {
        let client = client.clone();
        let url = format!("{base_url}/products/book");
        tasks.spawn(async move {
            client
                .post(url)
                .json(&json!({ "product_id": product_id, "email": format!("contender{i}@example.com") }))
                .send()
                .await
                .map(|r| r.status())
        });
    }

    let (mut booked, mut conflicts, mut other) = (0usize, 0usize, 0usize);
    while let Some(joined) = tasks.join_next().await {
        match joined.context("booking task panicked")? {
            Ok(StatusCode::OK) => booked += 1,
            Ok(StatusCode::CONFLICT) => conflicts += 1,
            Ok(status) => {
                eprintln!("unexpected status: {status}");
                other += 1;
            }
            Err(e) => {
                eprintln!("request failed: {e}");
                other += 1;
            }
        }
    }
    let duration = start_time.elapsed();

    println!("\n--- Results ---");
    println!("Booked:    {booked}");
    println!("Conflicts: {conflicts}");
    println!("Other:     {other}");
    println!("Total time: {} ms", duration.as_millis());

    if booked != 1 {
        return Err(anyhow!(
            "expected exactly one successful booking, got {booked}"
        ));
    }
    println!("\nDouble-booking guard held.");
    Ok(())
}
