//! The booking service behind the product API.
//!
//! Owns the [`InventoryStore`] and joins its bookings with user records
//! fetched from the user service.

use crate::domain::inventory::{InventoryError, InventoryStore};
use crate::domain::model::{BookedProduct, Product, ProductId, User};
use crate::infra::directory::{EnrichmentError, UserDirectory};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

/// A user record merged with the products that user booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserBookings {
    pub name: String,
    pub email: String,
    pub age: i64,
    pub bookings: Vec<BookedProduct>,
}

#[derive(Debug, Error)]
pub enum BookingQueryError {
    #[error("failed to get user data")]
    UpstreamUnavailable(#[source] EnrichmentError),

    /// The user service answered for a different email than the one asked.
    #[error("failed to get bookings")]
    InternalLookupFailure { requested: String, returned: String },
}

pub struct BookingService {
    inventory: InventoryStore,
    directory: Arc<dyn UserDirectory>,
}

impl BookingService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            inventory: InventoryStore::new(),
            directory,
        }
    }

    pub fn add_product(&self, product: Product) -> Result<(), InventoryError> {
        let id = product.id;
        self.inventory.add_product(product)?;
        tracing::info!(product_id = id, "product added");
        Ok(())
    }

    pub fn book_product(&self, product_id: ProductId, email: &str) -> Result<(), InventoryError> {
        self.inventory.book_product(product_id, email)?;
        tracing::info!(product_id, email, "product booked");
        Ok(())
    }

    /// Looks the user up in the user service, then attaches their bookings.
    ///
    /// No inventory lock is held while the upstream call is in flight.
    pub async fn bookings_for_user(&self, email: &str) -> Result<UserBookings, BookingQueryError> {
        let user: User = self
            .directory
            .fetch_user(email)
            .await
            .map_err(BookingQueryError::UpstreamUnavailable)?;

        if user.email != email {
            return Err(BookingQueryError::InternalLookupFailure {
                requested: email.to_string(),
                returned: user.email,
            });
        }

        let bookings = self.inventory.bookings_for_email(email);
        Ok(UserBookings {
            name: user.name,
            email: user.email,
            age: user.age,
            bookings,
        })
    }
}
