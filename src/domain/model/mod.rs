//! Plain records held by the inventory and directory stores.
//!
//! Stores hand these out by value; nothing outside a store ever holds a
//! reference into its maps.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product identifier as it appears on the wire.
pub type ProductId = i64;

/// A unit of inventory that can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = i64)]
    pub id: ProductId,
    pub name: String,
    /// Remaining units. Decremented by exactly one on a successful booking.
    pub quantity: u64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, quantity: u64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// A registered user, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// One row of a "bookings for email" query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookedProduct {
    #[serde(rename = "productId")]
    #[schema(value_type = i64)]
    pub product_id: ProductId,
    /// Product name. The wire key is `nama`, kept for existing clients.
    #[serde(rename = "nama")]
    pub name: String,
}
