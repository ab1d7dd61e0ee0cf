//! In-memory product inventory with single-slot bookings.
//!
//! Every operation takes the store's one mutex for its whole duration, so the
//! existence, stock and booking checks in [`InventoryStore::book_product`] and
//! the mutation that follows them are observed as a single step.

use crate::domain::model::{BookedProduct, Product, ProductId};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Failures of inventory operations. The messages are surfaced to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("product already exists")]
    AlreadyExists(ProductId),

    #[error("product not found")]
    NotFound(ProductId),

    #[error("product out of stock")]
    OutOfStock(ProductId),

    #[error("product already booked")]
    AlreadyBooked(ProductId),
}

#[derive(Default)]
struct Inventory {
    products: HashMap<ProductId, Product>,
    /// product id -> email of the one booker.
    bookings: HashMap<ProductId, String>,
}

/// Products and their bookings, shared between request handlers.
#[derive(Default)]
pub struct InventoryStore {
    inner: Mutex<Inventory>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic can only happen before any map is touched, so a poisoned
    // guard still protects consistent data.
    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a product. An id can only ever be added once.
    pub fn add_product(&self, product: Product) -> Result<(), InventoryError> {
        let mut inventory = self.lock();
        if inventory.products.contains_key(&product.id) {
            return Err(InventoryError::AlreadyExists(product.id));
        }
        inventory.products.insert(product.id, product);
        Ok(())
    }

    /// Books one unit of `product_id` for `email`.
    ///
    /// Checks run in order: the product must exist, have stock left, and not
    /// be booked yet. On success the quantity drops by one and the product is
    /// locked against any further booking, whatever stock remains.
    pub fn book_product(&self, product_id: ProductId, email: &str) -> Result<(), InventoryError> {
        let mut guard = self.lock();
        let inventory = &mut *guard;

        let product = inventory
            .products
            .get_mut(&product_id)
            .ok_or(InventoryError::NotFound(product_id))?;
        if product.quantity == 0 {
            return Err(InventoryError::OutOfStock(product_id));
        }
        if inventory.bookings.contains_key(&product_id) {
            return Err(InventoryError::AlreadyBooked(product_id));
        }

        product.quantity -= 1;
        inventory.bookings.insert(product_id, email.to_string());
        Ok(())
    }

    /// Every product booked by `email`, in no particular order.
    pub fn bookings_for_email(&self, email: &str) -> Vec<BookedProduct> {
        let inventory = self.lock();
        inventory
            .bookings
            .iter()
            .filter(|(_, booked_by)| booked_by.as_str() == email)
            .filter_map(|(id, _)| {
                inventory.products.get(id).map(|product| BookedProduct {
                    product_id: *id,
                    name: product.name.clone(),
                })
            })
            .collect()
    }

    /// Snapshot of a single product.
    pub fn product(&self, product_id: ProductId) -> Option<Product> {
        self.lock().products.get(&product_id).cloned()
    }

    #[cfg(test)]
    fn booked_by(&self, product_id: ProductId) -> Option<String> {
        self.lock().bookings.get(&product_id).cloned()
    }
}
