pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::booking_service::{BookingQueryError, BookingService, UserBookings};
pub use domain::{
    BookedProduct, DirectoryError, DirectoryStore, InventoryError, InventoryStore, Product,
    ProductId, User,
};
pub use infra::directory::{EnrichmentError, HttpUserDirectory, UserDirectory};
