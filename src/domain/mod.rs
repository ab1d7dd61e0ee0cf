pub mod directory;
pub mod inventory;
pub mod model;

pub use directory::{DirectoryError, DirectoryStore};
pub use inventory::{InventoryError, InventoryStore};
pub use model::{BookedProduct, Product, ProductId, User};
