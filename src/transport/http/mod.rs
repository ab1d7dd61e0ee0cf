pub mod error;
pub mod router;
pub mod server;
pub mod types;
pub mod handlers {
    pub mod bookings;
    pub mod health;
    pub mod products;
    pub mod users;
}

pub use error::ApiError;
pub use router::{create_product_router, create_user_router, ProductApiDoc, UserApiDoc};
pub use server::serve_until_ctrl_c;
pub use types::{ProductAppState, UserAppState};
