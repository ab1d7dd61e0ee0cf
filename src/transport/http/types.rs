use crate::app::booking_service::BookingService;
use crate::domain::directory::DirectoryStore;
use crate::domain::model::{Product, ProductId, User};
use crate::transport::http::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared state of the product service.
#[derive(Clone)]
pub struct ProductAppState {
    pub booking_service: Arc<BookingService>,
}

/// Shared state of the user service.
#[derive(Clone)]
pub struct UserAppState {
    pub directory: Arc<DirectoryStore>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

// Missing fields decode to zero values and are then rejected (or, for
// `product_id`, reported as an unknown product) by validation below.

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateProductRequest {
    /// Positive, unique product id.
    #[serde(default)]
    #[schema(value_type = i64)]
    pub id: ProductId,
    /// Initial stock, at least 1.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub name: String,
}

impl CreateProductRequest {
    pub fn into_product(self) -> Result<Product, ApiError> {
        let quantity = u64::try_from(self.quantity).ok().filter(|q| *q > 0);
        match quantity {
            Some(quantity) if self.id > 0 && !self.name.is_empty() => {
                Ok(Product::new(self.id, self.name, quantity))
            }
            _ => Err(ApiError::InvalidInput("invalid product data".to_string())),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct BookProductRequest {
    #[serde(default)]
    #[schema(value_type = i64)]
    pub product_id: ProductId,
    #[serde(default)]
    pub email: String,
}

impl BookProductRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() {
            return Err(ApiError::InvalidInput("email is required".to_string()));
        }
        Ok(())
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: i64,
}

impl CreateUserRequest {
    pub fn into_user(self) -> Result<User, ApiError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ApiError::InvalidInput(
                "name and email are required".to_string(),
            ));
        }
        Ok(User {
            name: self.name,
            email: self.email,
            age: self.age,
        })
    }
}
