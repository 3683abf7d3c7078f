use serde::{Deserialize, Serialize};

use ordergate_store::OrderStatus;

// -------------------------
// Auth DTOs
// -------------------------

// The grant request wire shape is owned by the auth crate
// (`ordergate_auth::GrantRequest`); routes deserialize it directly.

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            token_type: "bearer",
            expires_in,
        }
    }
}

// -------------------------
// Order DTOs
// -------------------------

const MAX_PRODUCT_NAME_LEN: usize = 200;

fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("product_name must not be empty");
    }
    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err("product_name must be at most 200 characters");
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), &'static str> {
    if !(price > 0.0) {
        return Err("price must be greater than zero");
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product_name: String,
    pub price: f64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        validate_product_name(&self.product_name)?;
        validate_price(self.price)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.product_name {
            validate_product_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

// -------------------------
// Profile DTOs
// -------------------------

#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}
