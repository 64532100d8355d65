//! Request and response bodies exchanged with the storefront backend.

mod auth;
mod product;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, VerifyEmailRequest};
pub use product::{ProductFields, ProductImage, PurchaseReceipt};

use serde::{Deserialize, Serialize};

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Body of the deposit endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AmountRequest {
    pub amount: i64,
}

/// Body of `PUT /api/user/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
