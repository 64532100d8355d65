//! # API crate — typed client for the storefront backend
//!
//! Every network call the UI makes goes through [`ShopApi`]. The backend is a
//! plain JSON-over-HTTP service; protected routes take a bearer token that the
//! UI reads from the session store at call time.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ShopApi`]: one async method per endpoint (auth, profile, deposits, catalog, admin). |
//! | [`error`] | [`ApiError`]: backend error with message vs. transport/decoding failure. |
//! | [`models`] | Request/response bodies and the multipart [`ProductFields`] / [`ProductImage`] pair. |
//!
//! Domain records (`User`, `Product`, `PendingDeposit`, ...) live in the `store`
//! crate and are re-exported here for convenience.

pub mod client;
pub mod error;
pub mod models;

pub use client::ShopApi;
pub use error::{ApiError, Result};
pub use models::{
    LoginResponse, MessageResponse, ProductFields, ProductImage, PurchaseReceipt, RegisterRequest,
};

pub use store::{AdminStats, Category, PendingDeposit, Product, ProductStatus, Role, User};
