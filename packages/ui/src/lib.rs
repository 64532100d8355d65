//! This crate contains all shared UI for the storefront.
//!
//! Views report navigation as a [`Page`]; each platform shell maps pages onto
//! its own router. Client state lives in context signals owned by
//! [`SessionProvider`]: the config, the session, the auth modal and the
//! running purchase.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SHOP_CSS: Asset = asset!("/assets/shop.css");

mod page;
pub use page::Page;

pub mod format;
pub mod dialog;

mod notice;
pub use notice::{Notice, NoticeLine};

pub mod session;
pub use session::{
    logout, make_api, session_store, use_auth_modal, use_config, use_purchases, use_session,
    SessionProvider, SessionState,
};

pub mod auth_modal;
pub use auth_modal::{AuthModal, AuthModalHost, AuthView};

mod header;
pub use header::Header;

pub mod purchase;
pub mod deposit;
pub mod profile;
pub mod admin;
pub mod product_form;

pub mod views;
