pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{DepositConfig, ShopConfig};
pub use models::{
    AdminStats, Category, DepositRequester, PendingDeposit, Product, ProductStatus,
    ProfileUpdate, RevenueSummary, Role, User,
};
pub use session::{KeyValueStore, SessionStore};
