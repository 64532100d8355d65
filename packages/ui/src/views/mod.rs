mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod shop_layout;
pub use shop_layout::ShopLayoutView;

mod home;
pub use home::HomeView;

mod products;
pub use products::ProductListView;

mod profile;
pub use profile::ProfileView;

mod deposit;
pub use deposit::DepositView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod admin_products;
pub use admin_products::AdminProductsView;

mod contact;
pub use contact::ContactView;
