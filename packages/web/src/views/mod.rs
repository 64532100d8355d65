//! Route components: thin wrappers that plug the shared views into the router.

use dioxus::prelude::*;
use ui::views::{AdminDashboardView, AdminProductsView, HomeView, ShopLayoutView};
use ui::Page;

pub use ui::views::ContactView as Contact;
pub use ui::views::DepositView as Deposit;
pub use ui::views::ProductListView as Products;
pub use ui::views::ProfileView as Profile;

use crate::Route;

/// Callback that pushes the route for a [`Page`].
fn use_page_navigator() -> impl Fn(Page) + Copy {
    let nav = use_navigator();
    move |page: Page| {
        tracing::debug!("Navigating to {:?}", page);
        nav.push(Route::from(page));
    }
}

#[component]
pub fn ShopLayout() -> Element {
    let go = use_page_navigator();
    rsx! {
        ShopLayoutView {
            on_navigate: go,
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Home() -> Element {
    let go = use_page_navigator();
    rsx! {
        HomeView { on_navigate: go }
    }
}

#[component]
pub fn Admin() -> Element {
    let go = use_page_navigator();
    rsx! {
        AdminDashboardView { on_navigate: go }
    }
}

#[component]
pub fn AdminProducts() -> Element {
    let go = use_page_navigator();
    rsx! {
        AdminProductsView { on_navigate: go }
    }
}
