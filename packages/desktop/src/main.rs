use dioxus::prelude::*;

use store::Category;
use ui::Page;
use views::{Admin, AdminProducts, Contact, Deposit, Home, Products, Profile, ShopLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ShopLayout)]
        #[route("/")]
        Home {},
        #[route("/category/:category")]
        Products { category: Category },
        #[route("/profile")]
        Profile {},
        #[route("/deposit")]
        Deposit {},
        #[route("/admin")]
        Admin {},
        #[route("/admin/products")]
        AdminProducts {},
        #[route("/contact")]
        Contact {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Products(category) => Route::Products { category },
            Page::Profile => Route::Profile {},
            Page::Deposit => Route::Deposit {},
            Page::Admin => Route::Admin {},
            Page::AdminProducts => Route::AdminProducts {},
            Page::Contact => Route::Contact {},
        }
    }
}

fn main() {
    dioxus::launch(App);
}

/// Same shell as the browser build; the session is persisted to files under
/// the user's data directory instead of `localStorage`.
#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::SHOP_CSS }

        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
