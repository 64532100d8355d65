use dioxus::prelude::*;

use crate::auth_modal::AuthModalHost;
use crate::header::Header;
use crate::session::{use_config, use_session};
use crate::Page;

/// Shared page chrome: header, auth modal, content and footer.
///
/// Platform packages pass their router outlet as children and map [`Page`]
/// onto their own routes.
#[component]
pub fn ShopLayoutView(on_navigate: EventHandler<Page>, children: Element) -> Element {
    let mut session = use_session();
    let config = use_config();
    let shop_name = config.read().shop.name.clone();

    // Follow the landing page chosen by the last sign-in, sign-out or bootstrap.
    use_effect(move || {
        if let Some(page) = session().landing {
            session.write().landing = None;
            on_navigate.call(page);
        }
    });

    rsx! {
        div {
            class: "shop-shell",
            Header { on_navigate }
            main {
                class: "shop-main",
                {children}
            }
            footer {
                class: "shop-footer",
                "© {shop_name}"
            }
            AuthModalHost {}
        }
    }
}
