use dioxus::prelude::*;

use crate::session::use_config;

#[component]
pub fn ContactView() -> Element {
    let config = use_config();
    let shop_name = config.read().shop.name.clone();

    rsx! {
        section {
            class: "view-page view-page--narrow",
            h1 { class: "view-title", "Contact" }
            p { "Questions about an order or a deposit? Get in touch with the {shop_name} team." }
            p {
                class: "view-hint",
                "Deposits are approved manually by an administrator."
            }
        }
    }
}
