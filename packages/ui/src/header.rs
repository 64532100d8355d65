use dioxus::prelude::*;
use store::{Category, User};

use crate::auth_modal::AuthView;
use crate::format::format_vnd;
use crate::icons::{
    FaBoxOpen, FaGauge, FaHouse, FaPhone, FaRightFromBracket, FaUser, FaWallet,
};
use crate::session::{logout, use_auth_modal, use_config, use_session};
use crate::{Icon, Page};

const AVATAR_PLACEHOLDER: Asset = asset!("/assets/avatar-placeholder.svg");

/// Avatar URL to render, or the placeholder when the user has none.
pub fn avatar_src(user: &User) -> String {
    match user.avatar.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => AVATAR_PLACEHOLDER.to_string(),
    }
}

/// Top bar: logo, category links, contact, and the user menu.
#[component]
pub fn Header(on_navigate: EventHandler<Page>) -> Element {
    let config = use_config();
    let shop_name = config.read().shop.name.clone();

    rsx! {
        header {
            class: "site-header",
            button {
                class: "site-header__logo",
                onclick: move |_| on_navigate.call(Page::Home),
                Icon { icon: FaHouse, width: 16, height: 16 }
                span { "{shop_name}" }
            }
            nav {
                class: "site-header__nav",
                for category in Category::ALL {
                    button {
                        key: "{category}",
                        class: "site-header__link",
                        onclick: move |_| on_navigate.call(Page::Products(category)),
                        "{category.as_str().to_uppercase()}"
                    }
                }
                button {
                    class: "site-header__link",
                    onclick: move |_| on_navigate.call(Page::Contact),
                    Icon { icon: FaPhone, width: 12, height: 12 }
                    span { "Contact" }
                }
            }
            UserMenu { on_navigate }
        }
    }
}

#[component]
fn UserMenu(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let mut modal = use_auth_modal();
    let mut open = use_signal(|| false);

    let state = session();
    if state.loading {
        return rsx! {
            div { class: "user-menu user-menu--loading", "..." }
        };
    }

    let Some(user) = state.user else {
        return rsx! {
            div {
                class: "user-menu",
                button {
                    class: "btn btn--outline",
                    onclick: move |_| modal.write().switch(AuthView::Login),
                    "Log in"
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| modal.write().switch(AuthView::Register),
                    "Register"
                }
            }
        };
    };

    let is_admin = user.is_admin();
    let mut go = move |page: Page| {
        open.set(false);
        on_navigate.call(page);
    };

    rsx! {
        div {
            class: "user-menu",
            button {
                class: "user-menu__toggle",
                onclick: move |_| open.toggle(),
                img { class: "avatar avatar--small", src: avatar_src(&user), alt: "avatar" }
                span { class: "user-menu__name", "{user.display_name()}" }
                span { class: "user-menu__balance", "{format_vnd(user.balance)}" }
            }
            if open() {
                div {
                    class: "user-menu__backdrop",
                    onclick: move |_| open.set(false),
                }
                ul {
                    class: "user-menu__dropdown",
                    li {
                        button {
                            onclick: move |_| go(Page::Profile),
                            Icon { icon: FaUser, width: 12, height: 12 }
                            span { "Profile" }
                        }
                    }
                    li {
                        button {
                            onclick: move |_| go(Page::Deposit),
                            Icon { icon: FaWallet, width: 12, height: 12 }
                            span { "Deposit" }
                        }
                    }
                    if is_admin {
                        li {
                            button {
                                onclick: move |_| go(Page::Admin),
                                Icon { icon: FaGauge, width: 12, height: 12 }
                                span { "Dashboard" }
                            }
                        }
                        li {
                            button {
                                onclick: move |_| go(Page::AdminProducts),
                                Icon { icon: FaBoxOpen, width: 12, height: 12 }
                                span { "Manage products" }
                            }
                        }
                    }
                    li {
                        button {
                            onclick: move |_| {
                                open.set(false);
                                logout(session, modal);
                            },
                            Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                            span { "Log out" }
                        }
                    }
                }
            }
        }
    }
}
