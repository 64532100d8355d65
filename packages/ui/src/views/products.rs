use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use store::{Category, Product, ShopConfig};

use crate::auth_modal::AuthModal;
use crate::dialog::{alert, confirm};
use crate::format::{excerpt, format_vnd};
use crate::purchase::{
    check_purchase, confirmation_prompt, receipt_message, settle_purchase, PurchaseBlock,
    PurchaseState,
};
use crate::session::{
    expire_if_unauthorized, make_api, session_store, use_auth_modal, use_config, use_purchases,
    use_session, SessionState,
};

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Products of one category. Each completed purchase remounts the grid,
/// which re-fetches the list.
#[component]
pub fn ProductListView(category: Category) -> Element {
    let purchases = use_purchases();
    let completed = purchases.read().completed;

    rsx! {
        section {
            class: "view-page",
            h1 { class: "view-title", "{category.title()}" }
            ProductGrid { key: "{category}-{completed}", category }
        }
    }
}

#[component]
fn ProductGrid(category: Category) -> Element {
    let config = use_config();
    let products = use_resource(move || async move {
        make_api(&config.peek()).list_products(category).await
    });

    let view = match &*products.read() {
        None => rsx! {
            p { class: "view-hint", "Loading products..." }
        },
        Some(Err(e)) => {
            tracing::error!("Failed to load {} products: {}", category, e);
            rsx! {
                p { class: "notice notice--error", "Could not load products. Please try again later." }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "view-hint", "No accounts in this category yet." }
        },
        Some(Ok(list)) => rsx! {
            div {
                class: "product-grid",
                for product in list.iter().cloned() {
                    ProductCard { key: "{product.id}", product }
                }
            }
        },
    };
    view
}

/// Run the buy flow for `product`.
///
/// Spawned on the root scope: leaving the category or remounting the grid
/// must not cancel a purchase in flight.
fn buy(
    product: Product,
    config: Signal<ShopConfig>,
    mut session: Signal<SessionState>,
    mut modal: Signal<AuthModal>,
    mut purchases: Signal<PurchaseState>,
) {
    spawn_forever(async move {
        let checked = check_purchase(session.peek().user.as_ref(), &product);
        match checked {
            Err(PurchaseBlock::SignInRequired) => {
                modal
                    .write()
                    .require_login(&PurchaseBlock::SignInRequired.message());
                return;
            }
            Err(block) => {
                alert(&block.message());
                return;
            }
            Ok(()) => {}
        }
        if !confirm(&confirmation_prompt(&product)).await {
            return;
        }
        if !purchases.write().start(&product.id) {
            return;
        }

        let result = make_api(&config.peek()).buy_product(&product.id).await;
        match result {
            Ok(receipt) => {
                tracing::info!("Bought product {}", product.id);
                if let Some(user) = session.write().user.as_mut() {
                    settle_purchase(user, product.price, &session_store());
                }
                purchases.write().finish(true);
                alert(&receipt_message(&receipt.product));
            }
            Err(e) => {
                tracing::warn!("Purchase of {} failed: {}", product.id, e);
                purchases.write().finish(false);
                if !expire_if_unauthorized(&e, session, modal) {
                    alert(&e.user_message("Purchase failed. Please try again."));
                }
            }
        }
    });
}

#[component]
fn ProductCard(product: Product) -> Element {
    let config = use_config();
    let session = use_session();
    let modal = use_auth_modal();
    let purchases = use_purchases();

    let state = purchases();
    let busy = state.is_busy();
    let buying = state.is_buying(&product.id);

    let item = product.clone();
    let handle_buy = move |_| buy(item.clone(), config, session, modal, purchases);

    rsx! {
        div {
            class: "product-card",
            img { class: "product-card__image", src: "{product.image}", alt: "{product.name}" }
            div {
                class: "product-card__body",
                h3 { class: "product-card__name", "{product.name}" }
                p {
                    class: "product-card__description",
                    "{excerpt(&product.description, DESCRIPTION_PREVIEW_CHARS)}"
                }
                p { class: "product-card__price", "{format_vnd(product.price)}" }
                button {
                    class: "btn btn--primary",
                    disabled: busy,
                    onclick: handle_buy,
                    if buying { "Buying..." } else { "Buy now" }
                }
            }
        }
    }
}
