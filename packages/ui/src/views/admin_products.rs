use api::ProductImage;
use dioxus::prelude::*;
use store::{Category, Product};

use crate::dialog::{alert, confirm, scroll_to_top};
use crate::format::format_vnd;
use crate::notice::{Notice, NoticeLine};
use crate::product_form::{can_edit, ProductForm};
use crate::session::{make_api, use_config, use_session};
use crate::Page;

/// Product manager: create/edit form above the full listing table.
#[component]
pub fn AdminProductsView(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    if !session().is_admin() {
        return rsx! {
            section {
                class: "view-page",
                p { class: "notice notice--error", "This page is for administrators only." }
            }
        };
    }

    rsx! {
        section {
            class: "view-page",
            div {
                class: "view-header",
                h1 { class: "view-title", "Manage products" }
                button {
                    class: "btn btn--outline",
                    onclick: move |_| on_navigate.call(Page::Admin),
                    "Back to dashboard"
                }
            }
            ProductManager {}
        }
    }
}

#[component]
fn ProductManager() -> Element {
    let config = use_config();
    let mut form = use_signal(ProductForm::default);
    let mut image = use_signal(|| Option::<ProductImage>::None);
    // Bumped to remount (and so clear) the file input.
    let mut file_key = use_signal(|| 0u32);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut reload = use_signal(|| 0u32);
    let mut products = use_signal(|| Option::<Result<Vec<Product>, String>>::None);

    let _loader = use_resource(move || async move {
        let _ = reload();
        let loaded = make_api(&config.peek()).admin_products().await.map_err(|e| {
            tracing::error!("Failed to load products: {}", e);
            e.user_message("Could not load products.")
        });
        products.set(Some(loaded));
    });

    let mut reset_form = move || {
        form.set(ProductForm::default());
        image.set(None);
        file_key += 1;
    };

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            image.set(None);
            return;
        };
        match file.read_bytes().await {
            Ok(bytes) => image.set(Some(ProductImage {
                file_name: file.name(),
                content_type: file.content_type(),
                bytes: bytes.to_vec(),
            })),
            Err(e) => {
                tracing::warn!("Could not read product image: {}", e);
                notice.set(Some(Notice::error("Could not read the image file.")));
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let current = form();
        let picked = image();
        if let Err(msg) = current.validate(picked.as_ref()) {
            notice.set(Some(Notice::error(msg)));
            return;
        }
        spawn(async move {
            saving.set(true);
            notice.set(None);
            let api = make_api(&config.peek());
            let fields = current.fields();
            let result = match (&current.editing_id, picked) {
                (Some(id), image) => api.update_product(id, &fields, image).await,
                (None, Some(image)) => api.create_product(&fields, image).await,
                (None, None) => Ok(()),
            };
            match result {
                Ok(()) => {
                    let verb = if current.is_editing() { "updated" } else { "created" };
                    tracing::info!("Product {} {}", fields.name, verb);
                    notice.set(Some(Notice::success(format!("Product {verb}."))));
                    reset_form();
                    reload += 1;
                }
                Err(e) => {
                    tracing::warn!("Saving product failed: {}", e);
                    notice.set(Some(Notice::error(
                        e.user_message("Could not save the product."),
                    )));
                }
            }
            saving.set(false);
        });
    };

    let edit = move |product: Product| {
        if !can_edit(&product) {
            alert("Sold products cannot be edited.");
            return;
        }
        spawn(async move {
            match make_api(&config.peek()).admin_product(&product.id).await {
                Ok(detail) => {
                    form.set(ProductForm::from_product(&detail));
                    image.set(None);
                    file_key += 1;
                    notice.set(None);
                    scroll_to_top();
                }
                Err(e) => {
                    tracing::warn!("Loading product {} failed: {}", product.id, e);
                    alert(&e.user_message("Could not load the product details."));
                }
            }
        });
    };

    let remove = move |product: Product| {
        spawn(async move {
            if !confirm(&format!("Delete \"{}\"? This cannot be undone.", product.name)).await {
                return;
            }
            match make_api(&config.peek()).delete_product(&product.id).await {
                Ok(()) => {
                    tracing::info!("Deleted product {}", product.id);
                    reload += 1;
                }
                Err(e) => {
                    tracing::warn!("Deleting product {} failed: {}", product.id, e);
                    alert(&e.user_message("Could not delete the product."));
                }
            }
        });
    };

    let current = form();
    let editing = current.is_editing();

    rsx! {
        form {
            class: "product-form",
            onsubmit: handle_submit,
            h2 { class: "view-subtitle",
                if editing { "Edit product" } else { "New product" }
            }
            label { r#for: "product-category", "Category" }
            select {
                id: "product-category",
                value: current.category.as_str(),
                onchange: move |evt: FormEvent| {
                    if let Ok(category) = evt.value().parse::<Category>() {
                        form.write().category = category;
                    }
                },
                for category in Category::ALL {
                    option { key: "{category}", value: category.as_str(), "{category.title()}" }
                }
            }
            label { r#for: "product-name", "Name" }
            input {
                id: "product-name",
                r#type: "text",
                value: current.name.clone(),
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }
            label { r#for: "product-description", "Description" }
            textarea {
                id: "product-description",
                rows: "3",
                value: current.description.clone(),
                oninput: move |evt: FormEvent| form.write().description = evt.value(),
            }
            label { r#for: "product-price", "Price (VND)" }
            input {
                id: "product-price",
                r#type: "number",
                min: "0",
                value: "{current.price}",
                oninput: move |evt: FormEvent| form.write().price = evt.value().trim().parse().unwrap_or(0),
            }
            label { r#for: "product-username", "Account username" }
            input {
                id: "product-username",
                r#type: "text",
                value: current.account_username.clone(),
                oninput: move |evt: FormEvent| form.write().account_username = evt.value(),
            }
            label { r#for: "product-password", "Account password" }
            input {
                id: "product-password",
                r#type: "text",
                value: current.account_password.clone(),
                oninput: move |evt: FormEvent| form.write().account_password = evt.value(),
            }
            label { r#for: "product-image",
                if editing { "Image (leave empty to keep the current one)" } else { "Image" }
            }
            input {
                key: "{file_key}",
                id: "product-image",
                r#type: "file",
                accept: "image/*",
                onchange: handle_file,
            }
            div {
                class: "product-form__actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else if editing { "Save changes" } else { "Create product" }
                }
                if editing {
                    button {
                        class: "btn btn--outline",
                        r#type: "button",
                        onclick: move |_| {
                            reset_form();
                            notice.set(None);
                        },
                        "Cancel"
                    }
                }
            }
            NoticeLine { notice: notice() }
        }

        match products() {
            None => rsx! {
                p { class: "view-hint", "Loading products..." }
            },
            Some(Err(msg)) => rsx! {
                p { class: "notice notice--error", "{msg}" }
            },
            Some(Ok(list)) => rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Image" }
                            th { "Name" }
                            th { "Category" }
                            th { "Price" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for product in list {
                            ProductRow {
                                key: "{product.id}",
                                product,
                                on_edit: edit,
                                on_delete: remove,
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn ProductRow(
    product: Product,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<Product>,
) -> Element {
    let sold = product.is_sold();
    let for_edit = product.clone();
    let for_delete = product.clone();

    rsx! {
        tr {
            class: if sold { "data-table__row data-table__row--sold" } else { "data-table__row" },
            td { img { class: "data-table__thumb", src: "{product.image}", alt: "{product.name}" } }
            td { "{product.name}" }
            td { "{product.category_code()}" }
            td { "{format_vnd(product.price)}" }
            td { "{product.status.label()}" }
            td {
                button {
                    class: "btn btn--small",
                    disabled: sold,
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn--small btn--danger",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}
