use dioxus::prelude::*;

use crate::admin::Dashboard;
use crate::dialog::{alert, confirm};
use crate::format::{format_amount, format_timestamp, format_vnd};
use crate::session::{make_api, use_config, use_session};
use crate::Page;

/// Revenue figures, the pending-deposit queue and admin tools.
#[component]
pub fn AdminDashboardView(on_navigate: EventHandler<Page>) -> Element {
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
                h1 { class: "view-title", "Admin dashboard" }
                button {
                    class: "btn btn--outline",
                    onclick: move |_| on_navigate.call(Page::AdminProducts),
                    "Manage products"
                }
            }
            DashboardPanels {}
            SeedTool {}
        }
    }
}

#[component]
fn DashboardPanels() -> Element {
    let config = use_config();
    let mut dashboard = use_signal(|| Option::<Result<Dashboard, String>>::None);

    let _loader = use_resource(move || async move {
        let loaded = Dashboard::load(&make_api(&config.peek()))
            .await
            .map_err(|e| {
                tracing::error!("Failed to load dashboard: {}", e);
                e.user_message("Could not load the dashboard.")
            });
        dashboard.set(Some(loaded));
    });

    let approve = move |id: String| {
        spawn(async move {
            if !confirm("Approve this deposit? The user's balance will be credited.").await {
                return;
            }
            match make_api(&config.peek()).approve_deposit(&id).await {
                Ok(response) => {
                    tracing::info!("Approved deposit {}", id);
                    alert(&response.message);
                    if let Some(Ok(data)) = dashboard.write().as_mut() {
                        data.approved(&id);
                    }
                }
                Err(e) => {
                    tracing::warn!("Approving deposit {} failed: {}", id, e);
                    alert(&e.user_message("Could not approve the deposit."));
                }
            }
        });
    };

    match dashboard() {
        None => rsx! {
            p { class: "view-hint", "Loading dashboard..." }
        },
        Some(Err(msg)) => rsx! {
            p { class: "notice notice--error", "{msg}" }
        },
        Some(Ok(data)) => rsx! {
            div {
                class: "stat-grid",
                div {
                    class: "stat-card",
                    span { class: "stat-card__label", "Total revenue" }
                    span { class: "stat-card__value", "{format_vnd(data.stats.summary.total_revenue)}" }
                }
                div {
                    class: "stat-card",
                    span { class: "stat-card__label", "Accounts sold" }
                    span { class: "stat-card__value", "{data.stats.summary.total_purchases}" }
                }
                div {
                    class: "stat-card",
                    span { class: "stat-card__label", "Users" }
                    span { class: "stat-card__value", "{data.stats.total_users}" }
                }
            }

            h2 { class: "view-subtitle", "Pending deposits ({data.pending.len()})" }
            if data.pending.is_empty() {
                p { class: "view-hint", "No deposits waiting for approval." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Time" }
                            th { "E-mail" }
                            th { "Name" }
                            th { "Amount (VND)" }
                            th { "" }
                        }
                    }
                    tbody {
                        for deposit in data.pending.iter().cloned() {
                            tr {
                                key: "{deposit.id}",
                                td { "{format_timestamp(&deposit.created_at)}" }
                                td { "{deposit.user.email}" }
                                td { "{deposit.user.name}" }
                                td { "{format_amount(deposit.amount)}" }
                                td {
                                    button {
                                        class: "btn btn--primary btn--small",
                                        onclick: move |_| approve(deposit.id.clone()),
                                        "Approve"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn SeedTool() -> Element {
    let config = use_config();
    let mut seeding = use_signal(|| false);

    let handle_seed = move |_| {
        spawn(async move {
            if !confirm("Create demo products for testing?").await {
                return;
            }
            seeding.set(true);
            match make_api(&config.peek()).seed_products().await {
                Ok(response) => {
                    tracing::info!("Seeded demo products");
                    alert(&response.message);
                }
                Err(e) => {
                    tracing::warn!("Seeding failed: {}", e);
                    alert(&e.user_message("Could not create demo products."));
                }
            }
            seeding.set(false);
        });
    };

    rsx! {
        div {
            class: "admin-tools",
            h2 { class: "view-subtitle", "Tools" }
            button {
                class: "btn btn--outline",
                disabled: seeding(),
                onclick: handle_seed,
                if seeding() { "Seeding..." } else { "Seed demo products" }
            }
        }
    }
}
