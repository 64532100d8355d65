use dioxus::prelude::*;

use crate::deposit::{confirm_transfer, parse_amount, start_deposit, DepositStep};
use crate::format::format_vnd;
use crate::notice::{Notice, NoticeLine};
use crate::session::{make_api, use_config, use_session};

const PAYMENT_QR: Asset = asset!("/assets/payment-qr.svg");

/// Three-step top-up wizard.
#[component]
pub fn DepositView() -> Element {
    let config = use_config();
    let session = use_session();
    let mut step = use_signal(DepositStep::default);
    let mut amount = use_signal(|| config.peek().deposit.default_amount);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut busy = use_signal(|| false);

    if !session().is_logged_in() {
        return rsx! {
            section {
                class: "view-page view-page--narrow",
                p { class: "view-hint", "Please log in to top up your balance." }
            }
        };
    }

    let deposit = config.read().deposit.clone();

    let handle_amount = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            notice.set(None);
            let settings = config.peek().deposit.clone();
            let api = make_api(&config.peek());
            match start_deposit(&api, &settings, amount()).await {
                Ok(next) => step.set(next),
                Err(msg) => notice.set(Some(Notice::error(msg))),
            }
            busy.set(false);
        });
    };

    let handle_transferred = move |_| {
        let Some(value) = step().amount() else {
            return;
        };
        spawn(async move {
            busy.set(true);
            notice.set(None);
            match confirm_transfer(&make_api(&config.peek()), value).await {
                Ok(next) => step.set(next),
                Err(msg) => notice.set(Some(Notice::error(msg))),
            }
            busy.set(false);
        });
    };

    let current = step();

    rsx! {
        section {
            class: "view-page view-page--narrow",
            h1 { class: "view-title", "Top up" }
            ol {
                class: "deposit-steps",
                for (i, label) in ["Amount", "Payment", "Done"].into_iter().enumerate() {
                    li {
                        key: "{label}",
                        class: if i + 1 == current.index() { "deposit-steps__item deposit-steps__item--active" } else { "deposit-steps__item" },
                        "{label}"
                    }
                }
            }

            match current {
                DepositStep::Amount => rsx! {
                    form {
                        class: "deposit-form",
                        onsubmit: handle_amount,
                        p { "Choose a quick amount:" }
                        div {
                            class: "quick-amounts",
                            for value in deposit.quick_amounts.iter().copied() {
                                button {
                                    key: "{value}",
                                    r#type: "button",
                                    class: if amount() == value { "quick-amounts__btn quick-amounts__btn--active" } else { "quick-amounts__btn" },
                                    onclick: move |_| amount.set(value),
                                    "{format_vnd(value)}"
                                }
                            }
                        }
                        label { r#for: "deposit-amount", "Or enter an amount (VND):" }
                        input {
                            id: "deposit-amount",
                            r#type: "number",
                            min: "{deposit.min_amount}",
                            required: true,
                            value: "{amount()}",
                            placeholder: "Minimum {format_vnd(deposit.min_amount)}",
                            oninput: move |evt: FormEvent| amount.set(parse_amount(&evt.value()).unwrap_or(0)),
                        }
                        button {
                            class: "btn btn--primary btn--full",
                            r#type: "submit",
                            disabled: busy(),
                            "Confirm amount"
                        }
                    }
                },
                DepositStep::Payment { amount: value } => rsx! {
                    div {
                        class: "deposit-payment",
                        h2 { "Scan the QR code to pay" }
                        p { class: "view-hint", "Use your banking app to scan the code below." }
                        img { class: "deposit-payment__qr", src: PAYMENT_QR, alt: "Bank transfer QR code" }
                        p {
                            strong { "Transfer note (required):" }
                            br {}
                            code { "{deposit.transfer_note}" }
                        }
                        p {
                            strong { "Amount:" }
                            br {}
                            strong { "{format_vnd(value)}" }
                        }
                        button {
                            class: "btn btn--primary btn--full",
                            disabled: busy(),
                            onclick: handle_transferred,
                            "I have transferred"
                        }
                    }
                },
                DepositStep::Submitted { amount: value } => rsx! {
                    div {
                        class: "deposit-done",
                        div { class: "deposit-done__check", "✔" }
                        h2 { "Deposit request sent!" }
                        p {
                            "Your deposit of "
                            strong { "{format_vnd(value)}" }
                            " has been recorded. An admin will credit your balance shortly."
                        }
                        button {
                            class: "btn btn--outline",
                            onclick: move |_| step.set(DepositStep::Amount),
                            "Deposit again"
                        }
                    }
                },
            }
            NoticeLine { notice: notice() }
        }
    }
}
