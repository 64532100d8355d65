use dioxus::prelude::*;

/// A full-screen backdrop that centers its children in a modal card.
/// Clicking the backdrop triggers `on_close`; clicks inside the card do not.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
