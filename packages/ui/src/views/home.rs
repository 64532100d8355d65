use dioxus::prelude::*;
use store::Category;

use crate::Page;

const TFT_ART: Asset = asset!("/assets/categories/tft.svg");
const LOL_ART: Asset = asset!("/assets/categories/lol.svg");
const LIENQUAN_ART: Asset = asset!("/assets/categories/lienquan.svg");

fn artwork(category: Category) -> Asset {
    match category {
        Category::Tft => TFT_ART,
        Category::Lol => LOL_ART,
        Category::Lienquan => LIENQUAN_ART,
    }
}

/// Landing page: one card per category.
#[component]
pub fn HomeView(on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        section {
            class: "view-page",
            h1 { class: "view-title", "Game accounts" }
            div {
                class: "category-grid",
                for category in Category::ALL {
                    div {
                        key: "{category}",
                        class: "category-card",
                        img { class: "category-card__art", src: artwork(category), alt: category.title() }
                        h2 { class: "category-card__title", "{category.title()}" }
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| on_navigate.call(Page::Products(category)),
                            "View all"
                        }
                    }
                }
            }
        }
    }
}
