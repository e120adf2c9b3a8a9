use best_foods_core::FoodItem;
use dioxus::prelude::*;

/// A showcased dish; clicking the image selects it.
#[component]
pub fn FoodCard(food: FoodItem, on_select: EventHandler<FoodItem>) -> Element {
    let selected = food.clone();

    rsx! {
        div { class: "food-card",
            div { class: "food-card-inner",
                div { class: "food-card-gradient",
                    h3 { class: "food-card-title", "{food.name}" }
                }
                img {
                    class: "food-card-image",
                    src: "{food.thumbnail}",
                    alt: "{food.name}",
                    width: "300",
                    height: "300",
                    onclick: move |_| on_select.call(selected.clone()),
                }
            }
        }
    }
}
