use crate::animation::section_id;
use crate::components::FoodCard;
use best_foods_core::{Cuisine, FoodItem};
use dioxus::prelude::*;

/// Heading plus the showcased dishes of one cuisine.
///
/// `on_mounted` fires with the section's DOM id once the element exists.
#[component]
pub fn CuisineSection(
    cuisine: Cuisine,
    foods: Vec<FoodItem>,
    on_select: EventHandler<FoodItem>,
    on_mounted: EventHandler<String>,
) -> Element {
    let id = section_id(cuisine);
    let mounted_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "cuisine-section",
            onmounted: move |_| on_mounted.call(mounted_id.clone()),
            h3 { class: "cuisine-title", "{cuisine}" }
            div { class: "cuisine-grid",
                {foods.iter().map(|food| rsx! {
                    FoodCard { key: "{food.id_meal}", food: food.clone(), on_select }
                })}
            }
        }
    }
}
