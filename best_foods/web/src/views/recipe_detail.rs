use crate::Route;
use dioxus::prelude::*;

/// Landing spot for a selected dish, addressed by its meal id.
///
/// Whether the id names a real recipe is not checked here.
#[component]
pub fn RecipeDetail(id: String) -> Element {
    rsx! {
        div { class: "recipe-detail",
            h1 { class: "recipe-title", "Recipe #{id}" }
            p { class: "recipe-subtitle", "Ingredients and instructions for this dish." }
            Link { to: Route::Home {}, class: "recipe-back", "Back to Best Foods" }
        }
    }
}
