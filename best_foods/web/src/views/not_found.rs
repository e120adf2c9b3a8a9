use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        div {
            class: "not-found",
            div {
                class: "not-found-content",
                h1 {
                    class: "not-found-code",
                    "404"
                }
                h2 {
                    class: "not-found-title",
                    "Page Not Found"
                }
                p {
                    class: "not-found-message",
                    "Nothing on the menu at {path}."
                }
                Link {
                    to: "/",
                    class: "not-found-home",
                    "Return to Home"
                }
            }
        }
    }
}
