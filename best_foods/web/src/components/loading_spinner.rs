use dioxus::prelude::*;

/// Spinner shown while the showcase waits for every cuisine to arrive.
#[component]
pub fn LoadingSpinner(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Loading...".to_string());

    rsx! {
        div { class: "loader-container",
            div { class: "loader" }
            p { class: "loader-message", "{message}" }
        }
    }
}
