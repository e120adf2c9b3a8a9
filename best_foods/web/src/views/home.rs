use crate::components::{BestFoods, HeroSection};
use dioxus::prelude::*;

/// The landing page: hero banner followed by the best foods showcase.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            HeroSection {}
            BestFoods {}
        }
    }
}
