use dioxus::prelude::*;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "Discover Flavors From Around the World" }
                p { class: "hero-subtitle",
                    "Hand-picked favorites from Indian, American, Chinese, Italian and Mexican kitchens. "
                    "Scroll down, pick a dish and get cooking."
                }
                a { class: "hero-cta", href: "#best-foods", "Explore Best Foods" }
            }
        }
    }
}
