use best_foods_core::{AnimationEngine, Cuisine, EntranceAnimation};
use dioxus::prelude::*;

/// Defines `window.bestFoodsReveal`, an IntersectionObserver-based scroll trigger.
const REVEAL_JS: &str = include_str!("../assets/reveal.js");

/// DOM id of the section showcasing `cuisine`.
pub fn section_id(cuisine: Cuisine) -> String {
    format!("best-foods-{}", cuisine.as_str().to_lowercase())
}

/// Drives entrance animations in the page through `document::eval`.
///
/// Handles are DOM element ids.
#[derive(Clone, Copy, Default)]
pub struct EvalAnimationEngine;

impl AnimationEngine for EvalAnimationEngine {
    type Handle = String;

    fn register_scroll_plugin(&self) {
        let _ = document::eval(REVEAL_JS);
    }

    fn animate_entrance(&self, handle: &Self::Handle, animation: &EntranceAnimation) {
        let _ = document::eval(&reveal_call(handle, animation));
    }
}

fn reveal_call(id: &str, animation: &EntranceAnimation) -> String {
    let options = serde_json::json!({
        "fromOpacity": animation.from_opacity,
        "fromY": animation.from_y,
        "toOpacity": animation.to_opacity,
        "toY": animation.to_y,
        "duration": animation.duration_secs,
        "ease": animation.ease,
        "rootMargin": animation.viewport_margin(),
        "reverse": animation.reverses_on_leave_back(),
    });
    format!(
        "window.bestFoodsReveal && window.bestFoodsReveal({}, {});",
        serde_json::Value::from(id),
        options
    )
}
