use crate::animation::EvalAnimationEngine;
use crate::api::HttpFoodsSource;
use crate::components::{CuisineSection, LoadingSpinner};
use crate::navigation::RouterNavigator;
use best_foods_core::{
    Cuisine, EntranceAnimation, FoodItem, FoodsApiConfig, SCROLL_PLUGIN, SectionRefs, ViewState,
    load_view_state, select_food,
};
use dioxus::prelude::*;
use futures::future::AbortHandle;
use tracing::warn;

/// Showcase of the best foods per cuisine.
///
/// The load starts on mount and is aborted on unmount, so the view state is
/// never written after teardown.
#[component]
pub fn BestFoods() -> Element {
    let mut view = use_signal(ViewState::default);
    let sections = use_signal(SectionRefs::<String>::new);
    let navigator = RouterNavigator::new(use_navigator());

    let abort = use_hook(move || {
        let (handle, registration) = AbortHandle::new_pair();
        spawn(async move {
            let config = FoodsApiConfig::load().unwrap_or_else(|e| {
                warn!("Invalid best foods configuration, using defaults: {e}");
                FoodsApiConfig::default()
            });
            let source = HttpFoodsSource::for_page(&config).await;
            let state =
                load_view_state(&source, &Cuisine::ALL, config.items_per_cuisine, registration)
                    .await;
            if let Some(state) = state {
                view.set(state);
            }
        });
        handle
    });
    use_drop(move || abort.abort());

    // Sections only mount once the load has finished, so triggers are
    // registered against their final layout.
    let on_section_mounted = move |cuisine: Cuisine, id: String| {
        let mut sections = sections;
        let mut refs = sections.write();
        refs.register(cuisine, Some(id));
        refs.animate_pending(
            &EvalAnimationEngine,
            &SCROLL_PLUGIN,
            &EntranceAnimation::default(),
        );
    };

    let loading = view.read().loading;
    let showcase: Vec<(Cuisine, Vec<FoodItem>)> = view
        .read()
        .foods
        .sections(&Cuisine::ALL)
        .map(|(cuisine, foods)| (cuisine, foods.to_vec()))
        .collect();

    rsx! {
        div { id: "best-foods", class: "best-foods",
            div { class: "best-foods-content",
                h2 { class: "best-foods-title", "Best Foods" }

                if loading {
                    LoadingSpinner { message: "Loading best foods...".to_string() }
                } else {
                    {showcase.into_iter().map(|(cuisine, foods)| rsx! {
                        CuisineSection {
                            key: "{cuisine}",
                            cuisine,
                            foods,
                            on_select: move |food: FoodItem| select_food(&navigator, &food),
                            on_mounted: move |id: String| on_section_mounted(cuisine, id),
                        }
                    })}
                }
            }
        }
    }
}
