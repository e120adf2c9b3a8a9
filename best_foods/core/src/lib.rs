//! Domain logic for the Best Foods landing page.
//!
//! Everything here is independent of the UI framework: the fixed cuisine set,
//! the food records returned by the API, the concurrent loader, recipe
//! navigation and the bookkeeping behind the scroll-triggered entrance
//! animations. The `best_foods_web` crate wires these into Dioxus components.

pub mod animation;
pub mod config;
pub mod cuisine;
pub mod food;
pub mod loader;
pub mod navigation;

pub use animation::{AnimationEngine, EntranceAnimation, PluginGuard, SCROLL_PLUGIN, SectionRefs};
pub use crate::config::FoodsApiConfig;
pub use cuisine::{Cuisine, CuisineParseError};
pub use food::{FoodItem, FoodsByCategory, ViewState};
pub use loader::{FoodsSource, LoadError, load_best_foods, load_view_state};
pub use navigation::{RecipeNavigator, recipe_path, select_food};
