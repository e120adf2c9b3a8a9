use crate::Route;
use best_foods_core::RecipeNavigator;
use dioxus::router::Navigator;

/// Recipe navigation through the app router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(Navigator);

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self(navigator)
    }
}

impl RecipeNavigator for RouterNavigator {
    fn open_recipe(&self, id_meal: &str) {
        self.0.push(Route::RecipeDetail {
            id: id_meal.to_string(),
        });
    }
}
