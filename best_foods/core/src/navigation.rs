use crate::food::FoodItem;

/// Path of the recipe detail page for a meal id.
///
/// The id is not checked; resolving it is the detail page's job.
pub fn recipe_path(id_meal: &str) -> String {
    format!("/recipes/{id_meal}")
}

/// Something that can take the user to a recipe's detail page.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeNavigator {
    fn open_recipe(&self, id_meal: &str);
}

/// Handles a click on a showcased food.
pub fn select_food<N: RecipeNavigator + ?Sized>(navigator: &N, food: &FoodItem) {
    tracing::debug!(id_meal = %food.id_meal, "Opening recipe");
    navigator.open_recipe(&food.id_meal);
}
