mod home;
mod not_found;
mod recipe_detail;

pub use home::Home;
pub use not_found::NotFound;
pub use recipe_detail::RecipeDetail;
