mod best_foods;
mod cuisine_section;
mod food_card;
mod hero_section;
mod loading_spinner;

pub use best_foods::BestFoods;
pub use cuisine_section::CuisineSection;
pub use food_card::FoodCard;
pub use hero_section::HeroSection;
pub use loading_spinner::LoadingSpinner;
