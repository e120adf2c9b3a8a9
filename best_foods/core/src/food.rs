use crate::cuisine::Cuisine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A dish as returned by the best-foods API.
///
/// Fields are taken verbatim from the response; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "idMeal")]
    pub id_meal: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: String,
}

/// Items to showcase, grouped by cuisine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodsByCategory {
    foods: BTreeMap<Cuisine, Vec<FoodItem>>,
}

impl FoodsByCategory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the first `limit` items for a cuisine, replacing any previous entry.
    pub fn insert_truncated(&mut self, cuisine: Cuisine, mut items: Vec<FoodItem>, limit: usize) {
        items.truncate(limit);
        self.foods.insert(cuisine, items);
    }

    /// Items for a cuisine; absent cuisines read as empty.
    pub fn items(&self, cuisine: Cuisine) -> &[FoodItem] {
        self.foods.get(&cuisine).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, cuisine: Cuisine) -> bool {
        self.foods.contains_key(&cuisine)
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// One entry per requested cuisine, in the given order, including empty ones.
    pub fn sections<'a>(
        &'a self,
        cuisines: &'a [Cuisine],
    ) -> impl Iterator<Item = (Cuisine, &'a [FoodItem])> + 'a {
        cuisines
            .iter()
            .map(move |&cuisine| (cuisine, self.items(cuisine)))
    }
}

/// Local state of the best-foods showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub foods: FoodsByCategory,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            loading: true,
            foods: FoodsByCategory::default(),
        }
    }
}

impl ViewState {
    /// The state once a load cycle has finished, successfully or not.
    pub fn loaded(foods: FoodsByCategory) -> Self {
        Self {
            loading: false,
            foods,
        }
    }
}
