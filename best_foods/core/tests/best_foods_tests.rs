use best_foods_core::{
    Cuisine, FoodItem, FoodsByCategory, FoodsSource, LoadError, ViewState, load_view_state,
};
use futures::future::AbortHandle;
use std::collections::HashMap;

/// Source answering each cuisine with a canned JSON body or an HTTP status.
#[derive(Default)]
struct StubSource {
    bodies: HashMap<Cuisine, &'static str>,
    failures: HashMap<Cuisine, u16>,
}

impl StubSource {
    fn with_body(mut self, cuisine: Cuisine, body: &'static str) -> Self {
        self.bodies.insert(cuisine, body);
        self
    }

    fn with_status(mut self, cuisine: Cuisine, status: u16) -> Self {
        self.failures.insert(cuisine, status);
        self
    }
}

impl FoodsSource for StubSource {
    async fn fetch_cuisine(&self, cuisine: Cuisine) -> Result<Vec<FoodItem>, LoadError> {
        if let Some(&status) = self.failures.get(&cuisine) {
            return Err(LoadError::Unsuccessful { cuisine, status });
        }
        let body = self.bodies.get(&cuisine).copied().unwrap_or("[]");
        serde_json::from_str(body).map_err(|e| LoadError::Parse {
            cuisine,
            message: e.to_string(),
        })
    }
}

const INDIAN_BODY: &str = r#"[
    {"idMeal":"1","strMeal":"A","strMealThumb":"u1"},
    {"idMeal":"2","strMeal":"B","strMealThumb":"u2"},
    {"idMeal":"3","strMeal":"C","strMealThumb":"u3"}
]"#;

async fn run(source: &StubSource) -> anyhow::Result<ViewState> {
    let _ = tracing_subscriber::fmt().try_init();
    let (_handle, registration) = AbortHandle::new_pair();
    load_view_state(source, &Cuisine::ALL, 2, registration)
        .await
        .ok_or_else(|| anyhow::anyhow!("load was aborted"))
}

#[tokio::test]
async fn test_only_first_two_items_are_shown() -> anyhow::Result<()> {
    // Arrange
    let source = StubSource::default().with_body(Cuisine::Indian, INDIAN_BODY);

    // Act
    let state = run(&source).await?;

    // Assert
    assert!(!state.loading);
    let names: Vec<&str> = state
        .foods
        .items(Cuisine::Indian)
        .iter()
        .map(|food| food.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    for cuisine in Cuisine::ALL {
        assert!(state.foods.items(cuisine).len() <= 2);
    }
    Ok(())
}

#[tokio::test]
async fn test_single_failure_falls_back_to_empty() -> anyhow::Result<()> {
    // Arrange
    let source = StubSource::default()
        .with_body(Cuisine::Indian, INDIAN_BODY)
        .with_status(Cuisine::Chinese, 503);

    // Act
    let state = run(&source).await?;

    // Assert
    assert_eq!(state, ViewState::loaded(FoodsByCategory::new()));
    Ok(())
}

#[tokio::test]
async fn test_malformed_body_falls_back_to_empty() -> anyhow::Result<()> {
    // Arrange
    let source = StubSource::default().with_body(Cuisine::Mexican, "<html>oops</html>");

    // Act
    let state = run(&source).await?;

    // Assert
    assert!(!state.loading);
    assert!(state.foods.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_arrays_render_every_section() -> anyhow::Result<()> {
    // Arrange
    let source = StubSource::default();

    // Act
    let state = run(&source).await?;

    // Assert
    assert!(!state.loading);
    let sections: Vec<(Cuisine, usize)> = state
        .foods
        .sections(&Cuisine::ALL)
        .map(|(cuisine, items)| (cuisine, items.len()))
        .collect();
    assert_eq!(sections.len(), 5);
    assert!(sections.iter().all(|(_, len)| *len == 0));
    assert!(Cuisine::ALL.iter().all(|&c| state.foods.contains(c)));
    Ok(())
}
