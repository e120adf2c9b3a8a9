//! Concurrent fetch-and-merge of the best foods for every cuisine.
//!
//! One request is issued per cuisine and all of them are joined together. The
//! batch is all-or-nothing: the first failure rejects it, and callers only see
//! a mapping once every cuisine has arrived.

use crate::cuisine::Cuisine;
use crate::food::{FoodItem, FoodsByCategory, ViewState};
use futures::future::{AbortRegistration, Abortable, try_join_all};
use thiserror::Error;
use tracing::{debug, error, info, info_span};
use tracing_futures::Instrument;

/// Failure of a single cuisine request; fails the whole batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to fetch foods for {cuisine}: HTTP status {status}")]
    Unsuccessful { cuisine: Cuisine, status: u16 },
    #[error("Failed to fetch foods for {cuisine}: {message}")]
    Transport { cuisine: Cuisine, message: String },
    #[error("Failed to parse foods for {cuisine}: {message}")]
    Parse { cuisine: Cuisine, message: String },
}

impl LoadError {
    /// The cuisine whose request failed.
    pub fn cuisine(&self) -> Cuisine {
        match self {
            LoadError::Unsuccessful { cuisine, .. }
            | LoadError::Transport { cuisine, .. }
            | LoadError::Parse { cuisine, .. } => *cuisine,
        }
    }
}

/// Where food lists come from.
///
/// The web app implements this over HTTP; tests substitute canned responses.
#[cfg_attr(test, mockall::automock)]
pub trait FoodsSource {
    /// Fetches the full, untruncated food list for one cuisine.
    async fn fetch_cuisine(&self, cuisine: Cuisine) -> Result<Vec<FoodItem>, LoadError>;
}

/// Fetches every cuisine concurrently and keeps the first `limit` items of each.
pub async fn load_best_foods<S: FoodsSource>(
    source: &S,
    cuisines: &[Cuisine],
    limit: usize,
) -> Result<FoodsByCategory, LoadError> {
    let requests = cuisines.iter().map(|&cuisine| async move {
        let items = source.fetch_cuisine(cuisine).await?;
        debug!(%cuisine, received = items.len(), "Fetched foods");
        Ok::<_, LoadError>((cuisine, items))
    });

    let results = try_join_all(requests).await?;

    let mut foods = FoodsByCategory::new();
    for (cuisine, items) in results {
        foods.insert_truncated(cuisine, items, limit);
    }
    Ok(foods)
}

/// Runs one load cycle and produces the view state to show afterwards.
///
/// Failures are logged and swallowed, and the showcase falls back to empty
/// sections. Returns `None` when the load was aborted; the caller must then
/// leave its state alone.
pub async fn load_view_state<S: FoodsSource>(
    source: &S,
    cuisines: &[Cuisine],
    limit: usize,
    abort: AbortRegistration,
) -> Option<ViewState> {
    let load = load_best_foods(source, cuisines, limit)
        .instrument(info_span!("load_best_foods", cuisines = cuisines.len()));

    match Abortable::new(load, abort).await {
        Ok(Ok(foods)) => {
            info!("Loaded best foods");
            Some(ViewState::loaded(foods))
        }
        Ok(Err(e)) => {
            error!(cuisine = %e.cuisine(), "Error fetching best foods: {e}");
            Some(ViewState::loaded(FoodsByCategory::new()))
        }
        Err(_aborted) => {
            debug!("Best foods load aborted");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::AbortHandle;
    use mockall::predicate::eq;

    fn item(id: &str, name: &str) -> FoodItem {
        FoodItem {
            id_meal: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("u{id}"),
        }
    }

    #[tokio::test]
    async fn test_load_requests_each_cuisine_once() {
        // Arrange
        let mut source = MockFoodsSource::new();
        for cuisine in Cuisine::ALL {
            source
                .expect_fetch_cuisine()
                .with(eq(cuisine))
                .times(1)
                .returning(|c| Ok(vec![item(c.as_str(), c.as_str())]));
        }

        // Act
        let foods = load_best_foods(&source, &Cuisine::ALL, 2).await.unwrap();

        // Assert
        for cuisine in Cuisine::ALL {
            assert_eq!(foods.items(cuisine).len(), 1);
            assert_eq!(foods.items(cuisine)[0].name, cuisine.as_str());
        }
    }

    #[tokio::test]
    async fn test_load_truncates_to_limit() {
        // Arrange
        let mut source = MockFoodsSource::new();
        source.expect_fetch_cuisine().returning(|_| {
            Ok(vec![item("1", "A"), item("2", "B"), item("3", "C"), item("4", "D")])
        });

        // Act
        let foods = load_best_foods(&source, &Cuisine::ALL, 2).await.unwrap();

        // Assert
        for cuisine in Cuisine::ALL {
            assert!(foods.items(cuisine).len() <= 2);
        }
    }

    #[tokio::test]
    async fn test_load_fails_when_any_cuisine_fails() {
        // Arrange
        let mut source = MockFoodsSource::new();
        source
            .expect_fetch_cuisine()
            .with(eq(Cuisine::Italian))
            .returning(|cuisine| {
                Err(LoadError::Unsuccessful {
                    cuisine,
                    status: 500,
                })
            });
        source
            .expect_fetch_cuisine()
            .returning(|_| Ok(vec![item("1", "A")]));

        // Act
        let result = load_best_foods(&source, &Cuisine::ALL, 2).await;

        // Assert
        assert_eq!(
            result,
            Err(LoadError::Unsuccessful {
                cuisine: Cuisine::Italian,
                status: 500
            })
        );
    }

    #[tokio::test]
    async fn test_view_state_falls_back_to_empty_on_failure() {
        // Arrange
        let mut source = MockFoodsSource::new();
        source.expect_fetch_cuisine().returning(|cuisine| {
            Err(LoadError::Parse {
                cuisine,
                message: "expected value at line 1 column 1".to_string(),
            })
        });
        let (_handle, registration) = AbortHandle::new_pair();

        // Act
        let state = load_view_state(&source, &Cuisine::ALL, 2, registration).await;

        // Assert
        assert_eq!(state, Some(ViewState::loaded(FoodsByCategory::new())));
    }

    #[tokio::test]
    async fn test_aborted_load_produces_no_state() {
        // Arrange
        let mut source = MockFoodsSource::new();
        source.expect_fetch_cuisine().returning(|_| Ok(vec![]));
        let (handle, registration) = AbortHandle::new_pair();
        handle.abort();

        // Act
        let state = load_view_state(&source, &Cuisine::ALL, 2, registration).await;

        // Assert
        assert_eq!(state, None);
    }

    #[test]
    fn test_error_names_failing_cuisine() {
        let error = LoadError::Transport {
            cuisine: Cuisine::Mexican,
            message: "connection refused".to_string(),
        };

        assert_eq!(error.cuisine(), Cuisine::Mexican);
        assert_eq!(
            error.to_string(),
            "Failed to fetch foods for Mexican: connection refused"
        );
    }
}
