use best_foods_core::{Cuisine, FoodItem, FoodsApiConfig, FoodsSource, LoadError};
use tracing::debug;

/// Origin of the page hosting the app, if it runs in a browser.
#[cfg(feature = "web")]
async fn page_origin() -> Option<String> {
    dioxus::document::eval("return window.location.origin;")
        .join::<String>()
        .await
        .ok()
}

#[cfg(not(feature = "web"))]
async fn page_origin() -> Option<String> {
    None
}

/// Fetches food lists from the best-foods HTTP endpoint.
pub struct HttpFoodsSource {
    client: reqwest::Client,
    url: String,
}

impl HttpFoodsSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Source for the endpoint on the page's own origin, falling back to the
    /// configured origin outside the browser.
    pub async fn for_page(config: &FoodsApiConfig) -> Self {
        let origin = page_origin().await;
        Self::new(config.endpoint_url_for(origin.as_deref()))
    }
}

impl FoodsSource for HttpFoodsSource {
    async fn fetch_cuisine(&self, cuisine: Cuisine) -> Result<Vec<FoodItem>, LoadError> {
        debug!(%cuisine, url = %self.url, "Requesting best foods");
        let response = self
            .client
            .get(&self.url)
            .query(&[("cuisine", cuisine.as_str())])
            .send()
            .await
            .map_err(|e| LoadError::Transport {
                cuisine,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Unsuccessful {
                cuisine,
                status: status.as_u16(),
            });
        }

        response.json::<Vec<FoodItem>>().await.map_err(|e| {
            if e.is_decode() {
                LoadError::Parse {
                    cuisine,
                    message: e.to_string(),
                }
            } else {
                LoadError::Transport {
                    cuisine,
                    message: e.to_string(),
                }
            }
        })
    }
}
