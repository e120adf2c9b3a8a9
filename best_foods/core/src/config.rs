use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "/api/bestFoods";
pub const DEFAULT_ITEMS_PER_CUISINE: usize = 2;

/// Where the best-foods API lives and how much of it to show.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FoodsApiConfig {
    /// Scheme and authority of the API. Only used when the app is not
    /// served from a page (desktop, mobile); in the browser the page's own
    /// origin wins.
    #[serde(default)]
    pub origin: Option<String>,
    /// Path of the best-foods endpoint.
    pub endpoint: String,
    pub items_per_cuisine: usize,
}

impl Default for FoodsApiConfig {
    fn default() -> Self {
        Self {
            origin: option_env!("BEST_FOODS_ORIGIN").map(str::to_string),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            items_per_cuisine: DEFAULT_ITEMS_PER_CUISINE,
        }
    }
}

impl FoodsApiConfig {
    /// Loads the configuration, letting `BEST_FOODS_*` environment variables
    /// override the defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::Environment::with_prefix("BEST_FOODS"))
    }

    fn load_from<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("items_per_cuisine", defaults.items_per_cuisine as u64)?;
        if let Some(origin) = defaults.origin {
            builder = builder.set_default("origin", origin)?;
        }
        let settings = builder.add_source(source).build()?;

        settings.try_deserialize()
    }

    /// Endpoint URL against the configured origin, or a same-origin path
    /// when none is configured.
    pub fn endpoint_url(&self) -> String {
        self.endpoint_url_for(None)
    }

    /// Endpoint URL for an app served from `page_origin`.
    ///
    /// The page origin takes precedence over the configured one.
    pub fn endpoint_url_for(&self, page_origin: Option<&str>) -> String {
        let path = format!("/{}", self.endpoint.trim_start_matches('/'));
        match page_origin.or(self.origin.as_deref()) {
            Some(origin) => format!("{}{}", origin.trim_end_matches('/'), path),
            None => path,
        }
    }
}
