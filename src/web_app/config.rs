// web_app/config.rs - Storefront configuration
//
// The catalog is fetched from the browser, so the base URL has to be known
// by the WASM bundle: it is read from the build environment, not at runtime.

/// Catalog API used when `FAKESTORE_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub api_base_url: String,
}

impl StoreConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("FAKESTORE_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
