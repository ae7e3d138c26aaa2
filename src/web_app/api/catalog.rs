// web_app/api/catalog.rs - Catalog API client
//
// Thin HTTP GET wrapper around the remote catalog (Fake Store API by default).
// Runs in the browser through reqwest's wasm backend and natively in tests.
//
// Philosophy:
// - One request per call: no retry, no timeout, no cache
// - URL construction is a pure function so it can be tested without a network
// - Failures are typed (CatalogError); deciding what to do with them is the
//   caller's job

use reqwest::Url;
use serde::de::DeserializeOwned;

use super::error::CatalogError;
use crate::web_app::model::{CategorySelection, Product};

/// The catalog endpoints the storefront consumes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEndpoint {
    /// `GET /products/categories`
    Categories,
    /// `GET /products` or `GET /products/category/{name}`
    Products(CategorySelection),
}

impl CatalogEndpoint {
    /// Resolve this endpoint against a base URL.
    ///
    /// Category names become a single percent-encoded path segment, so
    /// `men's clothing` is requested as `men's%20clothing`.
    pub fn url(&self, base_url: &str) -> Result<Url, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| invalid("URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            match self {
                CatalogEndpoint::Categories => {
                    segments.extend(["products", "categories"]);
                }
                CatalogEndpoint::Products(CategorySelection::All) => {
                    segments.push("products");
                }
                CatalogEndpoint::Products(CategorySelection::Named(name)) => {
                    segments.extend(["products", "category", name.as_str()]);
                }
            }
        }
        Ok(url)
    }
}

/// HTTP client for the catalog API
#[derive(Clone, Debug)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw category labels, in the order the API returns them.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&CatalogEndpoint::Categories).await
    }

    /// Fetch the product list, scoped to a category unless `All` is selected.
    pub async fn fetch_products(
        &self,
        selection: &CategorySelection,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&CatalogEndpoint::Products(selection.clone())).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &CatalogEndpoint,
    ) -> Result<T, CatalogError> {
        let url = endpoint.url(&self.base_url)?;
        let url_display = url.to_string();

        tracing::debug!("Catalog request: GET {}", url_display);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url_display.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url_display,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| CatalogError::Decode {
                url: url_display,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://fakestoreapi.com";

    #[test]
    fn test_categories_url() {
        let url = CatalogEndpoint::Categories.url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/categories");
    }

    #[test]
    fn test_all_products_url() {
        let url = CatalogEndpoint::Products(CategorySelection::All).url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products");
    }

    #[test]
    fn test_category_products_url_is_encoded() {
        let selection = CategorySelection::Named("men's clothing".to_string());
        let url = CatalogEndpoint::Products(selection).url(BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://fakestoreapi.com/products/category/men's%20clothing"
        );
    }

    #[test]
    fn test_category_with_slash_stays_one_segment() {
        let selection = CategorySelection::Named("a/b".to_string());
        let url = CatalogEndpoint::Products(selection).url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/category/a%2Fb");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let url = CatalogEndpoint::Categories
            .url("http://localhost:8080/api/")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/products/categories");

        let url = CatalogEndpoint::Products(CategorySelection::All)
            .url("http://localhost:8080/api")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/products");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = CatalogEndpoint::Categories.url("not a url");
        assert!(matches!(result, Err(CatalogError::InvalidBaseUrl { .. })));

        let result = CatalogEndpoint::Categories.url("mailto:shop@example.com");
        assert!(matches!(result, Err(CatalogError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_client_keeps_base_url() {
        let client = CatalogClient::new(BASE);
        assert_eq!(client.base_url(), BASE);
    }
}
