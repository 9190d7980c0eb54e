//! HTTP client for the inventory and store-lookup endpoints.
//!
//! Wraps `reqwest` with typed response deserialization and API-key
//! management. Authorization is a bearer-style key sent verbatim in the
//! `Authorization` header. Requests carry no retry policy: a failed page
//! surfaces as an error and the owning query stalls (see
//! [`crate::paginate`]).

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use taplist_core::{Beer, Store};

use crate::error::ApiError;
use crate::paginate::{FetchPages, Page};
use crate::types::{ProductsPage, StoresPage};

const DEFAULT_BASE_URL: &str = "https://lcboapi.com/";

/// Page size requested from the store-lookup endpoint.
const STORES_PER_PAGE: u32 = 100;

/// Client for the inventory REST API.
///
/// Use [`InventoryClient::new`] for production or
/// [`InventoryClient::with_base_url`] to point at a mock server in tests.
pub struct InventoryClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl InventoryClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure the base ends with exactly one slash so that `Url::join`
        // appends the endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of the product catalog.
    ///
    /// `search` is the free-text query; `where_clause` an optional extra
    /// filter condition (e.g. `is_seasonal`).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ApiError::Deserialize`] if the body does not match the expected
    ///   shape.
    pub async fn fetch_products_page(
        &self,
        search: &str,
        where_clause: Option<&str>,
        page: u32,
    ) -> Result<ProductsPage, ApiError> {
        let page_str = page.to_string();
        let mut params = vec![("q", search)];
        if let Some(clause) = where_clause {
            params.push(("where", clause));
        }
        params.push(("page", &page_str));

        let url = self.build_url("products", &params)?;
        self.request_json(&url, &format!("products page {page}"))
            .await
    }

    /// Fetches one page of stores carrying the given product, optionally
    /// biased toward a postal code via the `geo` parameter.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_products_page`].
    pub async fn fetch_stores_page(
        &self,
        product_id: i64,
        geo: Option<&str>,
        page: u32,
    ) -> Result<StoresPage, ApiError> {
        let product_id_str = product_id.to_string();
        let per_page_str = STORES_PER_PAGE.to_string();
        let page_str = page.to_string();
        let mut params = vec![
            ("product_id", product_id_str.as_str()),
            ("per_page", per_page_str.as_str()),
            ("page", page_str.as_str()),
        ];
        if let Some(postal) = geo {
            params.push(("geo", postal));
        }

        let url = self.build_url("stores", &params)?;
        self.request_json(&url, &format!("stores page {page} for product {product_id}"))
            .await
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path).map_err(|e| ApiError::InvalidBaseUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends an authorized GET, asserts a 2xx status, and parses the body.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// The catalog listing as a paginated query.
pub struct CatalogQuery<'a> {
    client: &'a InventoryClient,
    search: String,
    where_clause: Option<String>,
}

impl<'a> CatalogQuery<'a> {
    #[must_use]
    pub fn new(
        client: &'a InventoryClient,
        search: impl Into<String>,
        where_clause: Option<&str>,
    ) -> Self {
        Self {
            client,
            search: search.into(),
            where_clause: where_clause.map(str::to_owned),
        }
    }
}

impl FetchPages for CatalogQuery<'_> {
    type Record = Beer;

    async fn fetch_page(&self, page: u32) -> Result<Page<Beer>, ApiError> {
        let response = self
            .client
            .fetch_products_page(&self.search, self.where_clause.as_deref(), page)
            .await?;
        Ok(Page {
            total_pages: response.pager.total_pages,
            records: response.result.into_iter().map(Beer::from).collect(),
        })
    }
}

/// "Stores carrying product X" as a paginated query, scoped to an optional
/// postal-code hint.
pub struct StoreQuery<'a> {
    client: &'a InventoryClient,
    product_id: i64,
    geo: Option<String>,
}

impl<'a> StoreQuery<'a> {
    #[must_use]
    pub fn new(client: &'a InventoryClient, product_id: i64, geo: Option<&str>) -> Self {
        Self {
            client,
            product_id,
            geo: geo.map(str::to_owned),
        }
    }
}

impl FetchPages for StoreQuery<'_> {
    type Record = Store;

    async fn fetch_page(&self, page: u32) -> Result<Page<Store>, ApiError> {
        let response = self
            .client
            .fetch_stores_page(self.product_id, self.geo.as_deref(), page)
            .await?;
        Ok(Page {
            total_pages: response.pager.total_pages,
            records: response.result.into_iter().map(Store::from).collect(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
