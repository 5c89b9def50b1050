//! HTTP client for the remote product catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use shopfront_core::config::{CatalogConfig, SortOrder};
use shopfront_core::domain::product::Product;
use shopfront_core::fetch::{CatalogFetchError, CatalogSource, PageRequest};

#[derive(Debug, Error)]
pub enum CatalogClientError {
    #[error("invalid catalog base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// `GET <base>/products?limit=&sort=&page=[&search=]`, decoded as a JSON array.
#[derive(Clone, Debug)]
pub struct HttpCatalogClient {
    client: Client,
    products_endpoint: Url,
    page_size: u32,
    sort: SortOrder,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogClientError> {
        let client =
            Client::builder().timeout(Duration::from_secs(config.timeout_secs.max(1))).build()?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: &CatalogConfig) -> Result<Self, CatalogClientError> {
        let raw = format!("{}/products", config.base_url.trim_end_matches('/'));
        let products_endpoint = Url::parse(&raw).map_err(|error| {
            CatalogClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: error.to_string(),
            }
        })?;
        if products_endpoint.cannot_be_a_base() {
            return Err(CatalogClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        Ok(Self { client, products_endpoint, page_size: config.page_size.max(1), sort: config.sort })
    }

    pub fn products_url(&self, request: &PageRequest) -> Url {
        let mut url = self.products_endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &request.limit(self.page_size).to_string());
            query.append_pair("sort", self.sort.as_str());
            query.append_pair("page", &request.page.to_string());
            if !request.search.is_empty() {
                query.append_pair("search", &request.search);
            }
        }
        url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Product>, CatalogFetchError> {
        let url = self.products_url(request);
        debug!(event_name = "catalog.http.request", url = %url, "requesting catalog page");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| CatalogFetchError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogFetchError::Status { status: status.as_u16(), url: url.to_string() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| CatalogFetchError::Transport(error.to_string()))?;
        serde_json::from_slice::<Vec<Product>>(&body)
            .map_err(|error| CatalogFetchError::Decode(error.to_string()))
    }
}
