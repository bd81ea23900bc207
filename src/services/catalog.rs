use crate::config::BackendSettings;
use crate::models::CatalogEntry;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("BACKEND_API must start with http:// or https://, got: {0:?}")]
    InvalidBaseUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Backend returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl CatalogError {
    /// Whether the error comes from local configuration rather than the backend
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidBaseUrl(_) | Self::ClientBuild(_))
    }

    /// Stable machine-readable code reported to callers
    pub fn code(&self) -> &'static str {
        if self.is_configuration() {
            "invalid_configuration"
        } else {
            "failed_to_fetch_backend"
        }
    }
}

/// Build the products resource URL from a backend base URL.
pub fn products_url_from_base(base: &str) -> Result<String, CatalogError> {
    let base = base.trim();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(CatalogError::InvalidBaseUrl(base.to_string()));
    }

    Ok(format!("{}/products", base.trim_end_matches('/')))
}

/// Client for the backend product catalog
///
/// The products URL is validated once at construction, so a misconfigured
/// backend is reported before any request is sent.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    products_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let products_url = products_url_from_base(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CatalogError::ClientBuild)?;

        Ok(Self {
            products_url,
            client,
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self, CatalogError> {
        Self::new(&settings.api, settings.timeout())
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    /// Fetch every product in the catalog
    pub async fn fetch_products(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let response = self
            .client
            .get(&self.products_url)
            .send()
            .await
            .map_err(CatalogError::Request)?;

        let status = response.status();
        tracing::info!("Fetched products from backend {}: {}", self.products_url, status);

        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                url: self.products_url.clone(),
            });
        }

        let body = response.bytes().await.map_err(CatalogError::Request)?;

        let products: Vec<CatalogEntry> = serde_json::from_slice(&body)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse products: {}", e)))?;

        tracing::debug!("Parsed {} products from {}", products.len(), self.products_url);

        Ok(products)
    }
}
