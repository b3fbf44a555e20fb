//! HTTP client for the vendor's product-option API.
//!
//! The API is a single POST endpoint: every request carries the product
//! group and the attribute path selected so far, and the response is the
//! corresponding option-tree node. There is deliberately no retry here —
//! the crawl is a best-effort census and a failed node simply ends that
//! branch at the walker.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScrapeError;
use crate::path::AttributePath;
use crate::types::OptionTreeResponse;

/// Client for the vendor's product-option endpoint.
///
/// Handles not-found (404) and other non-2xx responses as typed errors.
/// Timeouts are fixed per call via the underlying `reqwest::Client`.
pub struct OptionApiClient {
    client: Client,
    endpoint: Url,
    product_group: String,
}

impl OptionApiClient {
    /// Creates an `OptionApiClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidEndpoint`] if `endpoint` is not a valid
    /// URL, or [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        endpoint: &str,
        product_group: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| ScrapeError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client,
            endpoint,
            product_group: product_group.to_owned(),
        })
    }

    /// Fetches the option-tree node addressed by `path`.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::NotFound`] — HTTP 404.
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScrapeError::Http`] — network, TLS, or timeout failure.
    /// - [`ScrapeError::Deserialize`] — response body is not a valid node.
    pub async fn fetch_options(
        &self,
        path: &AttributePath,
    ) -> Result<OptionTreeResponse, ScrapeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&self.node_request(path))
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound {
                url: self.endpoint.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<OptionTreeResponse>(&body).map_err(|e| ScrapeError::Deserialize {
            context: format!("option tree node at {path}"),
            source: e,
        })
    }

    /// Builds the request payload for the node addressed by `path`.
    fn node_request(&self, path: &AttributePath) -> serde_json::Value {
        serde_json::json!({
            "product_group": self.product_group,
            "attr_options": path.segments(),
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
