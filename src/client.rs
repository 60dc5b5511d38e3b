use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::CatalogError;
use crate::types::RawUser;

pub struct CatalogClient {
    http: Client,
    endpoint: Url,
}

impl CatalogClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the full user collection with a single GET.
    ///
    /// The body is read to completion before parsing, so a decode failure is
    /// always reported as `Parse` and never as a partial result.
    pub async fn fetch_users(&self) -> Result<Vec<RawUser>, CatalogError> {
        debug!(endpoint = %self.endpoint, "fetching user catalog");

        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Response {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "catalog response received");

        Ok(serde_json::from_slice(&body)?)
    }
}
