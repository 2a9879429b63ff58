use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;
use crate::domain::{Identifier, UserRecord};
use super::{FetchError, UserFetcher};

/// Fetches user records over HTTP from `GET <base_url>/users/{id}`.
#[derive(Debug, Clone)]
pub struct HttpUserFetcher {
    client: Client,
    base_url: Url,
}

impl HttpUserFetcher {
    /// Builds a fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns `FetchError::Network` if the HTTP client cannot be created.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Address of the record for `id`, relative to the base URL's path.
    pub fn user_url(&self, id: Identifier) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("users").push(&id.to_string());
        }
        Ok(url)
    }
}

#[async_trait]
impl UserFetcher for HttpUserFetcher {
    #[instrument(skip(self, id), fields(id = %id))]
    async fn fetch_user(&self, id: Identifier) -> Result<UserRecord, FetchError> {
        let url = self.user_url(id)?;
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "User service rejected request");
            return Err(FetchError::Status(status.as_u16()));
        }

        let user: UserRecord = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(user_name = %user.name, "User record decoded");
        Ok(user)
    }
}
