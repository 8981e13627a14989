//! The lookup client and its shared request path.

use crate::error::{LookupError, Result};
use crate::request::LookupRequest;
use crate::status::{self, StatusClass};
use breachwatch_core::{BreachRecord, ClientConfig, PasteRecord};
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "hibp-api-key";

/// Client for the Have I Been Pwned v3 API.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// can be used from several tasks at once.
#[derive(Debug, Clone)]
pub struct LookupClient {
    config: ClientConfig,
    base_url: Url,
    client: Client,
}

impl LookupClient {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Internal(format!("failed to create HTTP client: {e}")))?;

        if config.api_key.is_none() {
            tracing::debug!("No API key configured, account lookups will be rejected");
        }

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    /// Create a client from the config file plus environment overrides,
    /// including `HIBP_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::load_with_env()?)
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// All breaches `account` appears in.
    ///
    /// With `truncate` set the service returns names only. Unverified
    /// breaches are left out unless `include_unverified` is set. An empty
    /// `domain_filter` applies no filter. An account with no breaches yields
    /// an empty vector.
    pub async fn search_by_account(
        &self,
        account: &str,
        domain_filter: &str,
        truncate: bool,
        include_unverified: bool,
    ) -> Result<Vec<BreachRecord>> {
        let request =
            LookupRequest::breached_account(account, domain_filter, truncate, include_unverified);
        Ok(self.fetch(&request).await?.unwrap_or_default())
    }

    /// Every breach known to the service, optionally limited to one domain.
    pub async fn list_all_breaches(&self, domain_filter: &str) -> Result<Vec<BreachRecord>> {
        let request = LookupRequest::breaches(domain_filter);
        Ok(self.fetch(&request).await?.unwrap_or_default())
    }

    /// A single breach by its stable name.
    ///
    /// An unknown name yields the zero-value record; check it with
    /// [`BreachRecord::is_empty`].
    pub async fn get_breach_by_name(&self, name: &str) -> Result<BreachRecord> {
        let request = LookupRequest::breach(name);
        Ok(self.fetch(&request).await?.unwrap_or_default())
    }

    /// All pastes `email` appears in.
    ///
    /// Only email addresses are searchable; anything else is rejected by the
    /// service with [`LookupError::InvalidFormat`].
    pub async fn pastes_by_account(&self, email: &str) -> Result<Vec<PasteRecord>> {
        let request = LookupRequest::paste_account(email);
        Ok(self.fetch(&request).await?.unwrap_or_default())
    }

    /// Send `request` and decode a success body. `None` means 404.
    async fn fetch<T: DeserializeOwned>(&self, request: &LookupRequest) -> Result<Option<T>> {
        let url = request.url(&self.base_url)?;

        let mut builder = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str());
        if let Some(key) = &self.config.api_key {
            builder = builder.header(API_KEY_HEADER, key.as_str());
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(
            operation = %request.operation,
            status = status.as_u16(),
            "Lookup response received"
        );

        match status::classify(status, status::retry_after(response.headers())) {
            StatusClass::Success => {
                let body = response.bytes().await?;
                let value = serde_json::from_slice(&body)?;
                Ok(Some(value))
            }
            StatusClass::NoData => {
                drain(response).await;
                Ok(None)
            }
            StatusClass::Failed(err) => {
                drain(response).await;
                match &err {
                    LookupError::RateLimited { retry_after } => {
                        tracing::warn!(
                            operation = %request.operation,
                            retry_after = ?retry_after,
                            "Rate limit exceeded"
                        );
                    }
                    LookupError::UnexpectedStatus { status } => {
                        tracing::warn!(
                            operation = %request.operation,
                            status,
                            "Unexpected response status"
                        );
                    }
                    _ => {}
                }
                Err(err)
            }
        }
    }
}

/// Read and discard a body so the connection can go back to the pool.
///
/// Bounded by the client timeout. A failed read only costs the connection.
async fn drain(response: Response) {
    if let Err(e) = response.bytes().await {
        tracing::debug!("Discarding unread response body: {}", e);
    }
}
