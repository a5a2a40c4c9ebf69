use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::{config::Config, error::NaverError};

/// Naver open API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and endpoint resolution. Requests are sent once; there is no retry layer.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::NaverConfig> {
    /// Creates a new client with configuration read from the environment
    ///
    /// - `X_NAVER_CLIENT_ID` / `X_NAVER_CLIENT_SECRET` for authentication
    /// - `NAVER_NEWS_BASE_URL` for a custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::NaverConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn get<Q, O>(&self, path: &str, query: &Q) -> Result<O, NaverError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        let url = self.config.url(path);
        let request = self
            .http
            .get(&url)
            .headers(self.config.headers()?)
            .query(query)
            .build()?;
        debug!(method = "GET", url = %request.url(), "naver api request");

        let bytes = self.execute_raw(request).await?;
        serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))
    }

    async fn execute_raw(&self, request: reqwest::Request) -> Result<bytes::Bytes, NaverError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(NaverError::Reqwest)?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let bytes = response.bytes().await.map_err(NaverError::Reqwest)?;
        debug!(
            status = status.as_u16(),
            content_type = %content_type,
            bytes = bytes.len(),
            "naver api response"
        );

        if status.is_success() {
            return Ok(bytes);
        }

        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}
