use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Naver search API base URL
pub const NAVER_DEFAULT_BASE: &str = "https://openapi.naver.com/v1/search";
/// Header carrying the application client id
pub const HDR_CLIENT_ID: &str = "X-Naver-Client-Id";
/// Header carrying the application client secret
pub const HDR_CLIENT_SECRET: &str = "X-Naver-Client-Secret";

/// Environment variable holding the client id
pub const ENV_CLIENT_ID: &str = "X_NAVER_CLIENT_ID";
/// Environment variable holding the client secret
pub const ENV_CLIENT_SECRET: &str = "X_NAVER_CLIENT_SECRET";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "NAVER_NEWS_BASE_URL";

/// Configuration for the Naver client
///
/// Debug output redacts both credentials via [`SecretString`].
#[derive(Clone, Debug)]
pub struct NaverConfig {
    api_base: String,
    client_id: Option<SecretString>,
    client_secret: Option<SecretString>,
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for NaverConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_BASE_URL).unwrap_or_else(|| NAVER_DEFAULT_BASE.into()),
            client_id: env_trimmed(ENV_CLIENT_ID).map(SecretString::from),
            client_secret: env_trimmed(ENV_CLIENT_SECRET).map(SecretString::from),
        }
    }
}

impl NaverConfig {
    /// Creates a new configuration from the process environment
    ///
    /// Reads:
    /// - `X_NAVER_CLIENT_ID` / `X_NAVER_CLIENT_SECRET` for authentication
    /// - `NAVER_NEWS_BASE_URL` for a custom base URL (defaults to `https://openapi.naver.com/v1/search`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets both client credentials
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(SecretString::from(client_id.into()));
        self.client_secret = Some(SecretString::from(client_secret.into()));
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Naver client
///
/// Implement this trait to provide custom authentication and endpoint resolution.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::NaverError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is missing or blank.
    fn validate_auth(&self) -> Result<(), crate::error::NaverError>;
}

fn present(secret: Option<&SecretString>) -> Option<&str> {
    secret
        .map(|s| s.expose_secret().trim())
        .filter(|s| !s.is_empty())
}

impl Config for NaverConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::NaverError> {
        use crate::error::NaverError;

        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(id) = present(self.client_id.as_ref()) {
            h.insert(
                HDR_CLIENT_ID,
                HeaderValue::from_str(id)
                    .map_err(|_| NaverError::Config("Invalid client id value".into()))?,
            );
        }
        if let Some(secret) = present(self.client_secret.as_ref()) {
            h.insert(
                HDR_CLIENT_SECRET,
                HeaderValue::from_str(secret)
                    .map_err(|_| NaverError::Config("Invalid client secret value".into()))?,
            );
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        // A base that already names the endpoint (".../news.json") is used verbatim.
        if base.ends_with(".json") {
            return base.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn validate_auth(&self) -> Result<(), crate::error::NaverError> {
        if present(self.client_id.as_ref()).is_some()
            && present(self.client_secret.as_ref()).is_some()
        {
            Ok(())
        } else {
            Err(crate::error::NaverError::Config(format!(
                "Missing Naver credentials: set {ENV_CLIENT_ID} and {ENV_CLIENT_SECRET} environment variables"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _env = EnvGuard::new()
            .set(ENV_CLIENT_ID, "id-123")
            .set(ENV_CLIENT_SECRET, "secret-456")
            .set(ENV_BASE_URL, "https://naver.test/v1/search");

        let cfg = NaverConfig::new();
        assert_eq!(cfg.api_base(), "https://naver.test/v1/search");

        let h = cfg.headers().unwrap();
        assert_eq!(h.get(HDR_CLIENT_ID).unwrap().to_str().unwrap(), "id-123");
        assert_eq!(
            h.get(HDR_CLIENT_SECRET).unwrap().to_str().unwrap(),
            "secret-456"
        );
        assert_eq!(h.get(ACCEPT).unwrap().to_str().unwrap(), "application/json");
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _env = EnvGuard::new().remove(ENV_BASE_URL);

        let cfg = NaverConfig::new();
        assert_eq!(cfg.api_base(), NAVER_DEFAULT_BASE);
        assert_eq!(
            cfg.url("news.json"),
            "https://openapi.naver.com/v1/search/news.json"
        );
    }

    #[test]
    #[serial(env)]
    fn url_keeps_full_endpoint_override() {
        let cfg = NaverConfig::new().with_api_base("https://openapi.naver.com/v1/search/news.json");
        assert_eq!(
            cfg.url("news.json"),
            "https://openapi.naver.com/v1/search/news.json"
        );

        let cfg = NaverConfig::new().with_api_base("http://localhost:9999/");
        assert_eq!(cfg.url("/news.json"), "http://localhost:9999/news.json");
    }

    #[test]
    #[serial(env)]
    fn validate_auth_requires_both_credentials() {
        let _env = EnvGuard::new()
            .set(ENV_CLIENT_ID, "only-id")
            .remove(ENV_CLIENT_SECRET);

        let err = NaverConfig::new().validate_auth().unwrap_err();
        assert!(err.to_string().contains(ENV_CLIENT_SECRET));
    }

    #[test]
    #[serial(env)]
    fn validate_auth_rejects_whitespace() {
        let cfg = NaverConfig::new().with_credentials("   ", "secret");
        assert!(cfg.validate_auth().is_err());

        let cfg = NaverConfig::new().with_credentials("  id  ", "\nsecret\n");
        assert!(cfg.validate_auth().is_ok());
        let h = cfg.headers().unwrap();
        assert_eq!(h.get(HDR_CLIENT_ID).unwrap().to_str().unwrap(), "id");
    }

    #[test]
    #[serial(env)]
    fn debug_output_redacts_credentials() {
        let cfg = NaverConfig::new().with_credentials("visible-id-987", "hidden-secret-654");
        let debug_str = format!("{cfg:?}");

        assert!(!debug_str.contains("visible-id-987"));
        assert!(!debug_str.contains("hidden-secret-654"));
        assert!(
            debug_str.contains("[REDACTED]"),
            "Debug output should contain '[REDACTED]', got: {debug_str}"
        );
    }
}
