use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Naver API client
#[derive(Debug, Error)]
pub enum NaverError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Naver
    #[error("API error: {0}")]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request rejected locally before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Error body returned by the Naver open API
///
/// Naver reports failures as `{"errorMessage": "...", "errorCode": "SE01"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message
    #[serde(default)]
    pub error_message: String,
    /// Naver error code (e.g. `SE01` malformed query, `024` auth failure)
    #[serde(default)]
    pub error_code: Option<String>,
}

impl fmt::Display for ApiErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status_code {
            write!(f, "[{status}] ")?;
        }
        if let Some(code) = &self.error_code {
            write!(f, "{code}: ")?;
        }
        f.write_str(&self.error_message)
    }
}

impl NaverError {
    /// HTTP status of an upstream API error, if any
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(obj) => obj.status_code,
            _ => None,
        }
    }

    /// True when the upstream rejected the credentials (401/403)
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }

    /// True when the upstream throttled the request (429)
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.status_code() == Some(429)
    }
}

/// Maps a serde deserialization error to a `NaverError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> NaverError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    NaverError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Falls back to the plain-text body (capped) when it is not Naver's JSON error shape.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> NaverError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body)
        && !obj.error_message.is_empty()
    {
        obj.status_code = status_code;
        return NaverError::Api(obj);
    }

    NaverError::Api(ApiErrorObject {
        status_code,
        error_message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        error_code: Some(format!("http_{}", status.as_u16())),
    })
}
