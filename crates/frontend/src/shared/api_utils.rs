//! API utilities for frontend-backend communication
//!
//! Builds request URLs from the configured base path, serializes typed
//! parameters into query strings and decodes JSON bodies into contract DTOs.
//! Failures are returned as [`ApiError`]; this layer never retries.

use gloo_net::http::{Request, Response};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: no response was received.
    #[error("request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    /// The body was not the JSON shape we expected.
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// Parameters could not be encoded into a query string.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Worth another attempt: transport errors, 5xx, timeouts and throttling.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Http { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            ApiError::Decode(_) | ApiError::InvalidRequest(_) => false,
        }
    }
}

/// Resolved API location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub const DEFAULT_BASE: &'static str = "/api";

    /// Blank or missing values fall back to [`Self::DEFAULT_BASE`].
    pub fn from_env_value(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(Self::DEFAULT_BASE)
            .trim_end_matches('/');
        let base = if base.is_empty() { "/" } else { base };
        Self {
            base_url: base.to_string(),
        }
    }
}

// Set at build time, e.g. `CORTEX_API_URL=https://api.example.com/api trunk build`.
static API_CONFIG: Lazy<ApiConfig> =
    Lazy::new(|| ApiConfig::from_env_value(option_env!("CORTEX_API_URL")));

/// Base URL for API requests (`/api` unless overridden at build time).
pub fn api_base() -> &'static str {
    &API_CONFIG.base_url
}

/// Query parameters for endpoints that take none.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

/// Join base, path and encoded parameters. `None` fields must be marked
/// `skip_serializing_if` by the caller so they do not appear at all.
pub fn build_url<P: Serialize>(base: &str, path: &str, params: &P) -> Result<String, ApiError> {
    let query =
        serde_qs::to_string(params).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    let base = base.trim_end_matches('/');
    if query.is_empty() {
        Ok(format!("{}{}", base, path))
    } else {
        Ok(format!("{}{}?{}", base, path, query))
    }
}

/// Treat blank filter strings as "no filter".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Decode a response body. A bare `{"error": "..."}` object is how the
/// predictions endpoints report a refusal with status 200.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(message) = error_envelope(&value) {
        return Err(ApiError::Decode(format!("server reported: {}", message)));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_envelope(value: &Value) -> Option<&str> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get("error")?.as_str()
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            message: response.status_text(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// `GET {base}{path}?{params}` decoded as `T`.
pub async fn get_json<T, P>(path: &str, params: &P) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let url = build_url(api_base(), path, params)?;
    log::debug!("GET {}", url);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(response).await?;
    decode_body(&body)
}

/// `GET` returning the raw JSON value, for endpoints whose body shape varies.
pub async fn get_value<P: Serialize>(path: &str, params: &P) -> Result<Value, ApiError> {
    get_json::<Value, P>(path, params).await
}

/// `POST {base}{path}?{params}` without a body, decoded as `T`.
pub async fn post_json<T, P>(path: &str, params: &P) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    P: Serialize,
{
    let url = build_url(api_base(), path, params)?;
    log::debug!("POST {}", url);
    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(response).await?;
    decode_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::period::Period;

    #[derive(Serialize)]
    struct ListParams {
        page: u32,
        limit: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        segment: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
    }

    #[derive(Serialize)]
    struct PeriodParams {
        limit: u32,
        period: Period,
    }

    #[test]
    fn test_config_falls_back_to_api() {
        assert_eq!(ApiConfig::from_env_value(None).base_url, "/api");
        assert_eq!(ApiConfig::from_env_value(Some("  ")).base_url, "/api");
        assert_eq!(
            ApiConfig::from_env_value(Some("https://cortex.example.com/api/")).base_url,
            "https://cortex.example.com/api"
        );
    }

    #[test]
    fn test_build_url_serializes_typed_params() {
        let url = build_url("/api", "/dashboard/top-products", &PeriodParams { limit: 5, period: Period::Days7 })
            .unwrap();
        assert_eq!(url, "/api/dashboard/top-products?limit=5&period=7d");
    }

    #[test]
    fn test_build_url_omits_unset_filters() {
        let params = ListParams {
            page: 2,
            limit: 20,
            segment: non_empty(Some("Champions".to_string())),
            search: non_empty(Some("   ".to_string())),
        };
        let url = build_url("/api/", "/customers/list", &params).unwrap();
        assert_eq!(url, "/api/customers/list?page=2&limit=20&segment=Champions");
    }

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(
            build_url("/api", "/dashboard/alerts", &NoParams {}).unwrap(),
            "/api/dashboard/alerts"
        );
    }

    #[test]
    fn test_decode_body_reports_error_envelope() {
        let result: Result<Vec<u32>, ApiError> =
            decode_body(r#"{"error": "Not enough historical data for prediction"}"#);
        assert!(matches!(result, Err(ApiError::Decode(msg)) if msg.contains("historical data")));
    }

    #[test]
    fn test_decode_body_rejects_wrong_shape() {
        let result: Result<Vec<u32>, ApiError> = decode_body(r#"{"items": []}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
        let result: Result<Vec<u32>, ApiError> = decode_body("not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_retry_policy() {
        assert!(ApiError::Network("offline".into()).is_retryable());
        assert!(ApiError::Http { status: 503, message: String::new() }.is_retryable());
        assert!(!ApiError::Http { status: 404, message: String::new() }.is_retryable());
        assert!(!ApiError::Decode("bad".into()).is_retryable());
    }
}
