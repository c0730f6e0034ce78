//! HTTP client for Hub API communication.
//!
//! This module provides the [`HttpClient`] type, the authenticated sender
//! that resolves request paths against the Hub base URL and attaches the
//! session's bearer token.

use std::collections::HashMap;

use crate::auth::Session;
use crate::clients::errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, HubConfig, DEFAULT_REQUEST_TIMEOUT};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Hub API.
///
/// The client handles:
/// - URL resolution against the session's base URL
/// - Default headers including User-Agent, Accept and Authorization
/// - A fixed per-request timeout
/// - Strict JSON decoding of successful responses
///
/// Requests are attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use hub_api::{BaseUrl, Session};
/// use hub_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let session = Session::new(
///     BaseUrl::new("https://hub.example.com").unwrap(),
///     "access-token".to_string(),
///     None,
/// );
///
/// let client = HttpClient::new(&session, None)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/v1/whoami")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL that request paths are resolved against.
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given session.
    ///
    /// # Arguments
    ///
    /// * `session` - The session providing base URL and access token
    /// * `config` - Optional configuration for the timeout and `user_agent_prefix`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(session: &Session, config: Option<&HubConfig>) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(HubConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Hub API Rust Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !session.access_token.is_empty() {
            default_headers.insert("Authorization".to_string(), session.authorization_header());
        }

        let timeout = config.map_or(DEFAULT_REQUEST_TIMEOUT, HubConfig::request_timeout);
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: session.base_url.clone(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Sends an HTTP request to the Hub API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails or the path cannot be resolved (`InvalidRequest`)
    /// - Network error or timeout occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx response body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path).map_err(|_| {
            InvalidHttpRequestError::InvalidPath {
                path: request.path.clone(),
            }
        })?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, url = %url, "Sending Hub API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(status = code, url = %url, "Received Hub API response");

        if (200..300).contains(&code) {
            let body = serde_json::from_str(&body_text).map_err(|source| HttpError::Decode {
                url: url.to_string(),
                source,
            })?;
            return Ok(HttpResponse::new(code, res_headers, body));
        }

        // Error bodies are best-effort: HTML error pages are kept as raw text
        let body = serde_json::from_str(&body_text)
            .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }));
        let response = HttpResponse::new(code, res_headers, body);
        let message = Self::serialize_error(&response);

        tracing::warn!(
            status = code,
            url = %url,
            request_id = response.request_id().unwrap_or_default(),
            "Hub API request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the useful parts of an error response to a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description", "detail", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
