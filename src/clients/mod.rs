//! HTTP transport layer for Hub API communication.
//!
//! This module provides the authenticated sender used by
//! [`HubClient`](crate::hub::HubClient). It resolves paths against the Hub
//! base URL, attaches the bearer token, and decodes JSON responses.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Transport-level errors
//!
//! # Example
//!
//! ```rust,ignore
//! use hub_api::{BaseUrl, Session};
//! use hub_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let session = Session::new(
//!     BaseUrl::new("https://hub.example.com").unwrap(),
//!     "access-token".to_string(),
//!     None,
//! );
//!
//! let client = HttpClient::new(&session, None)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/v1/whoami")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! None. Every request is attempted once; failures surface to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
