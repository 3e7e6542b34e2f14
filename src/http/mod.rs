//! Request execution for JSON APIs.
//!
//! This module turns an [`ApiMethod`] into an HTTP call and the JSON response
//! into a typed value.
//!
//! # Architecture
//!
//! - [`ApiMethod`] - Immutable description of one call (url, verb, parameters)
//! - [`SimpleHttpClient`] - Renders the call, sends it and deserializes the result
//! - [`Transport`] - The seam to the wire; [`ReqwestTransport`] is the default
//! - [`JsonConverter`] - Optional rewrites of the JSON document before deserialization
//! - [`HttpError`] - Error type for everything above
//!
//! # Request rendering
//!
//! - `GET`: parameters are appended to the url as `?name=value&...`
//! - `POST`: parameters travel in an `application/x-www-form-urlencoded` body,
//!   or a `multipart/form-data` body when [`PostEncoding::Multipart`] is chosen
//! - An attached [`Authorization`] is sent as the `Authorization` header
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::Value;
//! use simple_http_client::http::SimpleHttpClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = SimpleHttpClient::new()?;
//! let status: Value = client.get_url("http://localhost:8080/status").await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

mod api_method;
mod converter;
mod error;
mod http_client;
mod transport;

pub use api_method::{ApiMethod, Authorization, HttpMethod, PostEncoding};
pub use converter::{JsonConverter, UnwrapField};
pub use error::HttpError;
pub use http_client::{SimpleHttpClient, build_request};
pub use transport::{ReqwestTransport, RequestBody, Transport, TransportRequest, TransportResponse};
