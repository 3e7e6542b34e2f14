//! Error types for API calls.
//!
//! This module defines the [`HttpError`] enum which covers every way a call
//! through [`SimpleHttpClient`](super::SimpleHttpClient) can fail.

use reqwest::StatusCode;
use thiserror::Error;

use crate::params::ArgumentError;

/// Errors that can occur while executing an [`ApiMethod`](super::ApiMethod).
///
/// Every variant carries enough structure to be handled programmatically.
/// Nothing is retried internally; retrying is left to the caller.
///
/// # Error Categories
///
/// - **Caller errors**: [`InvalidArgument`](HttpError::InvalidArgument),
///   [`UrlError`](HttpError::UrlError)
/// - **Network errors**: [`Transport`](HttpError::Transport), passed through
///   unchanged from `reqwest`
/// - **Server errors**: [`RequestFailed`](HttpError::RequestFailed)
/// - **Payload errors**: [`JsonError`](HttpError::JsonError)
/// - **Lifecycle**: [`Disposed`](HttpError::Disposed),
///   [`Cancelled`](HttpError::Cancelled)
///
/// # Example
///
/// ```rust,no_run
/// use simple_http_client::http::HttpError;
///
/// fn handle_error(err: HttpError) {
///     match err {
///         HttpError::RequestFailed { status, reason, .. } => {
///             eprintln!("Server returned {}: {}", status, reason);
///         }
///         HttpError::Cancelled => eprintln!("Call was cancelled"),
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request descriptor could not be built from the given input.
    #[error("Invalid argument `{field}`: {0}", field = .0.field())]
    InvalidArgument(#[from] ArgumentError),

    /// The transport failed before a response was received.
    ///
    /// Typical causes are refused connections, timeouts, DNS resolution
    /// failures and TLS handshake errors.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    ///
    /// The response body is kept for debugging but never deserialized.
    #[error("Success status code was not received. Status code {status} with reason phrase '{reason}' returned")]
    RequestFailed {
        /// The HTTP status code returned by the server.
        status: StatusCode,
        /// The reason phrase for the status, empty when unknown.
        reason: String,
        /// The raw response body.
        body: String,
    },

    /// The final request URL is not a valid absolute URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The response body could not be deserialized into the target type.
    #[error("JSON deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The client's transport has already been released.
    #[error("The http client has been disposed")]
    Disposed,

    /// The call was cancelled before it completed.
    #[error("The request was cancelled")]
    Cancelled,
}

impl HttpError {
    /// Status code of a [`RequestFailed`](HttpError::RequestFailed) error, or
    /// the status attached to a transport error if there is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpError::RequestFailed { status, .. } => Some(*status),
            HttpError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, HttpError::Cancelled)
    }
}
