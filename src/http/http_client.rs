// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::api_method::{ApiMethod, HttpMethod, PostEncoding};
use super::converter::{self, JsonConverter};
use super::error::HttpError;
use super::transport::{ReqwestTransport, RequestBody, Transport, TransportRequest};
use crate::config::ClientConfig;
use crate::logging::mask_secret;

/// Executes [`ApiMethod`]s and deserializes their JSON responses.
///
/// The client owns one transport that is reused by every call. The transport
/// is released by [`dispose`](Self::dispose) (or when the client is dropped);
/// calls made after that fail with [`HttpError::Disposed`].
///
/// # Example
///
/// ```rust,no_run
/// use serde::Deserialize;
/// use simple_http_client::http::{ApiMethod, HttpMethod, SimpleHttpClient};
/// use simple_http_client::params::ParameterSet;
///
/// #[derive(Deserialize)]
/// struct SearchResult {
///     total: u64,
/// }
///
/// # async fn example() -> Result<(), anyhow::Error> {
/// let client = SimpleHttpClient::new()?;
///
/// let mut params = ParameterSet::new();
/// params.add_string("q", "rust", None)?;
/// params.add_int("limit", 10, Some(10))?;
///
/// let method = ApiMethod::new("https://api.example.com/search", HttpMethod::Get, Some(params))?;
/// let result: SearchResult = client.get(&method).await?;
/// println!("{} hits", result.total);
///
/// client.dispose().await;
/// # Ok(())
/// # }
/// ```
pub struct SimpleHttpClient<T: Transport = ReqwestTransport> {
    transport: RwLock<Option<Arc<T>>>,
    last_latency: RwLock<Option<Duration>>,
}

impl SimpleHttpClient<ReqwestTransport> {
    /// Creates a client using [`ClientConfig::default`].
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, HttpError> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> SimpleHttpClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: RwLock::new(Some(Arc::new(transport))),
            last_latency: RwLock::new(None),
        }
    }

    /// Executes `method` without cancellation or converters.
    pub async fn get<R: DeserializeOwned>(&self, method: &ApiMethod) -> Result<R, HttpError> {
        self.execute(method, &CancellationToken::new(), &[]).await
    }

    /// Shorthand for a parameterless GET to `url`.
    pub async fn get_url<R: DeserializeOwned>(&self, url: &str) -> Result<R, HttpError> {
        let method = ApiMethod::get(url)?;
        self.get(&method).await
    }

    /// Executes `method` and deserializes the response body into `R`.
    ///
    /// The call is abandoned with [`HttpError::Cancelled`] as soon as `cancel`
    /// fires, whether before or during the transport round trip. A
    /// non-success status yields [`HttpError::RequestFailed`] and the body is
    /// not deserialized. On success the parsed JSON passes through
    /// `converters`, in order, before it is turned into `R`.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        method: &ApiMethod,
        cancel: &CancellationToken,
        converters: &[&dyn JsonConverter],
    ) -> Result<R, HttpError> {
        let transport = self.acquire_transport().await?;
        if cancel.is_cancelled() {
            debug!(url:% = method.url(); "Request cancelled before it was sent");
            return Err(HttpError::Cancelled);
        }

        let request = build_request(method)?;
        debug!(
            method:% = request.method,
            url:% = request.url,
            authorization:% = method.authorization().map(|a| mask_secret(&a.header_value())).unwrap_or_default();
            "Sending API request"
        );

        let start = Instant::now();
        let resp = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(url:% = method.url(); "Request cancelled while in flight");
                return Err(HttpError::Cancelled);
            },
            resp = transport.send(request) => resp?,
        };
        let latency = start.elapsed();
        self.update_latency(latency).await;

        if !resp.status.is_success() {
            let reason = resp.reason.unwrap_or_default();
            warn!(
                url:% = method.url(),
                status = resp.status.as_u16(),
                reason:% = reason;
                "API request returned a non-success status"
            );
            return Err(HttpError::RequestFailed {
                status: resp.status,
                reason,
                body: String::from_utf8_lossy(&resp.body).into_owned(),
            });
        }

        debug!(
            status = resp.status.as_u16(),
            bytes = resp.body.len(),
            latency_ms = latency.as_millis() as u64;
            "API request succeeded"
        );
        Ok(converter::deserialize(&resp.body, converters)?)
    }

    /// Releases the transport. Returns `true` for the call that actually
    /// released it and `false` if the client was already disposed.
    pub async fn dispose(&self) -> bool {
        let released = self.transport.write().await.take().is_some();
        if released {
            debug!("Http client disposed");
        }
        released
    }

    pub async fn is_disposed(&self) -> bool {
        self.transport.read().await.is_none()
    }

    /// Round-trip time of the most recent completed transport call.
    pub async fn last_latency(&self) -> Option<Duration> {
        *self.last_latency.read().await
    }

    async fn acquire_transport(&self) -> Result<Arc<T>, HttpError> {
        self.transport.read().await.clone().ok_or(HttpError::Disposed)
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some(duration);
    }
}

/// Renders `method` into the request handed to the transport.
pub fn build_request(method: &ApiMethod) -> Result<TransportRequest, HttpError> {
    let url = Url::parse(&method.request_url())?;

    let mut headers = Vec::new();
    if let Some(authorization) = method.authorization() {
        headers.push((AUTHORIZATION.to_string(), authorization.header_value()));
    }

    let body = match method.http_method() {
        HttpMethod::Get => None,
        HttpMethod::Post => Some(match method.post_encoding() {
            PostEncoding::FormUrlEncoded => RequestBody::FormUrlEncoded(method.parameters().to_query_string()),
            PostEncoding::Multipart => RequestBody::Multipart(method.parameters().to_multipart_form()),
        }),
    };

    Ok(TransportRequest {
        method: method.http_method(),
        url,
        headers,
        body,
    })
}
