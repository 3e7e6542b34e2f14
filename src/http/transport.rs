// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use url::Url;

use super::api_method::HttpMethod;
use super::error::HttpError;
use crate::config::ClientConfig;

/// Body sent with a POST request.
#[derive(Debug)]
pub enum RequestBody {
    /// An `application/x-www-form-urlencoded` body.
    FormUrlEncoded(String),
    /// A `multipart/form-data` body; the transport adds the boundary.
    Multipart(Form),
}

impl RequestBody {
    pub const FORM_URL_ENCODED: &'static str = "application/x-www-form-urlencoded";
}

/// A fully rendered request, ready to be put on the wire.
#[derive(Debug)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub reason: Option<String>,
    pub body: Vec<u8>,
}

/// Sends rendered requests and returns the raw response.
///
/// Transport failures (connection errors, timeouts) are returned as they are;
/// status handling and deserialization happen in the client.
pub trait Transport: Send + Sync {
    fn send(&self, request: TransportRequest) -> impl Future<Output = Result<TransportResponse, HttpError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Wraps a caller-built client, e.g. one with default headers or a proxy.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, HttpError> {
        let mut req = self.client.request(request.method.to_reqwest(), request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match request.body {
            Some(RequestBody::FormUrlEncoded(body)) => req.header(CONTENT_TYPE, RequestBody::FORM_URL_ENCODED).body(body),
            Some(RequestBody::Multipart(form)) => req.multipart(form),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            reason: status.canonical_reason().map(str::to_string),
            body,
        })
    }
}
