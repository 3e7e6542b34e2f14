// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::{fmt::Display, str::FromStr};

use crate::params::{ArgumentError, ParameterSet};

/// HTTP verbs an [`ApiMethod`] can be called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("GET") {
            Ok(HttpMethod::Get)
        } else if s.eq_ignore_ascii_case("POST") {
            Ok(HttpMethod::Post)
        } else {
            Err(ArgumentError::UnsupportedMethod(s.to_string()))
        }
    }
}

impl TryFrom<reqwest::Method> for HttpMethod {
    type Error = ArgumentError;

    fn try_from(method: reqwest::Method) -> Result<Self, Self::Error> {
        match method {
            reqwest::Method::GET => Ok(HttpMethod::Get),
            reqwest::Method::POST => Ok(HttpMethod::Post),
            other => Err(ArgumentError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// How the parameters of a POST call are put into the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostEncoding {
    /// `application/x-www-form-urlencoded`, same shape as a query string.
    #[default]
    FormUrlEncoded,
    /// `multipart/form-data` with one plain-text part per parameter.
    Multipart,
}

/// Authorization header built from a scheme and a parameter set, e.g.
/// `OAuth oauth_consumer_key="key",oauth_nonce="n"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    scheme: String,
    parameters: ParameterSet,
}

impl Authorization {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.parameters.to_authorization_header())
    }
}

/// Describes a single API call: url, verb and parameters.
///
/// The descriptor owns its [`ParameterSet`]; once built it can only be read.
///
/// # Example
///
/// ```rust
/// use simple_http_client::http::{ApiMethod, HttpMethod};
/// use simple_http_client::params::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.add_string("q", "a b", None).unwrap();
///
/// let method = ApiMethod::new("http://x/api", HttpMethod::Get, Some(params)).unwrap();
/// assert_eq!(method.request_url(), "http://x/api?q=a%20b");
///
/// assert!("DELETE".parse::<HttpMethod>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMethod {
    url: String,
    http_method: HttpMethod,
    parameters: ParameterSet,
    authorization: Option<Authorization>,
    post_encoding: PostEncoding,
}

impl ApiMethod {
    /// Creates a descriptor. A missing parameter set is treated as empty.
    pub fn new(
        url: impl Into<String>,
        http_method: HttpMethod,
        parameters: Option<ParameterSet>,
    ) -> Result<Self, ArgumentError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ArgumentError::EmptyUrl);
        }

        Ok(Self {
            url,
            http_method,
            parameters: parameters.unwrap_or_default(),
            authorization: None,
            post_encoding: PostEncoding::default(),
        })
    }

    /// Creates a descriptor from a textual verb, rejecting anything but GET
    /// and POST.
    pub fn with_verb(
        url: impl Into<String>,
        verb: &str,
        parameters: Option<ParameterSet>,
    ) -> Result<Self, ArgumentError> {
        Self::new(url, verb.parse()?, parameters)
    }

    pub fn get(url: impl Into<String>) -> Result<Self, ArgumentError> {
        Self::new(url, HttpMethod::Get, None)
    }

    pub fn post(url: impl Into<String>, parameters: ParameterSet) -> Result<Self, ArgumentError> {
        Self::new(url, HttpMethod::Post, Some(parameters))
    }

    /// Attaches an `Authorization` header rendered from `parameters`.
    pub fn with_authorization(mut self, scheme: impl Into<String>, parameters: ParameterSet) -> Self {
        self.authorization = Some(Authorization {
            scheme: scheme.into(),
            parameters,
        });
        self
    }

    /// Selects the body encoding used when this is a POST call.
    pub fn with_post_encoding(mut self, post_encoding: PostEncoding) -> Self {
        self.post_encoding = post_encoding;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }

    pub fn post_encoding(&self) -> PostEncoding {
        self.post_encoding
    }

    /// The URL the call is sent to. GET parameters are appended as a query
    /// string; POST parameters travel in the body instead.
    pub fn request_url(&self) -> String {
        if self.http_method == HttpMethod::Get && !self.parameters.is_empty() {
            format!("{}?{}", self.url, self.parameters.to_query_string())
        } else {
            self.url.clone()
        }
    }
}
