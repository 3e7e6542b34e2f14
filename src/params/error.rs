// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use thiserror::Error;

use crate::encoding::DecodeError;

/// Invalid input supplied while building parameters or request descriptors.
///
/// Raised synchronously at construction or add time. [`field`](Self::field)
/// names the offending argument so callers can react without parsing the
/// message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Parameter name cannot be empty or whitespace")]
    EmptyName,

    #[error("Method URL cannot be empty")]
    EmptyUrl,

    #[error("The http method must be either GET or POST, got {0}")]
    UnsupportedMethod(String),
}

impl ArgumentError {
    /// Name of the argument that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ArgumentError::EmptyName => "name",
            ArgumentError::EmptyUrl => "url",
            ArgumentError::UnsupportedMethod(_) => "http_method",
        }
    }
}

/// Errors from rebuilding a [`ParameterSet`](super::ParameterSet) out of a
/// form-urlencoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterSetError {
    #[error("Invalid parameter: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("Could not decode value of parameter `{name}`: {source}")]
    Decoding {
        name: String,
        #[source]
        source: DecodeError,
    },
}
