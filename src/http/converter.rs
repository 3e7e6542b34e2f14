// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

/// Rewrites a parsed JSON document before it is deserialized into the
/// caller's target type.
///
/// Converters run in the order they are passed to
/// [`SimpleHttpClient::execute`](super::SimpleHttpClient::execute). Any closure
/// `Fn(Value) -> Result<Value, serde_json::Error>` is a converter.
pub trait JsonConverter: Send + Sync {
    fn convert(&self, value: Value) -> Result<Value, serde_json::Error>;
}

impl<F> JsonConverter for F
where
    F: Fn(Value) -> Result<Value, serde_json::Error> + Send + Sync,
{
    fn convert(&self, value: Value) -> Result<Value, serde_json::Error> {
        self(value)
    }
}

/// Replaces the document with one of its top-level fields, for APIs that wrap
/// every payload in an envelope such as `{"result": ..., "id": ...}`.
#[derive(Debug, Clone)]
pub struct UnwrapField {
    field: String,
}

impl UnwrapField {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }
}

impl JsonConverter for UnwrapField {
    fn convert(&self, value: Value) -> Result<Value, serde_json::Error> {
        match value {
            Value::Object(mut map) => map
                .remove(&self.field)
                .ok_or_else(|| serde_json::Error::custom(format!("missing field `{}`", self.field))),
            _ => Err(serde_json::Error::custom(format!(
                "expected an object containing `{}`",
                self.field
            ))),
        }
    }
}

pub(crate) fn deserialize<T: DeserializeOwned>(
    body: &[u8],
    converters: &[&dyn JsonConverter],
) -> Result<T, serde_json::Error> {
    if converters.is_empty() {
        return serde_json::from_slice(body);
    }

    let mut value: Value = serde_json::from_slice(body)?;
    for converter in converters {
        value = converter.convert(value)?;
    }
    serde_json::from_value(value)
}
