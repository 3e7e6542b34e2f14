// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::fmt::Display;

use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Part;

use super::error::ArgumentError;

/// A value that can be stored in a [`Parameter`].
///
/// Implementors render themselves to their canonical string form. Equality
/// (used for default suppression) stays on the typed value, so floats compare
/// with plain IEEE equality.
pub trait ParameterValue: PartialEq {
    fn to_parameter_string(&self) -> String;
}

impl ParameterValue for &str {
    fn to_parameter_string(&self) -> String {
        (*self).to_string()
    }
}

impl ParameterValue for String {
    fn to_parameter_string(&self) -> String {
        self.clone()
    }
}

impl ParameterValue for bool {
    fn to_parameter_string(&self) -> String {
        if *self { "true".into() } else { "false".into() }
    }
}

macro_rules! display_parameter_value {
    ($($ty:ty),*) => {
        $(
            impl ParameterValue for $ty {
                fn to_parameter_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_parameter_value!(i32, i64, u32, u64, usize);

macro_rules! float_parameter_value {
    ($($ty:ty),*) => {
        $(
            impl ParameterValue for $ty {
                fn to_parameter_string(&self) -> String {
                    render_float(format!("{self:?}"))
                }
            }
        )*
    };
}

float_parameter_value!(f32, f64);

// `Debug` gives the shortest round-trippable digits and switches to an
// exponent for very large or very small magnitudes. Integral values drop the
// trailing `.0`.
fn render_float(rendered: String) -> String {
    match rendered.strip_suffix(".0") {
        Some(integral) => integral.to_string(),
        None => rendered,
    }
}

/// A named, string-valued request parameter.
///
/// Parameters are immutable value objects: two parameters are equal when both
/// name and value match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a parameter, rejecting empty or whitespace-only names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use simple_http_client::params::Parameter;
    ///
    /// let limit = Parameter::new("limit", 10).unwrap();
    /// assert_eq!(limit.value(), "10");
    ///
    /// let flag = Parameter::new("verbose", true).unwrap();
    /// assert_eq!(flag.value(), "true");
    ///
    /// assert!(Parameter::new("  ", "x").is_err());
    /// ```
    pub fn new<V: ParameterValue>(name: impl Into<String>, value: V) -> Result<Self, ArgumentError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            value: value.to_parameter_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders this parameter as a plain-text `multipart/form-data` part.
    ///
    /// The `form-data` disposition carrying the name is written when the part
    /// is added to a [`Form`](reqwest::multipart::Form) under that name, as
    /// [`ParameterSet::to_multipart_form`](super::ParameterSet::to_multipart_form) does.
    pub fn to_body_part(&self) -> Part {
        Part::text(self.value.clone()).headers(body_part_headers())
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), ArgumentError> {
    if name.trim().is_empty() {
        return Err(ArgumentError::EmptyName);
    }
    Ok(())
}

pub const BODY_PART_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const BODY_PART_CONTENT_ENCODING: &str = "UTF-8";

/// Headers of every body part: UTF-8 plain text with an explicit encoding.
pub(crate) fn body_part_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(BODY_PART_CONTENT_TYPE));
    headers.insert(CONTENT_ENCODING, HeaderValue::from_static(BODY_PART_CONTENT_ENCODING));
    headers
}
