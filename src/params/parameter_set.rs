// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::collections::BTreeMap;

use log::trace;
use reqwest::multipart::Form;

use super::error::{ArgumentError, ParameterSetError};
use super::parameter::{Parameter, ParameterValue, validate_name};
use crate::encoding;

/// A name-unique collection of [`Parameter`]s, always iterated in ascending
/// ordinal order of the parameter names.
///
/// Adding a parameter under a name that is already present replaces the old
/// value. Each `add` variant accepts an optional default; when the value equals
/// that default nothing is stored, which keeps requests free of parameters the
/// server would assume anyway.
///
/// # Example
///
/// ```rust
/// use simple_http_client::params::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.add_string("b", "2", None).unwrap();
/// params.add_string("a", "1", None).unwrap();
/// params.add_int("limit", 10, Some(10)).unwrap();
///
/// assert_eq!(params.to_query_string(), "a=1&b=2");
/// assert_eq!(params.to_authorization_header(), r#"a="1",b="2""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    parameters: BTreeMap<String, Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` under `name` unless it equals `default`.
    ///
    /// The name is validated first, so a blank name is rejected even when the
    /// add would have been suppressed.
    pub fn add<V: ParameterValue>(&mut self, name: &str, value: V, default: Option<V>) -> Result<(), ArgumentError> {
        validate_name(name)?;
        if default.is_some_and(|default| default == value) {
            trace!(name = name; "Parameter equals its default, skipping");
            return Ok(());
        }
        self.insert(Parameter::new(name, value)?);
        Ok(())
    }

    pub fn add_string(&mut self, name: &str, value: &str, default: Option<&str>) -> Result<(), ArgumentError> {
        self.add(name, value, default)
    }

    pub fn add_int(&mut self, name: &str, value: i64, default: Option<i64>) -> Result<(), ArgumentError> {
        self.add(name, value, default)
    }

    pub fn add_float(&mut self, name: &str, value: f64, default: Option<f64>) -> Result<(), ArgumentError> {
        self.add(name, value, default)
    }

    pub fn add_bool(&mut self, name: &str, value: bool, default: Option<bool>) -> Result<(), ArgumentError> {
        self.add(name, value, default)
    }

    /// Inserts an already built parameter, replacing any parameter with the
    /// same name. Returns the replaced parameter.
    pub fn insert(&mut self, parameter: Parameter) -> Option<Parameter> {
        self.parameters.insert(parameter.name().to_string(), parameter)
    }

    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        self.parameters.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    /// Rebuilds a parameter set from a form-urlencoded string such as
    /// `a=1&b=x%20y`.
    ///
    /// Each pair is split on its first `=`, so values may contain further `=`
    /// characters. Pairs without any `=` and pairs with a blank name are
    /// skipped. Input containing neither `&` nor `=` yields an empty set.
    pub fn parse_form_url_encoded(input: &str) -> Result<Self, ParameterSetError> {
        let mut set = Self::new();
        if !input.contains('&') && !input.contains('=') {
            return Ok(set);
        }

        for pair in input.split('&') {
            let Some((name, value)) = pair.split_once('=') else {
                trace!(pair = pair; "Skipping form pair without '='");
                continue;
            };
            if validate_name(name).is_err() {
                trace!(pair = pair; "Skipping form pair with blank name");
                continue;
            }
            let value = encoding::decode(value).map_err(|source| ParameterSetError::Decoding {
                name: name.to_string(),
                source,
            })?;
            set.add_string(name, &value, None)?;
        }

        Ok(set)
    }

    /// Renders `name=value` pairs joined by `&`, values percent-encoded.
    ///
    /// Used both for query strings and for form-urlencoded bodies.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|p| format!("{}={}", p.name(), encoding::encode(p.value())))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Renders `name="value"` pairs joined by `,`, values percent-encoded.
    pub fn to_authorization_header(&self) -> String {
        self.iter()
            .map(|p| format!("{}=\"{}\"", p.name(), encoding::encode(p.value())))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Builds a `multipart/form-data` form with one plain-text part per
    /// parameter, in name order.
    pub fn to_multipart_form(&self) -> Form {
        self.iter()
            .fold(Form::new(), |form, p| form.part(p.name().to_string(), p.to_body_part()))
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Parameter> for ParameterSet {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        for parameter in iter {
            self.insert(parameter);
        }
    }
}

impl IntoIterator for ParameterSet {
    type Item = Parameter;
    type IntoIter = std::collections::btree_map::IntoValues<String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_values()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::collections::btree_map::Values<'a, String, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.values()
    }
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;
    use crate::encoding::DecodeError;

    fn names(set: &ParameterSet) -> Vec<&str> {
        set.iter().map(Parameter::name).collect()
    }

    #[test]
    fn test_iteration_is_sorted_regardless_of_insertion_order() {
        let mut set = ParameterSet::new();
        for name in ["zeta", "alpha", "Beta", "beta", "_x", "a1", "a"] {
            set.add_string(name, "v", None).unwrap();
        }
        // Ordinal comparison: uppercase sorts before underscore before lowercase.
        assert_eq!(names(&set), vec!["Beta", "_x", "a", "a1", "alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_scenario_sorted_query_string() {
        let mut set = ParameterSet::new();
        set.add_string("b", "2", None).unwrap();
        set.add_string("a", "1", None).unwrap();
        assert_eq!(set.to_query_string(), "a=1&b=2");
    }

    #[test]
    fn test_scenario_default_int_is_suppressed() {
        let mut set = ParameterSet::new();
        set.add_int("limit", 10, Some(10)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_query_string(), "");
    }

    #[test]
    fn test_default_suppression_leaves_existing_output_untouched() {
        let mut set = ParameterSet::new();
        set.add_string("q", "rust", None).unwrap();
        let before = set.to_query_string();

        set.add_string("lang", "en", Some("en")).unwrap();
        set.add_bool("safe", true, Some(true)).unwrap();
        set.add_float("ratio", 0.5, Some(0.5)).unwrap();
        set.add_int("page", 1, Some(1)).unwrap();

        assert_eq!(set.to_query_string(), before);
        assert_eq!(set.to_authorization_header(), r#"q="rust""#);
    }

    #[test]
    fn test_value_different_from_default_is_added() {
        let mut set = ParameterSet::new();
        set.add_int("limit", 20, Some(10)).unwrap();
        set.add_bool("safe", false, Some(true)).unwrap();
        set.add_string("lang", "de", Some("en")).unwrap();
        assert_eq!(set.to_query_string(), "lang=de&limit=20&safe=false");
    }

    #[test]
    fn test_float_default_uses_exact_equality() {
        let mut set = ParameterSet::new();
        set.add_float("zero", -0.0, Some(0.0)).unwrap();
        set.add_float("nan", f64::NAN, Some(f64::NAN)).unwrap();
        set.add_float("close", 0.1 + 0.2, Some(0.3)).unwrap();
        assert_eq!(names(&set), vec!["close", "nan"]);
        assert_eq!(set.get("nan").unwrap().value(), "NaN");
    }

    #[test]
    fn test_duplicate_name_keeps_last_value() {
        let mut set = ParameterSet::new();
        set.add_string("key", "first", None).unwrap();
        set.add_int("key", 2, None).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("key").unwrap().value(), "2");
    }

    #[test]
    fn test_blank_name_rejected_even_when_suppressed() {
        let mut set = ParameterSet::new();
        assert_eq!(set.add_int(" ", 1, Some(1)), Err(ArgumentError::EmptyName));
        assert_eq!(set.add_string("", "x", None), Err(ArgumentError::EmptyName));
        assert!(set.is_empty());
    }

    #[test]
    fn test_query_string_encodes_values_only() {
        let mut set = ParameterSet::new();
        set.add_string("q", "a b&c=d", None).unwrap();
        set.add_string("lang", "日本", None).unwrap();
        assert_eq!(set.to_query_string(), "lang=%E6%97%A5%E6%9C%AC&q=a%20b%26c%3Dd");
        assert_eq!(set.to_authorization_header(), r#"lang="%E6%97%A5%E6%9C%AC",q="a%20b%26c%3Dd""#);
    }

    #[test]
    fn test_authorization_header_shape() {
        let mut set = ParameterSet::new();
        set.add_string("oauth_nonce", "abc", None).unwrap();
        set.add_string("oauth_consumer_key", "key 1", None).unwrap();
        assert_eq!(
            set.to_authorization_header(),
            r#"oauth_consumer_key="key%201",oauth_nonce="abc""#
        );
    }

    #[test]
    fn test_parse_without_separators_is_empty() {
        assert!(ParameterSet::parse_form_url_encoded("").unwrap().is_empty());
        assert!(ParameterSet::parse_form_url_encoded("justtext").unwrap().is_empty());
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let set = ParameterSet::parse_form_url_encoded("token=abc==&b=x%20y&flag&=orphan&empty=").unwrap();
        assert_eq!(names(&set), vec!["b", "empty", "token"]);
        assert_eq!(set.get("token").unwrap().value(), "abc==");
        assert_eq!(set.get("b").unwrap().value(), "x y");
        assert_eq!(set.get("empty").unwrap().value(), "");
    }

    #[test]
    fn test_parse_reports_decode_failures() {
        let err = ParameterSet::parse_form_url_encoded("a=1&b=%G1").unwrap_err();
        assert_eq!(
            err,
            ParameterSetError::Decoding {
                name: "b".into(),
                source: DecodeError::InvalidHexDigit { offset: 0 },
            }
        );
    }

    #[test]
    fn test_parse_round_trips_rendered_set() {
        let mut set = ParameterSet::new();
        set.add_string("name", "John Smith", None).unwrap();
        set.add_string("path", "/usr/local/bin?x", None).unwrap();
        set.add_int("age", 42, None).unwrap();
        set.add_bool("admin", false, None).unwrap();
        set.add_float("score", 99.5, None).unwrap();

        let parsed = ParameterSet::parse_form_url_encoded(&set.to_query_string()).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn test_collect_and_extend() {
        let set: ParameterSet = vec![
            Parameter::new("b", "1").unwrap(),
            Parameter::new("a", "1").unwrap(),
            Parameter::new("b", "2").unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_query_string(), "a=1&b=2");

        let mut more = set.clone();
        more.extend([Parameter::new("c", 3).unwrap()]);
        assert_eq!(more.len(), 3);
        assert!(more.contains("c"));
        assert_eq!(more.remove("c").unwrap().value(), "3");
        assert_eq!(more, set);
    }

    async fn form_body(form: Form) -> String {
        let chunks: Vec<_> = form.into_stream().try_collect().await.unwrap();
        String::from_utf8(chunks.concat()).unwrap()
    }

    #[tokio::test]
    async fn test_multipart_form() {
        let mut set = ParameterSet::new();
        set.add_string("b", "two", None).unwrap();
        set.add_string("a", "one", None).unwrap();

        let form = set.to_multipart_form();
        let boundary = form.boundary().to_string();
        let body = form_body(form).await;
        assert_eq!(
            body,
            format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"a\"\r\n\
                 content-type: text/plain; charset=utf-8\r\n\
                 content-encoding: UTF-8\r\n\
                 \r\n\
                 one\r\n\
                 --{boundary}\r\n\
                 Content-Disposition: form-data; name=\"b\"\r\n\
                 content-type: text/plain; charset=utf-8\r\n\
                 content-encoding: UTF-8\r\n\
                 \r\n\
                 two\r\n\
                 --{boundary}--\r\n"
            )
        );
    }

    #[tokio::test]
    async fn test_multipart_form_escapes_names() {
        let mut set = ParameterSet::new();
        set.add_string("say\"hi", "héllo", None).unwrap();

        let body = form_body(set.to_multipart_form()).await;
        assert!(body.contains("Content-Disposition: form-data; name*=utf-8''say%22hi\r\n"));
        assert!(body.contains("\r\n\r\nhéllo\r\n"));
    }
}
