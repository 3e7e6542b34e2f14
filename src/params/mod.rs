//! Request parameters and their wire renderings.
//!
//! A [`ParameterSet`] holds name-unique [`Parameter`]s in sorted order and
//! renders them as a query string / form-urlencoded body, an authorization
//! header value, or a `multipart/form-data` form with one plain-text part per
//! parameter.

mod error;
mod parameter;
mod parameter_set;

pub use error::{ArgumentError, ParameterSetError};
pub use parameter::{BODY_PART_CONTENT_ENCODING, BODY_PART_CONTENT_TYPE, Parameter, ParameterValue};
pub use parameter_set::ParameterSet;
