//! A small client for calling JSON APIs over HTTP(S).
//!
//! Build a [`ParameterSet`], wrap it in an [`ApiMethod`] and let
//! [`SimpleHttpClient`] send it and deserialize the response:
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use simple_http_client::{ApiMethod, HttpMethod, ParameterSet, SimpleHttpClient};
//!
//! #[derive(Deserialize)]
//! struct Forecast {
//!     temperature: f64,
//! }
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let mut params = ParameterSet::new();
//! params.add_string("city", "Zürich", None)?;
//! params.add_string("units", "metric", Some("metric"))?;
//!
//! let method = ApiMethod::new("https://weather.example.com/forecast", HttpMethod::Get, Some(params))?;
//! let client = SimpleHttpClient::new()?;
//! let forecast: Forecast = client.get(&method).await?;
//! println!("{}°C", forecast.temperature);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod encoding;
pub mod http;
pub mod logging;
pub mod params;

pub use crate::config::ClientConfig;
pub use crate::http::{ApiMethod, HttpError, HttpMethod, SimpleHttpClient};
pub use crate::params::{ArgumentError, Parameter, ParameterSet};
