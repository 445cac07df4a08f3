//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credentials loading
//! - Query building and the OpenWeather client
//! - Condition / wind-bearing classification
//! - The terminal report
//!
//! [`report`] strings them together; the binary only parses arguments and picks an exit code.

pub mod classify;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;

use chrono::Local;
use std::io::Write;

pub use config::{Config, Credentials, load_api_key};
pub use display::Report;
pub use error::{Result, WeatherError};
pub use model::{Units, WeatherRecord, WeatherRequest};
pub use provider::{OpenWeatherClient, WeatherSource};
pub use query::build_query;

/// Fetch current weather for `request` and write the report to `out`.
pub async fn report<W: Write>(
    source: &dyn WeatherSource,
    request: &WeatherRequest,
    credentials: &Credentials,
    out: &mut W,
) -> Result<()> {
    let url = request.query_url(&credentials.base_url, &credentials.api_key);
    let record = source.fetch(&url).await?;

    Report::from_record(&record, request.units, &Local)?.write_to(out)?;
    Ok(())
}
