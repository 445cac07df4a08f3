use async_trait::async_trait;
use std::fmt::Debug;
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    model::WeatherRecord,
};

pub mod openweather;

pub use openweather::OpenWeatherClient;
pub use reqwest::StatusCode;

/// Anything that can turn a query URL into a weather record.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<WeatherRecord>;
}

/// Map a response status to the error the user sees. 2xx passes.
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    debug!(%status, body = %truncate_body(body), "weather request rejected");

    match status {
        StatusCode::UNAUTHORIZED => Err(WeatherError::Auth),
        StatusCode::NOT_FOUND => Err(WeatherError::NotFound),
        other => Err(WeatherError::Upstream {
            status: other.as_u16(),
        }),
    }
}

/// Parse a 2xx body. Anything that doesn't have the expected shape is a decode failure.
pub fn decode_record(body: &str) -> Result<WeatherRecord> {
    let record: WeatherRecord = serde_json::from_str(body).map_err(WeatherError::Decode)?;
    record.primary_condition()?;
    Ok(record)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE: &str = r#"{
        "coord": {"lon": -58.4, "lat": -34.6},
        "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
        "base": "stations",
        "main": {"temp": 21.6, "feels_like": 21.4, "temp_min": 20.0, "temp_max": 23.0,
                 "pressure": 1015, "humidity": 64},
        "visibility": 10000,
        "wind": {"speed": 10, "deg": 45},
        "clouds": {"all": 20},
        "dt": 1700000000,
        "sys": {"type": 1, "id": 8224, "country": "AR", "sunrise": 1699951000, "sunset": 1700000800},
        "timezone": -10800,
        "id": 3435910,
        "name": "Buenos Aires",
        "cod": 200
    }"#;

    #[test]
    fn success_status_passes() {
        assert!(check_status(StatusCode::OK, "").is_ok());
        assert!(check_status(StatusCode::NO_CONTENT, "").is_ok());
    }

    #[test]
    fn unauthorized_is_access_denied() {
        let err = check_status(StatusCode::UNAUTHORIZED, r#"{"cod":401}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Auth));
        assert!(err.to_string().starts_with("Access denied"));
    }

    #[test]
    fn not_found_is_unknown_city() {
        let err = check_status(StatusCode::NOT_FOUND, r#"{"cod":"404"}"#).unwrap_err();
        assert!(matches!(err, WeatherError::NotFound));
        assert!(err.to_string().starts_with("Can't find weather data"));
    }

    #[test]
    fn other_status_carries_code() {
        let err = check_status(StatusCode::TOO_MANY_REQUESTS, "slow down").unwrap_err();
        assert!(matches!(err, WeatherError::Upstream { status: 429 }));
    }

    #[test]
    fn decodes_sample_payload() {
        let record = decode_record(SAMPLE).expect("sample must decode");

        assert_eq!(record.name, "Buenos Aires");
        assert_eq!(record.sys.country, "AR");
        assert_eq!(record.coord.lon, -58.4);
        assert_eq!(record.weather[0].id, 801);
        assert_eq!(record.main.pressure, 1015.0);
        assert_eq!(record.wind.deg, 45.0);
        assert_eq!(record.wind.gust, None);
        assert_eq!(record.timezone, -10800);
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = decode_record("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
        assert_eq!(err.to_string(), "Couldn't read the server response.");
    }

    #[test]
    fn missing_field_is_decode_error() {
        let err = decode_record(r#"{"name": "Oslo"}"#).unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn empty_condition_list_is_rejected() {
        let body = SAMPLE.replace(
            r#"[{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}]"#,
            "[]",
        );
        let err = decode_record(&body).unwrap_err();
        assert!(matches!(err, WeatherError::MissingData(_)));
    }

    #[test]
    fn truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
