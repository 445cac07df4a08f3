use serde::Deserialize;

use crate::error::{Result, WeatherError};

/// Unit system requested from the API. Drives both the query and the display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Token sent as the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn is_imperial(&self) -> bool {
        matches!(self, Units::Imperial)
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed user input for one lookup.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    pub language: String,
    pub units: Units,
}

impl WeatherRequest {
    /// City tokens are joined with single spaces, the way they were typed.
    pub fn new<S: AsRef<str>>(city: &[S], language: impl Into<String>, units: Units) -> Self {
        let city = city.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");

        Self {
            city,
            language: language.into(),
            units,
        }
    }
}

/// Current-weather payload, shaped like the OpenWeather `/data/2.5/weather` response.
/// Fields the report doesn't use are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WeatherRecord {
    pub name: String,
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: Main,
    pub wind: Wind,
    pub dt: i64,
    pub sys: Sys,
    /// Shift from UTC in seconds.
    pub timezone: i64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Condition {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Wind {
    pub speed: f64,
    pub deg: f64,
    #[serde(default)]
    pub gust: Option<f64>,
}

impl Wind {
    /// Gust speed, or 0 when the station didn't report one.
    pub fn gust_or_zero(&self) -> f64 {
        self.gust.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl WeatherRecord {
    /// The first (primary) condition. The API always sends at least one.
    pub fn primary_condition(&self) -> Result<&Condition> {
        self.weather
            .first()
            .ok_or(WeatherError::MissingData("no weather conditions"))
    }
}
