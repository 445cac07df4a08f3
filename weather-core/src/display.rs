//! Turns a [`WeatherRecord`] into the terminal report.
//!
//! [`Report::from_record`] does all the arithmetic and formatting of values,
//! [`Report::write_to`] only lays the lines out and applies colour.

use chrono::{TimeZone, Utc};
use colored::Colorize;
use std::{fmt::Display, io::Write};

use crate::{
    classify::{Compass, ConditionKind, classify_bearing, classify_condition},
    error::Result,
    model::{Units, WeatherRecord},
};

/// Width the title is centred in.
pub const PADDING: usize = 20;

const KMH_PER_MS: f64 = 3.6;
const OBSERVED_FORMAT: &str = "%d/%m/%Y - %H:%M:%S";
const SUN_FORMAT: &str = "%d/%m/%Y - %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub condition: ConditionKind,
    pub description: String,
    pub observed: String,
    pub temperature: String,
    pub feels_like: String,
    pub pressure: String,
    pub humidity: String,
    pub compass: Compass,
    pub wind_speed: String,
    pub gust: String,
    pub sunrise: String,
    pub sunset: String,
    pub timezone: String,
    pub longitude: String,
    pub latitude: String,
    pub map_url: String,
}

impl Report {
    /// Derive every display value. Timestamps are shown in `tz`.
    pub fn from_record<Tz>(record: &WeatherRecord, units: Units, tz: &Tz) -> Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let condition = record.primary_condition()?;
        let degree = if units.is_imperial() { "°F" } else { "°C" };
        let (longitude, latitude) = coordinate_labels(record.coord.lon, record.coord.lat);

        Ok(Self {
            title: format!("{}, {}", record.name, record.sys.country),
            condition: classify_condition(condition.id),
            description: capitalize(&condition.description),
            observed: format_timestamp(record.dt, tz, OBSERVED_FORMAT),
            temperature: format!("{}{degree}", whole(record.main.temp)),
            feels_like: format!("{}{degree}", whole(record.main.feels_like)),
            pressure: format!("{}hPa", whole(record.main.pressure)),
            humidity: format!("{}%", whole(record.main.humidity)),
            compass: classify_bearing(record.wind.deg),
            wind_speed: wind_speed(record.wind.speed, units),
            gust: gust_speed(record.wind.gust_or_zero(), units),
            sunrise: format_timestamp(record.sys.sunrise, tz, SUN_FORMAT),
            sunset: format_timestamp(record.sys.sunset, tz, SUN_FORMAT),
            timezone: format!("{} GMT", round_to(record.timezone as f64 / 3600.0, 1)),
            longitude,
            latitude,
            map_url: format!(
                "https://osm.org/?mlat={}&mlon={}",
                record.coord.lat, record.coord.lon
            ),
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let title = format!("{:^PADDING$}", self.title).reversed();
        let headline = format!("{} {}", self.condition.symbol(), self.description);
        let headline = match self.condition.color() {
            Some(color) => headline.color(color).to_string(),
            None => headline,
        };

        writeln!(out, "{title} \t{headline}")?;
        writeln!(out, "Update: {}.", self.observed)?;
        writeln!(out, "Temp: {}. Feels like: {}.", self.temperature, self.feels_like)?;
        writeln!(out, "Pressure: {}. Humidity: {}.", self.pressure, self.humidity)?;
        writeln!(
            out,
            "Wind: {} {} from {}. Gusts: {}.",
            self.compass.arrow(),
            self.wind_speed,
            self.compass.name(),
            self.gust,
        )?;
        writeln!(
            out,
            "Sunrise: {}. Sunset: {}. Timezone: {}.",
            self.sunrise, self.sunset, self.timezone
        )?;
        writeln!(
            out,
            "Coordinates: {}. {}. Map: {}",
            self.longitude, self.latitude, self.map_url
        )?;

        Ok(())
    }
}

/// Metric readings arrive in m/s and are shown in km/h; imperial mph is shown as sent.
fn wind_speed(speed: f64, units: Units) -> String {
    match units {
        Units::Imperial => format!("{speed} mph"),
        Units::Metric => format!("{:.1} Km/h", speed * KMH_PER_MS),
    }
}

fn gust_speed(gust: f64, units: Units) -> String {
    match units {
        Units::Imperial => format!("{gust} mph"),
        Units::Metric => format!("{} Km/h", whole(gust * KMH_PER_MS)),
    }
}

/// Longitude is East/West, latitude North/South, each by its own sign.
pub fn coordinate_labels(lon: f64, lat: f64) -> (String, String) {
    let longitude = if lon < 0.0 {
        format!("{} West", lon.abs())
    } else {
        format!("{lon} East")
    };
    let latitude = if lat < 0.0 {
        format!("{} South", lat.abs())
    } else {
        format!("{lat} North")
    };

    (longitude, latitude)
}

/// Unix seconds in `tz`, or `n/a` for values chrono can't represent.
pub fn format_timestamp<Tz>(ts: i64, tz: &Tz, fmt: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match Utc.timestamp_opt(ts, 0).single() {
        Some(utc) => utc.with_timezone(tz).format(fmt).to_string(),
        None => "n/a".to_string(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // no "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn whole(value: f64) -> f64 {
    round_to(value, 0)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
