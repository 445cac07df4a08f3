use urlencoding::encode;

use crate::model::{Units, WeatherRequest};

/// Current weather by city name.
pub const BASE_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Build the request URL for a city-name lookup.
///
/// Every value is percent-encoded (a space becomes `%20`). The language code is passed
/// through as given; the service decides whether it's valid.
pub fn build_query(city_name: &str, language: &str, units: Units, api_key: &str) -> String {
    build_query_with_base(BASE_WEATHER_API_URL, city_name, language, units, api_key)
}

pub fn build_query_with_base(
    base_url: &str,
    city_name: &str,
    language: &str,
    units: Units,
    api_key: &str,
) -> String {
    format!(
        "{base_url}?q={}&lang={}&units={}&APPID={}",
        encode(city_name),
        encode(language),
        units.as_str(),
        encode(api_key),
    )
}

impl WeatherRequest {
    pub fn query_url(&self, base_url: &str, api_key: &str) -> String {
        build_query_with_base(base_url, &self.city, &self.language, self.units, api_key)
    }
}

/// Hide the API key before a URL goes to the log.
pub fn redact_key(url: &str) -> String {
    match url.find("APPID=") {
        Some(start) => {
            let value_start = start + "APPID=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
