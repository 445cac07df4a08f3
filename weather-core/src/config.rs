use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{Result, WeatherError},
    query::BASE_WEATHER_API_URL,
};

/// File name looked up in the working directory, then in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "secrets.toml";

/// Environment variable that, when set, replaces the key from the file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// The `[openweather]` section of the credentials file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OpenWeatherConfig {
    pub api_key: Option<String>,
    /// Overrides the default endpoint, e.g. for a caching proxy.
    pub base_url: Option<String>,
}

/// Top-level credentials file.
///
/// Example TOML:
/// [openweather]
/// api_key = "..."
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub openweather: Option<OpenWeatherConfig>,
}

/// What the rest of the program needs out of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    /// Read and parse the file at `path`. A missing file is an error, not an empty config.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WeatherError::config(path, format!("failed to read file ({e})")))?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            let hint = if has_unquoted_value(contents) {
                "; values must be quoted, e.g. api_key = \"<KEY>\""
            } else {
                ""
            };
            WeatherError::config(path, format!("failed to parse file ({}){hint}", e.message()))
        })
    }

    /// Extract the API key and endpoint. `path` is only used for error messages.
    pub fn credentials(&self, path: &Path) -> Result<Credentials> {
        let section = self
            .openweather
            .as_ref()
            .ok_or_else(|| WeatherError::config(path, "missing [openweather] section"))?;

        let api_key = section
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WeatherError::config(path, "missing api_key in [openweather]"))?;

        Ok(Credentials {
            api_key: api_key.to_string(),
            base_url: section
                .base_url
                .clone()
                .unwrap_or_else(|| BASE_WEATHER_API_URL.to_string()),
        })
    }

    /// Pick the credentials file to read.
    ///
    /// An explicit path always wins. Otherwise `secrets.toml` in the working directory,
    /// then the platform config directory. When neither exists the working-directory
    /// path is returned so the error points at the most obvious place.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return local;
        }

        match Self::platform_file_path() {
            Some(global) if global.exists() => global,
            _ => local,
        }
    }

    /// Path to the credentials file in the platform config directory.
    pub fn platform_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "weather-task", "weather-cli")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

impl Credentials {
    /// Resolve credentials: a non-empty `env_key` (from [`API_KEY_ENV`]) skips the file.
    pub fn resolve(explicit: Option<&Path>, env_key: Option<String>) -> Result<Self> {
        if let Some(api_key) = env_key.filter(|key| !key.trim().is_empty()) {
            debug!("using API key from {API_KEY_ENV}");
            return Ok(Self {
                api_key: api_key.trim().to_string(),
                base_url: BASE_WEATHER_API_URL.to_string(),
            });
        }

        let path = Config::resolve_path(explicit);
        debug!(path = %path.display(), "loading credentials");
        Config::load_from(&path)?.credentials(&path)
    }
}

// INI style `api_key=KEY`, as older secrets.ini files were written.
fn has_unquoted_value(contents: &str) -> bool {
    contents.lines().any(|line| {
        line.split_once('=').is_some_and(|(key, value)| {
            let value = value.trim();
            !key.trim().is_empty()
                && !key.trim_start().starts_with(['#', '['])
                && !value.is_empty()
                && !value.starts_with(['"', '\''])
        })
    })
}

/// Read the OpenWeather API key from the credentials file at `path`.
pub fn load_api_key(path: &Path) -> Result<String> {
    Ok(Config::load_from(path)?.credentials(path)?.api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_api_key_from_openweather_section() {
        let file = write_config("[openweather]\napi_key = \"OPEN_KEY\"\n");

        let key = load_api_key(file.path()).expect("key must load");
        assert_eq!(key, "OPEN_KEY");
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_api_key(Path::new("/definitely/not/here/secrets.toml")).unwrap_err();

        assert!(matches!(err, WeatherError::Config { .. }));
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn missing_section_is_config_error() {
        let file = write_config("[other]\napi_key = \"KEY\"\n");

        let err = load_api_key(file.path()).unwrap_err();
        assert!(err.to_string().contains("missing [openweather] section"));
    }

    #[test]
    fn missing_or_blank_key_is_config_error() {
        for contents in ["[openweather]\n", "[openweather]\napi_key = \"  \"\n"] {
            let file = write_config(contents);
            let err = load_api_key(file.path()).unwrap_err();
            assert!(err.to_string().contains("missing api_key"), "{contents:?}");
        }
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let file = write_config("[openweather\napi_key = ");

        let err = load_api_key(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse file"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn ini_style_key_gets_quoting_hint() {
        let file = write_config("[openweather]\napi_key=0123abcd\n");

        let err = load_api_key(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("failed to parse file"));
        assert!(msg.contains("values must be quoted"), "{msg}");
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn quoted_values_get_no_hint() {
        assert!(!has_unquoted_value("[openweather]\napi_key = \"K\"\n# note = x\n"));
        assert!(has_unquoted_value("[openweather]\napi_key = K\n"));
    }

    #[test]
    fn base_url_defaults_and_can_be_overridden() {
        let plain = write_config("[openweather]\napi_key = \"K\"\n");
        let creds = Config::load_from(plain.path()).unwrap().credentials(plain.path()).unwrap();
        assert_eq!(creds.base_url, BASE_WEATHER_API_URL);

        let proxied = write_config(
            "[openweather]\napi_key = \"K\"\nbase_url = \"http://localhost:8080/w\"\n",
        );
        let creds =
            Config::load_from(proxied.path()).unwrap().credentials(proxied.path()).unwrap();
        assert_eq!(creds.base_url, "http://localhost:8080/w");
    }

    #[test]
    fn env_key_takes_precedence_over_file() {
        let creds = Credentials::resolve(
            Some(Path::new("/definitely/not/here/secrets.toml")),
            Some("ENV_KEY".to_string()),
        )
        .expect("env key needs no file");

        assert_eq!(creds.api_key, "ENV_KEY");
        assert_eq!(creds.base_url, BASE_WEATHER_API_URL);
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let file = write_config("[openweather]\napi_key = \"FILE_KEY\"\n");

        let creds = Credentials::resolve(Some(file.path()), Some(String::new())).unwrap();
        assert_eq!(creds.api_key, "FILE_KEY");
    }

    #[test]
    fn explicit_path_always_wins() {
        let path = Path::new("custom.toml");
        assert_eq!(Config::resolve_path(Some(path)), PathBuf::from("custom.toml"));
    }
}
