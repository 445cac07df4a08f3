use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a weather report from being produced.
///
/// Each variant renders as a single line meant for the end user; the binary
/// prints it verbatim and exits with [`WeatherError::exit_code`].
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Couldn't load the API key from {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("Access denied. Check your API key.")]
    Auth,

    #[error("Can't find weather data for this city.")]
    NotFound,

    #[error("Something went wrong... ({status})")]
    Upstream { status: u16 },

    #[error("Something went wrong... ({0})")]
    Transport(#[source] reqwest::Error),

    #[error("Couldn't read the server response.")]
    Decode(#[source] serde_json::Error),

    #[error("Couldn't read the server response: {0}.")]
    MissingData(&'static str),

    #[error("Couldn't write the report: {0}")]
    Output(#[from] std::io::Error),
}

impl WeatherError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            WeatherError::Config { .. } => 2,
            WeatherError::Auth => 3,
            WeatherError::NotFound => 4,
            WeatherError::Upstream { .. } | WeatherError::Transport(_) => 5,
            WeatherError::Decode(_) | WeatherError::MissingData(_) => 6,
            WeatherError::Output(_) => 7,
        }
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
