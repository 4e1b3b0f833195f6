//! Run configuration
//!
//! The API key is read once at startup and carried in an explicit [`Config`]
//! value; everything else has fixed defaults that tests may override.

use std::path::PathBuf;
use std::time::Duration;

use chrono_tz::Tz;
use thiserror::Error;

/// Environment variable holding the OpenWeather API key
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Point-in-time query endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/3.0/onecall/timemachine";

/// Hachioji, Tokyo
const DEFAULT_LATITUDE: f64 = 35.656;
const DEFAULT_LONGITUDE: f64 = 139.324;

/// Delay between consecutive upstream calls
const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// Errors raised while building the configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The API key variable is unset or empty
    #[error("environment variable OPENWEATHER_API_KEY is not set")]
    MissingApiKey,
}

impl ConfigError {
    /// Operator-facing explanation, English followed by Japanese
    pub fn diagnostic(&self) -> String {
        match self {
            ConfigError::MissingApiKey => format!(
                "Error: environment variable {var} is not set.\n\
                 Create a .env file containing {var}=<your key>.\n\
                 エラー: 環境変数 {var} が設定されていません。\n\
                 .envファイルを作成し、APIキーを設定してください。",
                var = API_KEY_VAR
            ),
        }
    }
}

/// Everything a run needs besides the requested date
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather API key
    pub api_key: String,
    /// Query endpoint
    pub base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Response language
    pub lang: String,
    /// Unit system
    pub units: String,
    /// Timezone for hour boundaries and display strings
    pub timezone: Tz,
    /// Wait after every hourly attempt
    pub pacing: Duration,
    /// Directory that receives `<date>/daily_weather_<date>.json`
    pub output_root: PathBuf,
}

impl Config {
    /// Creates a Config with default settings for the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            lang: "ja".to_string(),
            units: "metric".to_string(),
            timezone: chrono_tz::Asia::Tokyo,
            pacing: DEFAULT_PACING,
            output_root: PathBuf::from("outputs"),
        }
    }

    /// Reads the API key from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a Config using `lookup` to resolve environment variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }
}
