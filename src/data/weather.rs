//! OpenWeather "time machine" API client
//!
//! This module issues point-in-time weather queries for a fixed coordinate
//! and parses the first data point of each response.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use super::{HourlyRecord, WeatherCondition};
use crate::config::Config;

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Request failed with status code {status}{}", body_suffix(.body))]
    Status { status: StatusCode, body: String },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The response carried no data points
    #[error("Response contained no data points")]
    EmptyData,

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),
}

/// Drops the request URL, which carries the API key in its query string
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        WeatherError::RequestFailed(e.without_url())
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl WeatherError {
    /// True when upstream rejected the API key
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, WeatherError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

/// Time machine response structure
#[derive(Debug, Deserialize)]
struct TimeMachineResponse {
    data: Vec<PointObservation>,
}

/// One observation from the `data` array
#[derive(Debug, Clone, Deserialize)]
pub struct PointObservation {
    pub dt: i64,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    #[serde(default)]
    pub uvi: Option<f64>,
    pub clouds: f64,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind_speed: f64,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

impl PointObservation {
    /// Converts the observation into the record stored for `hour`.
    ///
    /// `time` and `unix_timestamp` describe the query instant, not `dt`.
    pub fn into_record(
        self,
        hour: u32,
        time: String,
        unix_timestamp: i64,
    ) -> Result<HourlyRecord, WeatherError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::MissingField("weather".to_string()))?;

        Ok(HourlyRecord {
            hour,
            time,
            unix_timestamp,
            temp: self.temp,
            feels_like: self.feels_like,
            humidity: self.humidity,
            pressure: self.pressure,
            wind_speed: self.wind_speed,
            weather,
            clouds: self.clouds,
            visibility: self.visibility,
            dew_point: self.dew_point,
            uvi: self.uvi,
        })
    }
}

/// Client for point-in-time weather queries
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    latitude: f64,
    longitude: f64,
    lang: String,
    units: String,
}

impl WeatherClient {
    /// Create a new WeatherClient from the run configuration
    pub fn new(config: &Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
            lang: config.lang.clone(),
            units: config.units.clone(),
        }
    }

    /// Fetch the observation closest to `timestamp`
    ///
    /// # Arguments
    /// * `timestamp` - Epoch seconds of the instant to query
    ///
    /// # Returns
    /// * `Ok(PointObservation)` - First data point of the response
    /// * `Err(WeatherError)` - If the request, status or parsing fails
    pub async fn fetch_point(&self, timestamp: i64) -> Result<PointObservation, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", self.latitude.to_string()),
                ("lon", self.longitude.to_string()),
                ("dt", timestamp.to_string()),
                ("appid", self.api_key.clone()),
                ("lang", self.lang.clone()),
                ("units", self.units.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(WeatherError::Status { status, body: text });
        }

        parse_response(&text)
    }
}

/// Parse a response body and take its first data point
fn parse_response(text: &str) -> Result<PointObservation, WeatherError> {
    let api_response: TimeMachineResponse = serde_json::from_str(text)?;
    api_response
        .data
        .into_iter()
        .next()
        .ok_or(WeatherError::EmptyData)
}
