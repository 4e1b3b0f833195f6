//! Core data models for the daily weather report
//!
//! This module contains the records collected per hour, the derived daily
//! statistics and the report document that is persisted to disk.

pub mod weather;

pub use weather::{PointObservation, WeatherClient, WeatherError};

use serde::{Deserialize, Serialize};

/// Primary weather condition as reported upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition code
    pub id: u32,
    /// Condition group (e.g. "Clouds")
    pub main: String,
    /// Localized description
    pub description: String,
    /// Icon identifier
    pub icon: String,
}

/// Weather observed at one hour of the requested day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Localized wall-clock time of the query
    pub time: String,
    /// Epoch seconds the query was issued for
    pub unix_timestamp: i64,
    /// Temperature in Celsius
    pub temp: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Sea-level pressure in hPa
    pub pressure: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Primary weather condition
    pub weather: WeatherCondition,
    /// Cloud cover percentage
    pub clouds: f64,
    /// Visibility in meters, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Dew point in Celsius
    pub dew_point: f64,
    /// UV index, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uvi: Option<f64>,
}

/// A failed hourly fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchError {
    /// Hour of day that failed
    pub hour: u32,
    /// Failure message
    pub error: String,
}

/// Sunrise and sunset for the requested day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunrise_time: String,
    pub sunset: i64,
    pub sunset_time: String,
}

/// Sun information, serialized as `{}` when unavailable
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunInfo {
    #[serde(flatten)]
    pub times: Option<SunTimes>,
}

impl SunInfo {
    pub fn is_empty(&self) -> bool {
        self.times.is_none()
    }
}

/// Max/min/average of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

/// The four metric blocks of a non-empty day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    pub temperature: MetricStats,
    pub humidity: MetricStats,
    pub pressure: MetricStats,
    pub wind_speed: MetricStats,
}

/// Daily statistics, serialized as `{}` when no hour was fetched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistics {
    #[serde(flatten)]
    pub metrics: Option<DailyMetrics>,
}

impl DailyStatistics {
    pub fn is_empty(&self) -> bool {
        self.metrics.is_none()
    }
}

/// The persisted result of one run
///
/// `data_points` always equals `hourly_data.len()`; use [`WeatherReport::new`]
/// to keep the two in step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Date passed on the command line (YYYY-MM-DD)
    pub requested_date: String,
    /// Number of successfully fetched hours
    pub data_points: usize,
    /// Hours that failed
    pub errors: Vec<FetchError>,
    /// Sunrise/sunset, or empty
    pub sun_info: SunInfo,
    /// Aggregates over `hourly_data`, or empty
    pub daily_statistics: DailyStatistics,
    /// Successful hours in ascending hour order
    pub hourly_data: Vec<HourlyRecord>,
}

impl WeatherReport {
    pub fn new(
        requested_date: impl Into<String>,
        hourly_data: Vec<HourlyRecord>,
        errors: Vec<FetchError>,
        sun_info: SunInfo,
        daily_statistics: DailyStatistics,
    ) -> Self {
        Self {
            requested_date: requested_date.into(),
            data_points: hourly_data.len(),
            errors,
            sun_info,
            daily_statistics,
            hourly_data,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_sun_info_serializes_as_empty_object() {
        let value = serde_json::to_value(SunInfo::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_sun_info_fields_are_flat() {
        let info = SunInfo {
            times: Some(SunTimes {
                sunrise: 1_736_028_000,
                sunrise_time: "2025/1/5 6:50:00".to_string(),
                sunset: 1_736_064_000,
                sunset_time: "2025/1/5 16:40:00".to_string(),
            }),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["sunrise"], json!(1_736_028_000));
        assert_eq!(value["sunset_time"], json!("2025/1/5 16:40:00"));
    }

    #[test]
    fn test_empty_statistics_serializes_as_empty_object() {
        let value = serde_json::to_value(DailyStatistics::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_empty_objects_read_back_as_empty() {
        let sun: SunInfo = serde_json::from_str("{}").unwrap();
        assert!(sun.is_empty());
        let stats: DailyStatistics = serde_json::from_str("{}").unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn test_unreported_fields_are_omitted() {
        let mut hour = record(4, 1.0, 50.0, 1000.0, 1.0);
        hour.visibility = None;
        hour.uvi = None;

        let value = serde_json::to_value(&hour).unwrap();
        let fields = value.as_object().unwrap();
        assert!(!fields.contains_key("visibility"));
        assert!(!fields.contains_key("uvi"));

        let back: HourlyRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, hour);
    }

    #[test]
    fn test_report_counts_data_points() {
        let report = WeatherReport::new(
            "2025-01-05",
            vec![record(0, 1.0, 50.0, 1010.0, 2.0), record(1, 2.0, 55.0, 1011.0, 3.0)],
            vec![FetchError {
                hour: 2,
                error: "boom".to_string(),
            }],
            SunInfo::default(),
            DailyStatistics::default(),
        );
        assert_eq!(report.data_points, 2);
        assert_eq!(report.data_points, report.hourly_data.len());
    }

    #[test]
    fn test_report_field_names() {
        let report = WeatherReport::new(
            "2025-01-05",
            vec![],
            vec![],
            SunInfo::default(),
            DailyStatistics::default(),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "requested_date": "2025-01-05",
                "data_points": 0,
                "errors": [],
                "sun_info": {},
                "daily_statistics": {},
                "hourly_data": []
            })
        );
    }
}
