//! Hourly and sun-info fetchers
//!
//! Hours are fetched strictly one at a time, 0 through 23, with a fixed
//! pause after each attempt so upstream rate limits are respected. A failed
//! hour is recorded and never retried.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::data::{FetchError, HourlyRecord, SunInfo, SunTimes, WeatherClient, WeatherError};
use crate::time::{date_to_epoch, epoch_to_local_string, TimeError};

/// Hint logged when upstream rejects the API key
pub const UNAUTHORIZED_HINT: &str =
    "API key is invalid or has no access to the Time Machine API (APIキーが無効か、Time Machine APIへのアクセス権限がありません)";

/// Result of the hourly loop
#[derive(Debug, Default)]
pub struct HourlyOutcome {
    /// Successful hours in ascending order
    pub records: Vec<HourlyRecord>,
    /// Failed hours in ascending order
    pub errors: Vec<FetchError>,
}

/// Fetches one observation per hour of `date`.
///
/// Every hour in 0..=23 ends up in exactly one of `records` or `errors`.
pub async fn fetch_hourly(
    client: &WeatherClient,
    config: &Config,
    date: NaiveDate,
) -> HourlyOutcome {
    let mut outcome = HourlyOutcome::default();
    let mut hinted = false;

    info!("fetching one day of data for {}", date);

    for hour in 0..24 {
        info!("fetching {}:00", hour);

        match fetch_hour(client, config, date, hour).await {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                warn!("failed to fetch {}:00: {}", hour, e);
                if !hinted && e.is_unauthorized() {
                    warn!("{}", UNAUTHORIZED_HINT);
                    hinted = true;
                }
                outcome.errors.push(FetchError {
                    hour,
                    error: e.to_string(),
                });
            }
        }

        tokio::time::sleep(config.pacing).await;
    }

    outcome
}

/// Errors from one upstream step, covering time conversion and the request
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

impl StepError {
    fn is_unauthorized(&self) -> bool {
        matches!(self, StepError::Weather(e) if e.is_unauthorized())
    }
}

async fn fetch_hour(
    client: &WeatherClient,
    config: &Config,
    date: NaiveDate,
    hour: u32,
) -> Result<HourlyRecord, StepError> {
    let timestamp = date_to_epoch(date, hour, config.timezone)?;
    let time = epoch_to_local_string(timestamp, config.timezone)?;
    let point = client.fetch_point(timestamp).await?;
    Ok(point.into_record(hour, time, timestamp)?)
}

/// Fetches sunrise/sunset using the first record's timestamp.
///
/// Best-effort: returns empty [`SunInfo`] when `records` is empty or the
/// query fails.
pub async fn fetch_sun_info(
    client: &WeatherClient,
    config: &Config,
    records: &[HourlyRecord],
) -> SunInfo {
    let Some(first) = records.first() else {
        return SunInfo::default();
    };

    match fetch_sun_times(client, config, first.unix_timestamp).await {
        Ok(times) => SunInfo { times: Some(times) },
        Err(e) => {
            warn!("failed to fetch sunrise/sunset: {}", e);
            SunInfo::default()
        }
    }
}

async fn fetch_sun_times(
    client: &WeatherClient,
    config: &Config,
    timestamp: i64,
) -> Result<SunTimes, StepError> {
    let point = client.fetch_point(timestamp).await?;
    let sunrise = point
        .sunrise
        .ok_or_else(|| WeatherError::MissingField("sunrise".to_string()))?;
    let sunset = point
        .sunset
        .ok_or_else(|| WeatherError::MissingField("sunset".to_string()))?;

    Ok(SunTimes {
        sunrise,
        sunrise_time: epoch_to_local_string(sunrise, config.timezone)?,
        sunset,
        sunset_time: epoch_to_local_string(sunset, config.timezone)?,
    })
}
