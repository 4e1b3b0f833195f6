//! Conversions between calendar dates, epoch seconds and display strings
//!
//! All wall-clock values in a report are expressed in a single timezone
//! (Asia/Tokyo by default), so both directions take the timezone explicitly.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use thiserror::Error;

/// Display format matching the `ja-JP` locale, e.g. `2025/1/5 0:00:00`
const DISPLAY_FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Errors that can occur when converting times
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeError {
    /// Hour outside 0..=23
    #[error("Invalid hour: {0}")]
    InvalidHour(u32),

    /// The local time does not map to a single instant
    #[error("Ambiguous or skipped local time: {0} {1}:00")]
    AmbiguousLocalTime(NaiveDate, u32),

    /// Epoch value out of range
    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// Returns the epoch seconds of `date` at `hour`:00:00 in `tz`.
///
/// # Arguments
/// * `date` - The calendar date
/// * `hour` - Hour of day (0-23)
/// * `tz` - Timezone the wall-clock time is interpreted in
pub fn date_to_epoch(date: NaiveDate, hour: u32, tz: Tz) -> Result<i64, TimeError> {
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .ok_or(TimeError::InvalidHour(hour))?;

    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or(TimeError::AmbiguousLocalTime(date, hour))
}

/// Formats epoch seconds as a display string in `tz`.
pub fn epoch_to_local_string(epoch: i64, tz: Tz) -> Result<String, TimeError> {
    let utc = DateTime::from_timestamp(epoch, 0).ok_or(TimeError::OutOfRange(epoch))?;
    Ok(utc.with_timezone(&tz).format(DISPLAY_FORMAT).to_string())
}
