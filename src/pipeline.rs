//! The fetch → aggregate → write run

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::config::Config;
use crate::data::{WeatherClient, WeatherReport};
use crate::fetch::{fetch_hourly, fetch_sun_info};
use crate::report::{ReportError, ReportWriter};
use crate::sparkline::TemperatureSparkline;
use crate::stats::calculate_daily_stats;

/// Errors that end a run after fetching started
#[derive(Debug, Error)]
pub enum RunError {
    /// The report could not be written
    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),
}

/// A completed run
#[derive(Debug)]
pub struct RunOutcome {
    pub report: WeatherReport,
    /// Where the report was written
    pub path: PathBuf,
}

/// Fetches all hours of `date`, aggregates them and writes the report.
pub async fn run(config: &Config, date: NaiveDate) -> Result<RunOutcome, RunError> {
    let client = WeatherClient::new(config);
    let requested_date = date.format("%Y-%m-%d").to_string();

    let hourly = fetch_hourly(&client, config, date).await;
    let sun_info = fetch_sun_info(&client, config, &hourly.records).await;
    let stats = calculate_daily_stats(&hourly.records);

    let report = WeatherReport::new(
        requested_date,
        hourly.records,
        hourly.errors,
        sun_info,
        stats,
    );

    let path = ReportWriter::new(&config.output_root).write(&report)?;
    info!(
        "saved weather data for {} to {}",
        report.requested_date,
        path.display()
    );

    Ok(RunOutcome { report, path })
}

impl RunOutcome {
    /// Lines printed after a run
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "success: {}, errors: {} (取得成功: {}件, エラー: {}件)",
            self.report.data_points,
            self.report.errors.len(),
            self.report.data_points,
            self.report.errors.len()
        )];

        if let Some(metrics) = self.report.daily_statistics.metrics {
            let temp = metrics.temperature;
            let sparkline =
                TemperatureSparkline::new(&self.report.hourly_data, temp.min, temp.max).render();
            lines.push(format!(
                "temperature {} min {:.1}°C max {:.1}°C avg {:.1}°C",
                sparkline, temp.min, temp.max, temp.avg
            ));
        }

        if let Some(sun) = &self.report.sun_info.times {
            lines.push(format!(
                "sunrise {} / sunset {}",
                sun.sunrise_time, sun.sunset_time
            ));
        }

        lines
    }
}
