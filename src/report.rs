//! Report persistence
//!
//! Writes a [`WeatherReport`] as pretty-printed JSON to
//! `<root>/<date>/daily_weather_<date>.json`, creating directories as needed.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::data::WeatherReport;

/// Errors that can occur while writing or reading a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Directory creation or file access failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes reports below an output root directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    /// Directory holding one subdirectory per date
    output_root: PathBuf,
}

impl ReportWriter {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Directory for a given date
    pub fn report_dir(&self, date: &str) -> PathBuf {
        self.output_root.join(date)
    }

    /// Full path of the report file for a given date
    pub fn report_path(&self, date: &str) -> PathBuf {
        self.report_dir(date)
            .join(format!("daily_weather_{}.json", date))
    }

    /// Writes `report`, replacing any previous file for the same date
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(ReportError)` - If directory creation, serialization or writing fails
    pub fn write(&self, report: &WeatherReport) -> Result<PathBuf, ReportError> {
        let dir = self.report_dir(&report.requested_date);
        fs::create_dir_all(&dir).map_err(|source| ReportError::Io {
            path: dir.clone(),
            source,
        })?;

        let json = serde_json::to_string_pretty(report)?;

        let path = self.report_path(&report.requested_date);
        fs::write(&path, json).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Reads a previously written report
pub fn load_report(path: &Path) -> Result<WeatherReport, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
