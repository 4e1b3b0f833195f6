//! Command-line interface parsing for the daily weather fetcher
//!
//! The only input is a positional date. It is optional at the clap level so
//! that a bare invocation can print usage with an example instead of clap's
//! generic error.

use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use thiserror::Error;

/// Example invocation shown with usage and errors
pub const EXAMPLE: &str = "dayweather 2025-01-05";

/// Error types for CLI argument parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The date argument is not a valid YYYY-MM-DD date
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD, e.g. 2025-01-05")]
    InvalidDate(String),
}

/// Fetch one day of hourly historical weather and save it as JSON
#[derive(Parser, Debug)]
#[command(name = "dayweather")]
#[command(about = "Fetch one day of hourly historical weather and save it as JSON")]
#[command(version)]
pub struct Cli {
    /// Date to fetch, in YYYY-MM-DD form
    ///
    /// Example:
    ///   dayweather 2025-01-05
    #[arg(value_name = "DATE")]
    pub date: Option<String>,
}

/// Usage text printed when no date is given
pub fn usage() -> String {
    let usage = Cli::command().render_usage();
    format!("{}\nExample: {}\n(使用方法 / 例: {})", usage, EXAMPLE, EXAMPLE)
}

/// Parses a date argument.
///
/// Only the zero-padded `YYYY-MM-DD` form is accepted so the report's
/// `requested_date` and file names match the argument exactly.
///
/// # Returns
/// * `Ok(NaiveDate)` if the string is a valid date
/// * `Err(CliError::InvalidDate)` otherwise
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|date| date.format("%Y-%m-%d").to_string() == s)
        .ok_or_else(|| CliError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg_valid() {
        assert_eq!(
            parse_date_arg("2025-01-05").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
        );
        assert_eq!(
            parse_date_arg("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_date_arg_rejects_unpadded() {
        assert!(parse_date_arg("2025-1-5").is_err());
    }

    #[test]
    fn test_parse_date_arg_invalid() {
        let result = parse_date_arg("2025-02-30");
        assert_eq!(result, Err(CliError::InvalidDate("2025-02-30".to_string())));

        let err = parse_date_arg("yesterday").unwrap_err();
        assert!(err.to_string().contains("Invalid date"));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["dayweather"]);
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_cli_parse_date() {
        let cli = Cli::parse_from(["dayweather", "2025-01-05"]);
        assert_eq!(cli.date.as_deref(), Some("2025-01-05"));
    }

    #[test]
    fn test_usage_contains_example() {
        let text = usage();
        assert!(text.contains("dayweather"));
        assert!(text.contains(EXAMPLE));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
