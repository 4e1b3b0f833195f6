//! Day Weather CLI - archive one day of hourly historical weather
//!
//! Fetches 24 hourly observations for a fixed coordinate, aggregates daily
//! statistics and writes them to `outputs/<date>/daily_weather_<date>.json`.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use dayweather::cli::{parse_date_arg, usage, Cli, EXAMPLE};
use dayweather::config::Config;
use dayweather::pipeline;

/// Installs the global log subscriber, writing to stderr
fn setup_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(date_arg) = cli.date else {
        println!("{}", usage());
        return ExitCode::FAILURE;
    };

    let date = match parse_date_arg(&date_arg) {
        Ok(date) => date,
        Err(e) => {
            eprintln!("{}\nExample: {}", e, EXAMPLE);
            return ExitCode::FAILURE;
        }
    };

    dotenv::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.diagnostic());
            return ExitCode::FAILURE;
        }
    };

    setup_tracing();

    match pipeline::run(&config, date).await {
        Ok(outcome) => {
            for line in outcome.summary() {
                println!("{}", line);
            }
        }
        // Partial or total fetch failure still exits 0; only the write can fail here
        Err(e) => error!("run failed: {}", e),
    }

    ExitCode::SUCCESS
}
