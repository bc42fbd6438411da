mod city;
mod error;
mod report;
mod weather;

use std::{env, io, io::Write, process::ExitCode};

use reqwest::Client;
use tracing::{Instrument, error, span};
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, weather::WeatherResponse};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // diagnostics go to stderr so stdout only carries the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let client = Client::new();
    run(&args, &client, weather::WEATHER_ENDPOINT, &mut io::stdout().lock()).await
}

/// Resolves the city from `args`, fetches its current weather from `endpoint` and
/// prints it to `out`. Every failure is reported on `out` and maps to exit code 1;
/// a city the API knows nothing about is not a failure.
async fn run<W: Write>(args: &[String], client: &Client, endpoint: &str, out: &mut W) -> ExitCode {
    let (city, report) = match resolve_and_fetch(args, client, endpoint).await {
        Ok(resolved) => resolved,
        Err(e) => {
            let prefix = if e.is_argument_error() {
                "Error"
            } else {
                "Error fetching weather"
            };
            if let Err(write_err) = writeln!(out, "{}: {}", prefix, e) {
                error!("failed to write error message: {}", write_err);
            }
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = report::print_report(out, &city, &report) {
        error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn resolve_and_fetch(
    args: &[String],
    client: &Client,
    endpoint: &str,
) -> Result<(String, WeatherResponse), AppError> {
    let city = city::get_city(args)?;
    let report = weather::fetch_weather(client, endpoint, &city)
        .instrument(span!(tracing::Level::INFO, "get_weather", city = %city))
        .await?;
    Ok((city, report))
}
