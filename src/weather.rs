use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::error::AppError;

pub(crate) mod response;

pub use response::WeatherResponse;

pub const WEATHER_ENDPOINT: &str = "https://wttr.in";

// wttr.in answers with JSON instead of plain text when asked for `j1`
const WEATHER_FORMAT: &str = "j1";

/// Builds the request URL, with the location as a single percent-encoded path segment.
fn weather_url(endpoint: &str, location: &str) -> String {
    format!(
        "{}/{}?format={}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(location),
        WEATHER_FORMAT
    )
}

/// Fetches the current weather for `location`, issuing one GET against `endpoint`
/// (normally [`WEATHER_ENDPOINT`]) and decoding the body.
///
/// # Returns
/// * `WeatherResponse` when the API answers 200 with well-formed JSON
/// * `RequestFailed` / `ReadBody` on transport problems
/// * `UnexpectedStatus` for any status other than 200 (the body is not read)
/// * `ParseFailed` when the body does not decode
pub async fn fetch_weather(
    client: &Client,
    endpoint: &str,
    location: &str,
) -> Result<WeatherResponse, AppError> {
    info!("Fetching weather data for location: {}", location);
    let url = weather_url(endpoint, location);
    debug!("Request URL: {}", url);

    let response = client.get(&url).send().await?;

    if response.status() != StatusCode::OK {
        // the caller reports the failure; keep stderr quiet at the default level
        warn!("Failed to fetch weather data: {}", response.status());
        return Err(AppError::UnexpectedStatus(response.status().to_string()));
    }

    let body = response.bytes().await.map_err(AppError::ReadBody)?;
    let weather_response: WeatherResponse = WeatherResponse::from_slice(&body)?;
    debug!("Weather data fetched successfully: {:?}", weather_response);
    Ok(weather_response)
}
