use thiserror::Error;

/// Custom error types for the weather-cli application
#[derive(Error, Debug)]
pub enum AppError {
    /// No city was given on the command line
    #[error("no arguments provided")]
    MissingArgument,

    /// More than one token was given; they are never joined into one city
    #[error("too many arguments provided")]
    TooManyArguments,

    /// Error when the request could not be sent (DNS, connection, TLS)
    #[error("could not get weather data: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Error when the response body could not be read to the end
    #[error("could not read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Error when the API answers with anything but 200 OK
    #[error("weather API returned a non-success status: {0}")]
    UnexpectedStatus(String),

    /// Wrapper for JSON deserialization errors
    #[error("could not parse weather JSON: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error comes from argument resolution rather than the fetch.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, AppError::MissingArgument | AppError::TooManyArguments)
    }
}
