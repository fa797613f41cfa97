//! Mapping client error types.

use std::fmt;

use crate::domain::TravelMode;
use crate::planner::PlanError;

/// Errors from the Directions HTTP client.
#[derive(Debug)]
pub enum MapsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error HTTP status
    ApiError { status: u16, message: String },

    /// Directions API answered with a non-OK status field
    Status {
        status: String,
        message: Option<String>,
    },

    /// Over the API's query limit
    RateLimited,

    /// Response parsed but lacks routes or legs
    Malformed(String),

    /// Offline fixtures unavailable or incomplete
    Fixture(String),
}

impl MapsError {
    /// Report this failure as a planning error for `mode`.
    pub fn into_plan_error(self, mode: TravelMode) -> PlanError {
        PlanError::ExternalService {
            mode,
            message: self.to_string(),
        }
    }
}

impl fmt::Display for MapsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapsError::Http(e) => write!(f, "HTTP error: {e}"),
            MapsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            MapsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            MapsError::Status { status, message } => {
                write!(f, "directions status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            MapsError::RateLimited => write!(f, "rate limited by directions API"),
            MapsError::Malformed(msg) => write!(f, "malformed directions response: {msg}"),
            MapsError::Fixture(msg) => write!(f, "fixture error: {msg}"),
        }
    }
}

impl std::error::Error for MapsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        MapsError::Http(err)
    }
}
