//! Google Directions HTTP client.
//!
//! Provides an async method for querying the Directions API and converting
//! the response into route candidates. Limits concurrent requests with a
//! semaphore.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Semaphore;

use crate::domain::RouteCandidate;
use crate::planner::{DirectionRequest, MappingService, PlanError, Timing};

use super::convert::convert_directions;
use super::error::MapsError;
use super::types::DirectionsResponse;

/// Default base URL for the Google Maps APIs.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Path of the Directions endpoint under the base URL.
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to Google)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Directions API client.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Fetch route candidates for a request.
    pub async fn directions(
        &self,
        request: &DirectionRequest,
    ) -> Result<Vec<RouteCandidate>, MapsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MapsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}{}", self.base_url, DIRECTIONS_PATH);
        let mut params = query_params(request);
        params.push(("key", self.api_key.clone()));

        tracing::debug!(mode = %request.mode, destination = %request.destination, "fetching directions");

        let requested_at = Utc::now();
        let response = self.http.get(&url).query(&params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| MapsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let routes = convert_directions(directions, request, requested_at)?;
        tracing::debug!(mode = %request.mode, routes = routes.len(), "directions fetched");
        Ok(routes)
    }
}

#[async_trait]
impl MappingService for GoogleMapsClient {
    async fn fetch_routes(
        &self,
        request: &DirectionRequest,
    ) -> Result<Vec<RouteCandidate>, PlanError> {
        self.directions(request)
            .await
            .map_err(|e| e.into_plan_error(request.mode))
    }
}

/// Query parameters for a request, excluding the API key.
fn query_params(request: &DirectionRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("origin", request.origin.clone()),
        ("destination", request.destination.clone()),
        ("mode", request.mode.as_str().to_string()),
    ];

    match request.timing {
        Timing::Now => {}
        Timing::ArriveBy(t) => params.push(("arrival_time", t.timestamp().to_string())),
        Timing::DepartAt(t) => params.push(("departure_time", t.timestamp().to_string())),
    }

    if request.alternatives {
        params.push(("alternatives", "true".to_string()));
    }

    params
}
