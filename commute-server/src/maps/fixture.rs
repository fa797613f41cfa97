//! Fixture mapping service for running without API access.
//!
//! Loads recorded Directions responses from JSON files and serves them as
//! if they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{RouteCandidate, TravelMode};
use crate::planner::{DirectionRequest, MappingService, PlanError};

use super::convert::convert_directions;
use super::error::MapsError;
use super::types::DirectionsResponse;

/// Mapping service that answers every request for a mode with one recorded
/// response, regardless of origin and destination.
#[derive(Debug, Clone, Default)]
pub struct FixtureMappingService {
    responses: HashMap<TravelMode, DirectionsResponse>,
}

impl FixtureMappingService {
    /// Load responses from a directory.
    ///
    /// Expects files named after the mode (e.g., `driving.json`,
    /// `transit.json`). Other files are ignored.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, MapsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        for mode in TravelMode::ALL {
            let path = data_dir.join(format!("{}.json", mode.as_str()));
            if !path.is_file() {
                continue;
            }

            let json = std::fs::read_to_string(&path)
                .map_err(|e| MapsError::Fixture(format!("failed to read {path:?}: {e}")))?;
            let response: DirectionsResponse = serde_json::from_str(&json)
                .map_err(|e| MapsError::Fixture(format!("failed to parse {path:?}: {e}")))?;

            responses.insert(mode, response);
        }

        if responses.is_empty() {
            return Err(MapsError::Fixture(format!(
                "no fixture files found in {data_dir:?}"
            )));
        }

        tracing::info!(modes = responses.len(), dir = ?data_dir, "loaded directions fixtures");
        Ok(Self { responses })
    }

    /// Serve `response` for every request in `mode`.
    pub fn with_response(mut self, mode: TravelMode, response: DirectionsResponse) -> Self {
        self.responses.insert(mode, response);
        self
    }

    /// Modes that have a recorded response.
    pub fn available_modes(&self) -> Vec<TravelMode> {
        TravelMode::ALL
            .into_iter()
            .filter(|m| self.responses.contains_key(m))
            .collect()
    }

    /// Convert the recorded response for the request's mode.
    pub fn directions(&self, request: &DirectionRequest) -> Result<Vec<RouteCandidate>, MapsError> {
        let response = self.responses.get(&request.mode).ok_or_else(|| {
            MapsError::Fixture(format!(
                "no fixture for {} requests. Available: {:?}",
                request.mode,
                self.available_modes()
            ))
        })?;

        convert_directions(response.clone(), request, Utc::now())
    }
}

#[async_trait]
impl MappingService for FixtureMappingService {
    async fn fetch_routes(
        &self,
        request: &DirectionRequest,
    ) -> Result<Vec<RouteCandidate>, PlanError> {
        self.directions(request)
            .map_err(|e| e.into_plan_error(request.mode))
    }
}
