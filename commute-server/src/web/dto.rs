//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Event, RouteCandidate};

/// Request to plan a commute to one of the user's stored events.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Where the user is leaving from
    pub origin: String,

    /// Name of a stored event
    pub event_name: String,

    /// Compare these modes instead of using the stored commute method
    #[serde(default)]
    pub modes: Vec<String>,
}

/// The best route found.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanRouteResponse {
    pub event: String,
    pub route: RouteCandidate,
}

/// Events actually added by an add-events request.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddEventsResponse {
    pub added: Vec<Event>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
