//! Directions API response types.
//!
//! Only the parts the planner reads are modelled; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

use crate::domain::Leg;

/// Top-level Directions API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    pub status: String,

    #[serde(default)]
    pub routes: Option<Vec<DirectionsRoute>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// A route as the Directions API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub legs: Option<Vec<Leg>>,
}
