//! Route candidates returned by the mapping service.
//!
//! These mirror the mapping service's JSON shape, so every leg field is
//! optional here. Ranking validates the fields it needs before comparing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TravelMode;

/// One complete proposed route between origin and destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// Mode that produced this route. Never used for ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TravelMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    pub legs: Vec<Leg>,
}

impl RouteCandidate {
    /// Create a candidate from its legs.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            mode: None,
            summary: None,
            legs,
        }
    }

    /// Tag the candidate with the mode that produced it.
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The leg that ranking looks at.
    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }
}

/// One contiguous travel segment of a route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Measure>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Measure>,

    /// Turn-by-turn steps. Opaque; only the count matters for ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<Timestamp>,
}

impl Leg {
    /// Create a fully-populated leg.
    pub fn new(
        duration_secs: u64,
        steps: Vec<serde_json::Value>,
        arrival: DateTime<Utc>,
    ) -> Self {
        Self {
            distance: None,
            duration: Some(Measure::new(duration_secs)),
            steps: Some(steps),
            departure_time: None,
            arrival_time: Some(Timestamp::new(arrival)),
        }
    }

    /// Set the leg distance in meters.
    pub fn with_distance(mut self, meters: u64) -> Self {
        self.distance = Some(Measure::new(meters));
        self
    }

    /// Duration in seconds, if present.
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.as_ref().map(|d| d.value)
    }

    /// Number of steps, if the step list is present.
    pub fn step_count(&self) -> Option<usize> {
        self.steps.as_ref().map(Vec::len)
    }

    /// Arrival time, if present.
    pub fn arrival(&self) -> Option<DateTime<Utc>> {
        self.arrival_time.as_ref().map(|t| t.value)
    }
}

/// A numeric quantity with optional display text (seconds or meters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    pub value: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Measure {
    pub fn new(value: u64) -> Self {
        Self { value, text: None }
    }
}

/// A point in time, carried as epoch seconds on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub value: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl Timestamp {
    pub fn new(value: DateTime<Utc>) -> Self {
        Self {
            value,
            text: None,
            time_zone: None,
        }
    }
}
