//! Conversion from Directions API responses to route candidates.

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{RouteCandidate, Timestamp};
use crate::planner::{DirectionRequest, Timing};

use super::error::MapsError;
use super::types::DirectionsResponse;

/// Convert a Directions response into route candidates.
///
/// `ZERO_RESULTS` yields no candidates. Any other non-`OK` status is an
/// error, as is a response without `routes` or a route without `legs`.
///
/// The API only reports arrival times for transit. Legs without one get
/// `departure + duration`, where departure is the leg's own departure
/// time, else the previous leg's arrival, else the requested departure
/// time, else `requested_at`.
pub fn convert_directions(
    response: DirectionsResponse,
    request: &DirectionRequest,
    requested_at: DateTime<Utc>,
) -> Result<Vec<RouteCandidate>, MapsError> {
    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Ok(Vec::new()),
        "OVER_QUERY_LIMIT" => return Err(MapsError::RateLimited),
        _ => {
            return Err(MapsError::Status {
                status: response.status,
                message: response.error_message,
            });
        }
    }

    let routes = response
        .routes
        .ok_or_else(|| MapsError::Malformed("response has no routes".to_string()))?;

    let start = match request.timing {
        Timing::DepartAt(t) => t,
        Timing::Now | Timing::ArriveBy(_) => requested_at,
    };

    routes
        .into_iter()
        .enumerate()
        .map(|(i, route)| {
            let mut legs = route
                .legs
                .filter(|legs| !legs.is_empty())
                .ok_or_else(|| MapsError::Malformed(format!("route {i} has no legs")))?;

            let mut cursor = start;
            for leg in &mut legs {
                let departure = leg.departure_time.as_ref().map_or(cursor, |t| t.value);
                if leg.arrival_time.is_none() {
                    if let Some(secs) = leg.duration_secs() {
                        let arrival = i64::try_from(secs)
                            .ok()
                            .and_then(TimeDelta::try_seconds)
                            .and_then(|d| departure.checked_add_signed(d))
                            .ok_or_else(|| {
                                MapsError::Malformed(format!("route {i} leg duration out of range"))
                            })?;
                        leg.arrival_time = Some(Timestamp::new(arrival));
                    }
                }
                cursor = leg.arrival().unwrap_or(departure);
            }

            Ok(RouteCandidate {
                mode: Some(request.mode),
                summary: route.summary,
                legs,
            })
        })
        .collect()
}
