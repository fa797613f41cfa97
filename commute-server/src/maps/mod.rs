//! Mapping service clients.
//!
//! Implementations of the planner's [`MappingService`](crate::planner::MappingService)
//! capability:
//! - [`GoogleMapsClient`] queries the Google Directions API over HTTP
//! - [`FixtureMappingService`] serves recorded responses from disk
//!
//! Directions only reports arrival times for transit legs; conversion
//! fills them in for other modes so every leg can be ranked.

mod client;
mod convert;
mod error;
mod fixture;
mod types;

pub use client::{GoogleMapsClient, MapsConfig};
pub use convert::convert_directions;
pub use error::MapsError;
pub use fixture::FixtureMappingService;
pub use types::{DirectionsResponse, DirectionsRoute};
