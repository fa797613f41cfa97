//! Commute route planning.
//!
//! Given an origin, an event and a rider's preferences, builds a request
//! for the mapping service, fetches candidate routes and picks the single
//! best one.
//!
//! Ranking compares the first leg of each candidate by duration, then
//! number of steps, then arrival time. Ties go to the candidate seen first.

mod builder;
mod error;
mod plan;
mod policy;
mod rank;

pub use builder::{DirectionRequest, DirectionRequestBuilder, MappingService, Timing};
pub use error::PlanError;
pub use plan::CommutePlanner;
pub use policy::{ArriveForEvent, PassThrough, RequestPolicy};
pub use rank::{RankKey, compare_routes, select_best};
