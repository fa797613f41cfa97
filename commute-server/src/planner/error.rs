//! Planning error types.

use crate::domain::TravelMode;

/// Errors surfaced by route planning.
///
/// The planner never recovers from these; callers decide how to report them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The stored commute method does not name a travel mode
    #[error("unrecognized commute method: {0:?}")]
    InvalidPreference(String),

    /// The mapping service failed, timed out, or returned a malformed payload
    #[error("mapping service failed for {mode} request: {message}")]
    ExternalService { mode: TravelMode, message: String },

    /// A candidate lacks a field ranking depends on
    #[error("invalid route candidate: {0}")]
    Validation(String),

    /// Nothing to choose from
    #[error("no route candidates to choose from")]
    EmptyCandidateSet,
}
