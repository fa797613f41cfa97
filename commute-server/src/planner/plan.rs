//! End-to-end commute planning: build, fetch, select.

use std::sync::Arc;

use crate::domain::{CommutePreferences, Event, RouteCandidate, TravelMode};

use super::builder::{DirectionRequestBuilder, MappingService};
use super::error::PlanError;
use super::policy::{ArriveForEvent, RequestPolicy};
use super::rank::select_best;

/// Plans the best route to an event.
///
/// Holds no mutable state, so one planner can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct CommutePlanner {
    maps: Arc<dyn MappingService>,
    policy: Arc<dyn RequestPolicy>,
}

impl CommutePlanner {
    /// Create a planner with the default [`ArriveForEvent`] policy.
    pub fn new(maps: Arc<dyn MappingService>) -> Self {
        Self::with_policy(maps, Arc::new(ArriveForEvent))
    }

    pub fn with_policy(maps: Arc<dyn MappingService>, policy: Arc<dyn RequestPolicy>) -> Self {
        Self { maps, policy }
    }

    fn builder(&self) -> DirectionRequestBuilder<'_> {
        DirectionRequestBuilder::new(self.maps.as_ref(), self.policy.as_ref())
    }

    /// Best route using the rider's preferred mode.
    pub async fn plan(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
    ) -> Result<RouteCandidate, PlanError> {
        let candidates = self.builder().build_and_fetch(origin, event, preferences).await?;
        select_best(candidates)
    }

    /// Best route across several modes.
    ///
    /// The rider's stored commute method is not consulted; `modes` decides
    /// what is fetched. Ranking ignores which mode produced a route.
    pub async fn plan_across_modes(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
        modes: &[TravelMode],
    ) -> Result<RouteCandidate, PlanError> {
        let candidates = self
            .builder()
            .fetch_modes(origin, event, preferences, modes)
            .await?;
        select_best(candidates)
    }
}
