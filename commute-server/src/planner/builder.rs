//! Direction requests and the mapping-service capability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;

use crate::domain::{CommutePreferences, Event, RouteCandidate, TravelMode};

use super::error::PlanError;
use super::policy::RequestPolicy;

/// When the rider wants to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timing {
    /// Depart at the time of the request.
    #[default]
    Now,
    /// Arrive no later than this.
    ArriveBy(DateTime<Utc>),
    /// Depart at this time.
    DepartAt(DateTime<Utc>),
}

/// A request for routes from the mapping service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
    pub timing: Timing,
    /// Ask for more than one route.
    pub alternatives: bool,
}

impl DirectionRequest {
    /// Create an unshaped request.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, mode: TravelMode) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode,
            timing: Timing::Now,
            alternatives: false,
        }
    }
}

/// Capability for fetching route candidates.
///
/// Implementations report every failure (transport, timeout, malformed
/// payload) as [`PlanError::ExternalService`].
#[async_trait]
pub trait MappingService: Send + Sync {
    async fn fetch_routes(&self, request: &DirectionRequest) -> Result<Vec<RouteCandidate>, PlanError>;
}

/// Builds direction requests from an event and preferences and fetches them.
pub struct DirectionRequestBuilder<'a> {
    maps: &'a dyn MappingService,
    policy: &'a dyn RequestPolicy,
}

impl<'a> DirectionRequestBuilder<'a> {
    pub fn new(maps: &'a dyn MappingService, policy: &'a dyn RequestPolicy) -> Self {
        Self { maps, policy }
    }

    /// Resolve the rider's preferred travel mode.
    pub fn preferred_mode(preferences: &CommutePreferences) -> Result<TravelMode, PlanError> {
        TravelMode::from_commute_method(&preferences.commute_method)
            .ok_or_else(|| PlanError::InvalidPreference(preferences.commute_method.clone()))
    }

    /// Build the request for the rider's preferred mode.
    pub fn build(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
    ) -> Result<DirectionRequest, PlanError> {
        let mode = Self::preferred_mode(preferences)?;
        Ok(self.build_for_mode(origin, event, preferences, mode))
    }

    /// Build the request for a specific mode.
    pub fn build_for_mode(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
        mode: TravelMode,
    ) -> DirectionRequest {
        let mut request = DirectionRequest::new(origin, event.address.clone(), mode);
        self.policy.shape(&mut request, event, preferences);
        request
    }

    /// Build the request for the preferred mode and fetch its candidates.
    ///
    /// Makes exactly one call to the mapping service.
    pub async fn build_and_fetch(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
    ) -> Result<Vec<RouteCandidate>, PlanError> {
        let request = self.build(origin, event, preferences)?;
        self.fetch(&request).await
    }

    /// Fetch candidates for several modes concurrently.
    ///
    /// All fetches are joined before returning; candidates keep the order
    /// of `modes`. The first failure aborts the whole fetch.
    pub async fn fetch_modes(
        &self,
        origin: &str,
        event: &Event,
        preferences: &CommutePreferences,
        modes: &[TravelMode],
    ) -> Result<Vec<RouteCandidate>, PlanError> {
        let requests: Vec<DirectionRequest> = modes
            .iter()
            .map(|&mode| self.build_for_mode(origin, event, preferences, mode))
            .collect();

        let per_mode = try_join_all(requests.iter().map(|r| self.fetch(r))).await?;

        Ok(per_mode.into_iter().flatten().collect())
    }

    async fn fetch(&self, request: &DirectionRequest) -> Result<Vec<RouteCandidate>, PlanError> {
        let candidates = self.maps.fetch_routes(request).await?;

        Ok(candidates
            .into_iter()
            .map(|c| match c.mode {
                Some(_) => c,
                None => c.with_mode(request.mode),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;
    use crate::planner::{ArriveForEvent, PassThrough};
    use chrono::TimeZone;
    use std::sync::Mutex;

    /// Records every request and answers with one route per call.
    struct RecordingMaps {
        requests: Mutex<Vec<DirectionRequest>>,
        fail_mode: Option<TravelMode>,
    }

    impl RecordingMaps {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                fail_mode: None,
            }
        }

        fn failing_on(mode: TravelMode) -> Self {
            Self {
                fail_mode: Some(mode),
                ..Self::new()
            }
        }

        fn requests(&self) -> Vec<DirectionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MappingService for RecordingMaps {
        async fn fetch_routes(
            &self,
            request: &DirectionRequest,
        ) -> Result<Vec<RouteCandidate>, PlanError> {
            self.requests.lock().unwrap().push(request.clone());

            if self.fail_mode == Some(request.mode) {
                return Err(PlanError::ExternalService {
                    mode: request.mode,
                    message: "connection reset".into(),
                });
            }

            let leg = Leg::new(600, vec![], Utc.with_ymd_and_hms(2023, 11, 30, 10, 0, 0).unwrap())
                .with_distance(18199);
            Ok(vec![RouteCandidate::new(vec![leg])])
        }
    }

    fn event() -> Event {
        Event::new(
            "cpen321",
            Utc.with_ymd_and_hms(2023, 11, 30, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 11, 30, 12, 0, 0).unwrap(),
            "2357 Main Mall, Vancouver",
        )
    }

    const ORIGIN: &str = "6551 No. 3 Rd, Richmond";

    #[tokio::test]
    async fn driving_maps_to_driving_mode() {
        let maps = RecordingMaps::new();
        let builder = DirectionRequestBuilder::new(&maps, &ArriveForEvent);

        let routes = builder
            .build_and_fetch(ORIGIN, &event(), &CommutePreferences::new("Driving"))
            .await
            .unwrap();

        let requests = maps.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, TravelMode::Driving);
        assert_eq!(requests[0].origin, ORIGIN);
        assert_eq!(requests[0].destination, "2357 Main Mall, Vancouver");
        assert_eq!(routes[0].legs[0].distance.as_ref().unwrap().value, 18199);
        assert_eq!(routes[0].mode, Some(TravelMode::Driving));
    }

    #[tokio::test]
    async fn transit_maps_to_transit_mode() {
        let maps = RecordingMaps::new();
        let builder = DirectionRequestBuilder::new(&maps, &ArriveForEvent);

        builder
            .build_and_fetch(ORIGIN, &event(), &CommutePreferences::new("Transit"))
            .await
            .unwrap();

        let requests = maps.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].mode, TravelMode::Transit);
        assert_eq!(requests[0].timing, Timing::ArriveBy(event().start));
    }

    #[tokio::test]
    async fn unrecognized_method_fails_before_any_call() {
        let maps = RecordingMaps::new();
        let builder = DirectionRequestBuilder::new(&maps, &ArriveForEvent);

        let err = builder
            .build_and_fetch(ORIGIN, &event(), &CommutePreferences::new("Bicycle"))
            .await
            .unwrap_err();

        assert_eq!(err, PlanError::InvalidPreference("Bicycle".into()));
        assert!(maps.requests().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let maps = RecordingMaps::failing_on(TravelMode::Driving);
        let builder = DirectionRequestBuilder::new(&maps, &PassThrough);

        let err = builder
            .build_and_fetch(ORIGIN, &event(), &CommutePreferences::new("Driving"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PlanError::ExternalService {
                mode: TravelMode::Driving,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn fetch_modes_issues_one_call_per_mode_in_order() {
        let maps = RecordingMaps::new();
        let builder = DirectionRequestBuilder::new(&maps, &PassThrough);

        let routes = builder
            .fetch_modes(
                ORIGIN,
                &event(),
                &CommutePreferences::new("Driving"),
                &[TravelMode::Transit, TravelMode::Walking],
            )
            .await
            .unwrap();

        assert_eq!(maps.requests().len(), 2);
        let modes: Vec<_> = routes.iter().map(|r| r.mode).collect();
        assert_eq!(modes, vec![Some(TravelMode::Transit), Some(TravelMode::Walking)]);
    }

    #[tokio::test]
    async fn fetch_modes_aborts_on_any_failure() {
        let maps = RecordingMaps::failing_on(TravelMode::Walking);
        let builder = DirectionRequestBuilder::new(&maps, &PassThrough);

        let result = builder
            .fetch_modes(
                ORIGIN,
                &event(),
                &CommutePreferences::new("Driving"),
                &[TravelMode::Driving, TravelMode::Walking],
            )
            .await;

        assert!(matches!(result, Err(PlanError::ExternalService { .. })));
    }

    #[test]
    fn build_does_not_fetch() {
        let maps = RecordingMaps::new();
        let builder = DirectionRequestBuilder::new(&maps, &PassThrough);

        let request = builder
            .build(ORIGIN, &event(), &CommutePreferences::new("Walking"))
            .unwrap();

        assert_eq!(request.mode, TravelMode::Walking);
        assert_eq!(request.timing, Timing::Now);
        assert!(maps.requests().is_empty());
    }
}
