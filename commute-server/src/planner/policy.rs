//! Request shaping policies.
//!
//! How `preparation_time` and `maxMissedBus` influence the outgoing
//! request is a policy decision, so it is pluggable.

use crate::domain::{CommutePreferences, Event};

use super::builder::{DirectionRequest, Timing};

/// Adjusts a direction request before it is sent.
pub trait RequestPolicy: Send + Sync {
    fn shape(&self, request: &mut DirectionRequest, event: &Event, preferences: &CommutePreferences);
}

/// Aim to arrive when the event starts.
///
/// Scheduled modes (transit) ask to arrive by the event start, and ask for
/// alternatives when the rider tolerates missing a bus. Other modes depart
/// now.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArriveForEvent;

impl RequestPolicy for ArriveForEvent {
    fn shape(&self, request: &mut DirectionRequest, event: &Event, preferences: &CommutePreferences) {
        if request.mode.is_scheduled() {
            request.timing = Timing::ArriveBy(event.start);
            request.alternatives = preferences.max_missed_bus > 0;
        }
    }
}

/// Send the request as built: no times, no alternatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl RequestPolicy for PassThrough {
    fn shape(&self, _request: &mut DirectionRequest, _event: &Event, _preferences: &CommutePreferences) {}
}
