//! Domain types for the commute planner.
//!
//! Users, their events and preferences, chat rooms, and the route
//! candidates the mapping service proposes.

mod chat;
mod event;
mod mode;
mod preferences;
mod route;
mod user;

pub use chat::{ChatMessage, ChatRoom, DEFAULT_HISTORY_LIMIT};
pub use event::Event;
pub use mode::TravelMode;
pub use preferences::{CommutePreferences, NotificationPreferences};
pub use route::{Leg, Measure, RouteCandidate, Timestamp};
pub use user::{ScheduleEntry, User};
