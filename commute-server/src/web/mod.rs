//! Web layer for the commute planner.
//!
//! JSON endpoints for users, events, schedules, route planning and chat.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
